//! Networking modules for the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` verifies sessions for the display-side guard, `api` handles
//! the remaining auth REST calls (logout, magic link).

pub mod api;
pub mod transport;
