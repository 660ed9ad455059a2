//! Outbound service clients.

pub mod session_api;
