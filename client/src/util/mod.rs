//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/router glue from page and component logic
//! to improve reuse and testability.

pub mod route_guard;
