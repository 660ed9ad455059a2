//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the authenticated shell chrome and gate protected
//! content while reading/writing shared state from Leptos context providers.

pub mod app_frame;
pub mod protected;
