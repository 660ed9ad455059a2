//! Reactive view state provided as Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` mirrors the session guard's outcome for rendering, `ui` holds
//! shell chrome. Both are plain structs wrapped in `RwSignal` by `app::App`.

pub mod auth;
pub mod ui;
