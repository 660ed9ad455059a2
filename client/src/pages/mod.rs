//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages compose reusable components and bind them to the router. Everything
//! under `/app` renders inside `AppFrame` behind the `Protected` gate.

pub mod index;
pub mod login;
pub mod settings;
pub mod workspace;
