//! Session guard for protected navigation.
//!
//! This crate owns the decision procedure shared by `server` (serving side,
//! one guard run per incoming page request) and `client` (display side, one
//! run per in-page navigation). It is UI-framework agnostic: the host supplies
//! a [`SessionTransport`] and a context-scoped [`SessionCache`], and acts on
//! the returned [`Decision`].

pub mod cache;
pub mod guard;
pub mod prefix;
pub mod session;
pub mod transport;

pub use cache::{SessionCache, Ticket};
pub use guard::{Decision, ExecutionSide, LOGIN_PATH, NavigationTarget, Redirect, RedirectMode, SessionGuard};
pub use prefix::{DEFAULT_PROTECTED_PREFIX, ProtectedPrefixSet};
pub use session::Session;
pub use transport::{SessionTransport, VerifyError, normalize_api_base, parse_session_response, session_endpoint};
