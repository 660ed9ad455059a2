//! Credential-aware access to the session endpoint.
//!
//! ARCHITECTURE
//! ============
//! The guard never inspects where it runs. The host picks the transport at
//! construction time: the server forwards the inbound `Cookie` header over
//! `reqwest`, the browser relies on its own cookie jar via `gloo-net`. Both
//! funnel the raw response through [`parse_session_response`].
//!
//! ERROR HANDLING
//! ==============
//! [`VerifyError`] keeps the cause for logging only. The guard treats every
//! variant the same way: not authenticated.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use crate::session::Session;

pub const SESSION_PATH: &str = "/auth/session";

/// Why a verification call did not yield a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    /// The request never produced a response (connect, timeout, body read).
    #[error("session request failed: {0}")]
    Transport(String),
    /// The endpoint answered with a non-success status.
    #[error("session endpoint rejected request: status {status}")]
    Rejected { status: u16 },
    /// A success status carried something that is not a session.
    #[error("session payload malformed: {0}")]
    Malformed(String),
}

/// One verification call against the session endpoint.
///
/// Implementations must bypass intermediate HTTP caches.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait SessionTransport {
    /// Fetch and validate the current session.
    ///
    /// # Errors
    ///
    /// Returns a [`VerifyError`] on transport failure, non-success status, or
    /// an unparseable payload.
    async fn fetch_session(&self) -> Result<Session, VerifyError>;
}

/// Strip trailing slashes from a configured API base (`"/api/"` -> `"/api"`).
#[must_use]
pub fn normalize_api_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

/// `{apiBase}/auth/session` for a raw, possibly slash-terminated, base.
#[must_use]
pub fn session_endpoint(api_base: &str) -> String {
    format!("{}{SESSION_PATH}", normalize_api_base(api_base))
}

/// Interpret a session endpoint response.
///
/// # Errors
///
/// [`VerifyError::Rejected`] for any non-2xx status, [`VerifyError::Malformed`]
/// when the body is not a session with a user and organization.
pub fn parse_session_response(status: u16, body: &str) -> Result<Session, VerifyError> {
    if !(200..300).contains(&status) {
        return Err(VerifyError::Rejected { status });
    }
    let session: Session = serde_json::from_str(body).map_err(|e| VerifyError::Malformed(e.to_string()))?;
    if !session.has_identity() {
        return Err(VerifyError::Malformed("session without user or organization".to_owned()));
    }
    Ok(session)
}
