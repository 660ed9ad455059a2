//! Serving-side access to the session endpoint.
//!
//! DESIGN
//! ======
//! There is no browser cookie jar on the server, so every verification
//! forwards the inbound request's `Cookie` header explicitly. One pooled
//! `reqwest::Client` is shared; a [`ForwardedCookieTransport`] is cut per
//! request and carries only that request's credential.

use std::time::Duration;

use axum::http::HeaderValue;
use axum::http::header::{ACCEPT, CACHE_CONTROL, COOKIE, PRAGMA};
use guard::{Session, SessionTransport, VerifyError, parse_session_response};

use crate::config::SessionApiTimeouts;

#[derive(Debug, thiserror::Error)]
#[error("session API client build failed: {0}")]
pub struct SessionApiBuildError(String);

/// Shared handle to the session endpoint.
#[derive(Clone, Debug)]
pub struct SessionApi {
    http: reqwest::Client,
    endpoint: String,
}

impl SessionApi {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: String, timeouts: SessionApiTimeouts) -> Result<Self, SessionApiBuildError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            // A redirect from the session endpoint is an answer, not a hop to follow.
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| SessionApiBuildError(e.to_string()))?;
        Ok(Self { http, endpoint })
    }

    /// Transport for one inbound request, forwarding its `Cookie` headers.
    ///
    /// HTTP/2 clients may split cookies over several `Cookie` fields; they
    /// are joined with `"; "` into the single header HTTP/1.1 expects.
    #[must_use]
    pub fn forwarding<'a>(&self, cookies: impl IntoIterator<Item = &'a HeaderValue>) -> ForwardedCookieTransport {
        ForwardedCookieTransport {
            http: self.http.clone(),
            endpoint: self.endpoint.clone(),
            cookie: join_cookies(cookies),
        }
    }
}

fn join_cookies<'a>(cookies: impl IntoIterator<Item = &'a HeaderValue>) -> Option<HeaderValue> {
    let mut joined: Vec<u8> = Vec::new();
    for value in cookies.into_iter().filter(|value| !value.is_empty()) {
        if !joined.is_empty() {
            joined.extend_from_slice(b"; ");
        }
        joined.extend_from_slice(value.as_bytes());
    }
    if joined.is_empty() {
        return None;
    }
    HeaderValue::from_bytes(&joined).ok()
}

/// Session transport that presents an explicit, forwarded credential.
#[derive(Debug)]
pub struct ForwardedCookieTransport {
    http: reqwest::Client,
    endpoint: String,
    cookie: Option<HeaderValue>,
}

#[async_trait::async_trait]
impl SessionTransport for ForwardedCookieTransport {
    async fn fetch_session(&self) -> Result<Session, VerifyError> {
        let mut request = self
            .http
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache");
        if let Some(cookie) = &self.cookie {
            request = request.header(COOKIE, cookie.clone());
        }

        let response = request.send().await.map_err(|e| VerifyError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| VerifyError::Transport(e.to_string()))?;

        parse_session_response(status, &body)
    }
}

#[cfg(test)]
#[path = "session_api_test.rs"]
mod tests;
