//! Display-side session transport.
//!
//! SYSTEM CONTEXT
//! ==============
//! `GET {apiBase}/auth/session` from the browser with `credentials: include`
//! and `cache: no-cache`. The browser attaches the session cookie itself;
//! nothing is read from or written to the document.

use guard::{Session, SessionTransport, VerifyError, session_endpoint};

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

#[derive(Clone, Debug)]
pub struct BrowserTransport {
    endpoint: String,
}

impl BrowserTransport {
    #[must_use]
    pub fn new(api_base: &str) -> Self {
        Self { endpoint: session_endpoint(api_base) }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl SessionTransport for BrowserTransport {
    async fn fetch_session(&self) -> Result<Session, VerifyError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint)
                .credentials(web_sys::RequestCredentials::Include)
                .cache(web_sys::RequestCache::NoCache)
                .header("Accept", "application/json")
                .send()
                .await
                .map_err(|e| VerifyError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| VerifyError::Transport(e.to_string()))?;
            guard::parse_session_response(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(VerifyError::Transport(format!("{} is only reachable from the browser", self.endpoint)))
        }
    }
}
