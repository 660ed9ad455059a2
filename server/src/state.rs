//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into the guard middleware and handlers via the
//! `State` extractor. It holds only process-wide values; anything scoped to
//! one request (the session cache, the forwarded cookie) is built per request.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::session_api::{SessionApi, SessionApiBuildError};

/// Clone is required by Axum; inner fields are Arc-wrapped or cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub session_api: SessionApi,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the session API client cannot be built.
    pub fn new(config: ServerConfig) -> Result<Self, SessionApiBuildError> {
        let session_api = SessionApi::new(config.session_endpoint(), config.timeouts)?;
        Ok(Self { config: Arc::new(config), session_api })
    }
}
