//! Serving-side session guard middleware.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the SSR page routes. Each request gets its own empty
//! [`SessionCache`]; on success the cache travels on to the renderer as a
//! request extension, on failure the client receives `302 Found` to the login
//! page and the protected view is never rendered.

use axum::extract::{Request, State};
use axum::http::header::{CACHE_CONTROL, COOKIE, LOCATION};
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use guard::{Decision, ExecutionSide, NavigationTarget, Redirect, SessionCache, SessionGuard};

use crate::state::AppState;

pub async fn session_guard(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let target = NavigationTarget::new(request.uri().path());
    let cache = SessionCache::new();
    let transport = state.session_api.forwarding(request.headers().get_all(COOKIE));
    let guard = SessionGuard::new(state.config.protected_prefixes.clone(), ExecutionSide::Serving, transport);

    let redirect = match guard.check(&target, &cache).await {
        Decision::Allow => {
            request.extensions_mut().insert(cache);
            return next.run(request).await;
        }
        Decision::Redirect(redirect) => redirect,
        // The cache is private to this request, so nothing can overtake the
        // verification. Fail closed all the same.
        Decision::Superseded => guard.login_redirect(),
    };

    redirect_response(&redirect)
}

/// HTTP redirect for `redirect`, never cached. A mode without a status code
/// of its own is answered as `302 Found`.
pub(crate) fn redirect_response(redirect: &Redirect) -> Response {
    let Ok(location) = HeaderValue::from_str(&redirect.location) else {
        tracing::error!(location = %redirect.location, "redirect location is not a valid header value");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };
    let status = redirect
        .mode
        .status_code()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::FOUND);
    (
        status,
        [(LOCATION, location), (CACHE_CONTROL, HeaderValue::from_static("no-store"))],
    )
        .into_response()
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
