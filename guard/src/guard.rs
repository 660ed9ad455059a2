//! Navigation guard for the protected area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Called once per navigation before the destination renders. The server
//! runs it as request middleware (fresh cache per request), the browser runs
//! it on every route change (one cache per page load).
//!
//! ORDERING
//! ========
//! The prefix check precedes any network call, and the cache is settled
//! before the decision is returned. The transport call is the only await.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::cache::SessionCache;
use crate::prefix::ProtectedPrefixSet;
use crate::transport::SessionTransport;

pub const LOGIN_PATH: &str = "/login";

/// Where the guard runs. Selected by the host at construction time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionSide {
    /// Handling an incoming page request on behalf of a client.
    Serving,
    /// Inside an already loaded page.
    Display,
}

impl ExecutionSide {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Serving => "serving",
            Self::Display => "display",
        }
    }

    /// How a redirect must be issued from this side.
    #[must_use]
    pub fn redirect_mode(self) -> RedirectMode {
        match self {
            Self::Serving => RedirectMode::Found,
            Self::Display => RedirectMode::Replace,
        }
    }
}

/// Destination of a navigation. Only the path takes part in matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationTarget {
    path: String,
}

impl NavigationTarget {
    /// Build a target from a path, dropping any query string or fragment.
    pub fn new(path: impl AsRef<str>) -> Self {
        let raw = path.as_ref();
        let end = raw.find(['?', '#']).unwrap_or(raw.len());
        Self { path: raw[..end].to_owned() }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectMode {
    /// HTTP `302 Found`, for the serving side.
    Found,
    /// Client-side navigation replacing the current history entry.
    Replace,
}

impl RedirectMode {
    /// HTTP status to answer with, if this redirect is an HTTP response.
    #[must_use]
    pub fn status_code(self) -> Option<u16> {
        match self {
            Self::Found => Some(302),
            Self::Replace => None,
        }
    }

    #[must_use]
    pub fn replaces_history(self) -> bool {
        matches!(self, Self::Replace)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub location: String,
    pub mode: RedirectMode,
}

/// Outcome of one guard run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Render the destination unchanged.
    Allow,
    /// Not authenticated: send the user to the login destination.
    Redirect(Redirect),
    /// A newer verification (or a cache clear) overtook this one while it was
    /// in flight. The navigation is stale and the host must not act on it.
    Superseded,
}

/// Decides whether a navigation may proceed.
pub struct SessionGuard<T> {
    prefixes: ProtectedPrefixSet,
    side: ExecutionSide,
    transport: T,
    login_path: String,
}

impl<T: SessionTransport> SessionGuard<T> {
    pub fn new(prefixes: ProtectedPrefixSet, side: ExecutionSide, transport: T) -> Self {
        Self { prefixes, side, transport, login_path: LOGIN_PATH.to_owned() }
    }

    #[must_use]
    pub fn with_login_path(mut self, login_path: impl Into<String>) -> Self {
        self.login_path = login_path.into();
        self
    }

    #[must_use]
    pub fn requires_session(&self, target: &NavigationTarget) -> bool {
        self.prefixes.is_protected(target.path())
    }

    #[must_use]
    pub fn login_redirect(&self) -> Redirect {
        Redirect { location: self.login_path.clone(), mode: self.side.redirect_mode() }
    }

    /// Run the guard for one navigation against the context's cache.
    ///
    /// Failures never escape: they clear the cache and become
    /// [`Decision::Redirect`]. No retry is attempted.
    pub async fn check(&self, target: &NavigationTarget, cache: &SessionCache) -> Decision {
        let path = target.path();
        let side = self.side.as_str();

        let Some(prefix) = self.prefixes.matching(path) else {
            tracing::trace!(path, side, "public route, guard skipped");
            return Decision::Allow;
        };

        if self.side == ExecutionSide::Display && cache.is_populated() {
            tracing::debug!(path, prefix, side, "cached session trusted");
            return Decision::Allow;
        }

        let ticket = cache.begin();
        match self.transport.fetch_session().await {
            Ok(session) => {
                let user_id = session.user_id.clone();
                if !cache.settle(ticket, Some(session)) {
                    tracing::debug!(path, side, "verification superseded");
                    return Decision::Superseded;
                }
                tracing::debug!(path, prefix, side, user_id, "session verified");
                Decision::Allow
            }
            Err(error) => {
                if !cache.settle(ticket, None) {
                    tracing::debug!(path, side, %error, "failed verification superseded");
                    return Decision::Superseded;
                }
                tracing::info!(path, prefix, side, %error, login = %self.login_path, "not authenticated, redirecting");
                Decision::Redirect(self.login_redirect())
            }
        }
    }
}
