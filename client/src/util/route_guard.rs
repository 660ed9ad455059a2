//! Display-side host for the session guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs `guard::SessionGuard` on every client-side pathname change. The
//! serving side already verified the first page it rendered; from there on
//! this host trusts the seeded cache and only calls the session endpoint when
//! the cache is empty.
//!
//! DESIGN
//! ======
//! Redirects use history replacement so Back does not return to a page the
//! user may not see. A verification that finishes after the user has already
//! moved on is dropped: the guard reports it as superseded, and a redirect
//! for a path that is no longer current is not applied.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use guard::{NavigationTarget, ProtectedPrefixSet, Redirect, SessionCache};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Router options for applying a guard redirect.
#[must_use]
pub fn navigate_options(redirect: &Redirect) -> NavigateOptions {
    NavigateOptions { replace: redirect.mode.replaces_history(), ..NavigateOptions::default() }
}

/// Whether `target` is still the page the router shows.
#[must_use]
pub fn is_current(target: &NavigationTarget, current_path: &str) -> bool {
    target.path() == NavigationTarget::new(current_path).path()
}

/// Check every protected navigation and send unauthenticated users to
/// `/login`. Must be called inside `<Router>`.
pub fn install_route_guard(
    prefixes: ProtectedPrefixSet,
    api_base: &str,
    cache: SessionCache,
    auth: RwSignal<AuthState>,
) {
    #[cfg(feature = "hydrate")]
    {
        use std::rc::Rc;

        use guard::{Decision, ExecutionSide, SessionGuard};
        use leptos_router::hooks::{use_location, use_navigate};

        use crate::net::transport::BrowserTransport;

        let location = use_location();
        let navigate = use_navigate();
        let guard = Rc::new(SessionGuard::new(prefixes, ExecutionSide::Display, BrowserTransport::new(api_base)));

        Effect::new(move || {
            let target = NavigationTarget::new(location.pathname.get());
            if !guard.requires_session(&target) {
                return;
            }
            if !cache.is_populated() {
                auth.update(AuthState::begin_verification);
            }

            let guard = Rc::clone(&guard);
            let cache = cache.clone();
            let navigate = navigate.clone();
            let pathname = location.pathname;
            leptos::task::spawn_local(async move {
                match guard.check(&target, &cache).await {
                    Decision::Allow => auth.update(|state| state.verified(cache.get())),
                    Decision::Redirect(redirect) => {
                        auth.update(AuthState::rejected);
                        if is_current(&target, &pathname.get_untracked()) {
                            navigate(&redirect.location, navigate_options(&redirect));
                        } else {
                            log::debug!("redirect for {} dropped, user navigated away", target.path());
                        }
                    }
                    Decision::Superseded => {
                        log::debug!("verification for {} superseded", target.path());
                    }
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (prefixes, api_base, cache, auth);
    }
}
