//! Gate for protected page bodies.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes render their children only once the guard has allowed
//! the current navigation. On the serving side that is already true when the
//! page renders, since the middleware refuses to render otherwise.

use leptos::prelude::*;

use crate::state::auth::{AuthState, AuthStatus};

#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let verified = move || auth.with(AuthState::is_verified);

    view! {
        <Show
            when=verified
            fallback=move || view! { <p class="guard-pending">{move || pending_message(auth.with(|s| s.status))}</p> }
        >
            {children()}
        </Show>
    }
}

fn pending_message(status: AuthStatus) -> &'static str {
    match status {
        AuthStatus::Rejected => "Redirecting to sign in...",
        _ => "Checking session...",
    }
}
