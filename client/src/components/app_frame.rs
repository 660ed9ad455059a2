//! Authenticated shell: header, sidebar and notifications panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected page. Owns the logout action, which is the one place
//! the display side clears the session cache on purpose.

use guard::{LOGIN_PATH, SessionCache};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::PublicConfig;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn AppFrame(children: Children) -> impl IntoView {
    let config = expect_context::<PublicConfig>();
    let cache = expect_context::<SessionCache>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let app_name = config.app_name.clone();
    let user_label = move || auth.with(|s| s.display_label().map(str::to_owned)).unwrap_or_default();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        sign_out(config.api_base.clone(), cache.clone(), auth, ui, navigate.clone());
    };

    view! {
        <div class="app-frame" class=("app-frame--collapsed", move || !ui.get().sidebar_open)>
            <header class="app-header">
                <button class="app-header__toggle" on:click=move |_| ui.update(UiState::toggle_sidebar)>
                    "Menu"
                </button>
                <span class="app-header__title">{app_name}</span>
                <span class="app-header__user">{user_label}</span>
                <button
                    class="app-header__notifications"
                    on:click=move |_| ui.update(|u| u.set_notifications_open(!u.notifications_open))
                >
                    "Notifications"
                </button>
                <button class="app-header__logout" on:click=on_logout disabled=move || busy.get()>
                    "Log out"
                </button>
            </header>
            <Show when=move || ui.get().sidebar_open>
                <nav class="app-sidebar">
                    <A href="/app">"Workspace"</A>
                    <A href="/app/settings">"Settings"</A>
                </nav>
            </Show>
            <Show when=move || ui.get().notifications_open>
                <aside class="app-notifications">
                    <p>"No notifications."</p>
                    <button on:click=move |_| ui.update(UiState::close_notifications)>"Close"</button>
                </aside>
            </Show>
            <main class="app-main">{children()}</main>
        </div>
    }
}

/// Log out, then forget the session and leave for `/login`.
///
/// The cache is cleared even when the API call fails so a stale session is
/// never trusted again; clearing also invalidates any verification in flight.
fn sign_out<F>(api_base: String, cache: SessionCache, auth: RwSignal<AuthState>, ui: RwSignal<UiState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    let finish = move || {
        cache.clear();
        auth.update(AuthState::reset);
        ui.update(UiState::close_notifications);
        navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = crate::net::api::logout(&api_base).await {
            log::warn!("logout request failed: {e}");
        }
        finish();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api_base;
        finish();
    }
}
