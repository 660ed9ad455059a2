//! Root application component with routing and context providers.

use guard::SessionCache;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::bootstrap::{BOOTSTRAP_ELEMENT_ID, Bootstrap};
use crate::config::PublicConfig;
use crate::pages::{index::IndexPage, login::LoginPage, settings::SettingsPage, workspace::WorkspacePage};
use crate::state::{auth::AuthState, ui::UiState};
use crate::util::route_guard::install_route_guard;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Carries the bootstrap payload so hydration starts from the config and
/// session the server used.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let payload = Bootstrap::current().encode();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script type="application/json" id=BOOTSTRAP_ELEMENT_ID inner_html=payload></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, the session cache and view state, then sets up routing
/// with the display-side guard installed.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let Bootstrap { config, session } = Bootstrap::current();
    let cache = SessionCache::seeded(session.clone());
    let auth = RwSignal::new(AuthState::seeded(session));
    let ui = RwSignal::new(UiState::default());

    let title = config.app_name.clone();
    provide_context(config.clone());
    provide_context(cache.clone());
    provide_context(auth);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text=title/>

        <Router>
            <RouteGuard config=config cache=cache auth=auth/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=IndexPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("app") view=WorkspacePage/>
                <Route path=(StaticSegment("app"), StaticSegment("settings")) view=SettingsPage/>
            </Routes>
        </Router>
    }
}

/// Installs the display-side guard inside the router context.
#[component]
fn RouteGuard(config: PublicConfig, cache: SessionCache, auth: RwSignal<AuthState>) -> impl IntoView {
    install_route_guard(config.prefix_set(), &config.api_base, cache, auth);
}
