//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::PublicConfig;

#[component]
pub fn IndexPage() -> impl IntoView {
    let config = expect_context::<PublicConfig>();
    let require_setup = config.require_setup;

    view! {
        <div class="index-page">
            <h1>{config.app_name}</h1>
            <Show when=move || require_setup>
                <p class="index-page__notice">"This installation still needs to be set up."</p>
            </Show>
            <nav class="index-page__links">
                <A href="/app">"Open workspace"</A>
                <A href="/login">"Sign in"</A>
            </nav>
        </div>
    }
}
