//! Workspace home, the first protected page.

use leptos::prelude::*;

use crate::components::app_frame::AppFrame;
use crate::components::protected::Protected;
use crate::state::auth::AuthState;

#[component]
pub fn WorkspacePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || match auth.with(|s| s.display_label().map(str::to_owned)) {
        Some(name) => format!("Welcome back, {name}."),
        None => "Welcome back.".to_owned(),
    };

    view! {
        <AppFrame>
            <Protected>
                <section class="workspace-page">
                    <h2>{greeting}</h2>
                    <p>"Nothing here yet."</p>
                </section>
            </Protected>
        </AppFrame>
    }
}
