//! Account settings: read-only view of the verified session.

use leptos::prelude::*;

use crate::components::app_frame::AppFrame;
use crate::components::protected::Protected;
use crate::state::auth::AuthState;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let field = move |read: fn(&guard::Session) -> String| {
        move || auth.with(|s| s.session.as_ref().map(read).unwrap_or_default())
    };

    view! {
        <AppFrame>
            <Protected>
                <section class="settings-page">
                    <h2>"Settings"</h2>
                    <dl>
                        <dt>"Name"</dt>
                        <dd>{field(|s| s.display_name.clone())}</dd>
                        <dt>"Email"</dt>
                        <dd>{field(|s| s.email.clone())}</dd>
                        <dt>"Organization"</dt>
                        <dd>{field(|s| s.organization_id.clone())}</dd>
                        <dt>"Roles"</dt>
                        <dd>{field(|s| s.roles.iter().cloned().collect::<Vec<_>>().join(", "))}</dd>
                    </dl>
                </section>
            </Protected>
        </AppFrame>
    }
}
