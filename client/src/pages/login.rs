//! Login page: magic-link request plus provider sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::config::PublicConfig;
use crate::net::api::sign_in_url;

/// Trim the address and require something that looks like one.
pub(crate) fn validate_email_input(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err("Enter an email first.");
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(email.to_owned())
        }
        _ => Err("Enter a valid email address."),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<PublicConfig>();
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let api_base = config.api_base.clone();
    let on_request_link = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_email_input(&email.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Sending sign-in link...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api_base = api_base.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::request_magic_link(&api_base, &email_value).await {
                    Ok(()) => info.set(format!("Check {email_value} for a sign-in link.")),
                    Err(e) => info.set(format!("Could not send link: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api_base, email_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{config.app_name.clone()}</h1>
                <p class="login-card__subtitle">"Sign in with an email link"</p>
                <form class="login-form" on:submit=on_request_link>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Email me a link"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Or"</p>
                <a href=sign_in_url(&config.api_base) rel="external" class="login-button">
                    "Sign in with your provider"
                </a>
            </div>
        </div>
    }
}
