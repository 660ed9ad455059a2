//! Auth REST helpers for the browser.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sent with
//! credentials so the session cookie travels cross-origin.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so a failed
//! logout or magic-link request degrades to a message on screen.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint(api_base: &str) -> String {
    format!("{api_base}/auth/logout")
}

#[cfg(any(test, feature = "hydrate"))]
fn magic_link_endpoint(api_base: &str) -> String {
    format!("{api_base}/auth/email")
}

/// Asks the API for a JSON answer (`204`) rather than a redirect to its own
/// login page, which the fetch would otherwise follow cross-origin.
#[cfg(any(test, feature = "hydrate"))]
fn logout_headers() -> [(&'static str, &'static str); 1] {
    [("Accept", "application/json")]
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_failed_message(status: u16) -> String {
    format!("logout failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn magic_link_failed_message(status: u16) -> String {
    if status == 429 {
        "too many requests, try again in a minute".to_owned()
    } else {
        format!("magic link request failed: {status}")
    }
}

/// Provider sign-in entry point, `{api_base}/auth/signin`.
#[must_use]
pub fn sign_in_url(api_base: &str) -> String {
    format!("{api_base}/auth/signin")
}

/// End the API session via `POST {api_base}/auth/logout`.
///
/// # Errors
///
/// Returns an error string if the request fails or the API answers non-2xx.
pub async fn logout(api_base: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::post(&logout_endpoint(api_base))
            .credentials(web_sys::RequestCredentials::Include);
        for (name, value) in logout_headers() {
            request = request.header(name, value);
        }
        let resp = request
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(logout_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api_base;
        Err("not available on server".to_owned())
    }
}

/// Ask the API to email a sign-in link via `POST {api_base}/auth/email`.
///
/// # Errors
///
/// Returns an error string if the request fails or the API answers non-2xx;
/// rate limiting (`429`) gets its own message.
pub async fn request_magic_link(api_base: &str, email: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post(&magic_link_endpoint(api_base))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(magic_link_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_base, email);
        Err("not available on server".to_owned())
    }
}
