//! Serving-to-display hand-off payload.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders `{ config, session }` into the HTML shell as a JSON
//! script element. On hydration the browser reads it back to seed its
//! `PublicConfig` and `SessionCache`, so a page the server already verified
//! is not verified a second time.
//!
//! DESIGN
//! ======
//! `<`, `>` and `&` are written as JSON unicode escapes. The payload can then
//! never close the surrounding `<script>` element, and `serde_json` decodes
//! it back to the same value.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use guard::Session;
use serde::{Deserialize, Serialize};

use crate::config::PublicConfig;

pub const BOOTSTRAP_ELEMENT_ID: &str = "portal-bootstrap";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bootstrap {
    pub config: PublicConfig,
    pub session: Option<Session>,
}

impl Bootstrap {
    /// JSON text safe to place inside a `<script>` element.
    #[must_use]
    pub fn encode(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => escape_for_script(&json),
            Err(_) => "{}".to_owned(),
        }
    }

    /// Parse a payload. Malformed input yields `None`.
    #[must_use]
    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Payload for the page being rendered.
    ///
    /// SSR: config from context, session from the request's verified cache.
    /// Hydrate: whatever the server embedded in the document.
    #[must_use]
    pub fn current() -> Self {
        #[cfg(feature = "ssr")]
        {
            Self::from_request()
        }
        #[cfg(all(feature = "hydrate", not(feature = "ssr")))]
        {
            Self::from_document()
        }
        #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
        {
            Self::default()
        }
    }

    #[cfg(feature = "ssr")]
    fn from_request() -> Self {
        use guard::SessionCache;
        use leptos::prelude::use_context;

        let config = use_context::<PublicConfig>().unwrap_or_default();
        let session = use_context::<http::request::Parts>()
            .and_then(|parts| parts.extensions.get::<SessionCache>().and_then(SessionCache::get));
        Self { config, session }
    }

    #[cfg(all(feature = "hydrate", not(feature = "ssr")))]
    fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(BOOTSTRAP_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            log::warn!("bootstrap payload missing, using defaults");
            return Self::default();
        };
        Self::decode(&raw).unwrap_or_else(|| {
            log::warn!("bootstrap payload malformed, using defaults");
            Self::default()
        })
    }
}

fn escape_for_script(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for ch in json.chars() {
        match ch {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            _ => out.push(ch),
        }
    }
    out
}
