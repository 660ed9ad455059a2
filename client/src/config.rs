//! Public runtime configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server builds this from its environment and provides it as Leptos
//! context during SSR; the browser receives the same value through the
//! bootstrap payload. Nothing secret belongs here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use guard::{DEFAULT_PROTECTED_PREFIX, ProtectedPrefixSet};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_APP_NAME: &str = "teuportal";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicConfig {
    /// API base path without trailing slash.
    pub api_base: String,
    pub app_name: String,
    pub require_setup: bool,
    /// Normalized protected prefixes, shared with the serving side.
    pub protected_prefixes: Vec<String>,
}

impl Default for PublicConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            app_name: DEFAULT_APP_NAME.to_owned(),
            require_setup: false,
            protected_prefixes: vec![DEFAULT_PROTECTED_PREFIX.to_owned()],
        }
    }
}

impl PublicConfig {
    /// Prefix set for the guard. Falls back to the default when the shipped
    /// list holds nothing usable.
    #[must_use]
    pub fn prefix_set(&self) -> ProtectedPrefixSet {
        let set = ProtectedPrefixSet::new(&self.protected_prefixes);
        if set.is_empty() { ProtectedPrefixSet::default() } else { set }
    }
}
