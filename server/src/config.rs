//! Server configuration parsed from environment variables.

use client::config::{DEFAULT_API_BASE, DEFAULT_APP_NAME, PublicConfig};
use guard::{ProtectedPrefixSet, normalize_api_base, session_endpoint};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_ORIGIN: &str = "http://127.0.0.1:8080";
pub const DEFAULT_SESSION_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SESSION_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid API_ORIGIN '{0}': expected an http:// or https:// origin")]
    InvalidOrigin(String),
    #[error("PROTECTED_PREFIXES has no usable prefix: '{0}'")]
    NoProtectedPrefixes(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Origin the server itself uses to reach the API. The browser resolves
    /// `public.api_base` against the page instead.
    pub api_origin: String,
    pub public: PublicConfig,
    pub protected_prefixes: ProtectedPrefixSet,
    pub timeouts: SessionApiTimeouts,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional (defaults in parentheses):
    /// - `PORT` (3000)
    /// - `API_ORIGIN` (`http://127.0.0.1:8080`)
    /// - `PUBLIC_API_BASE` (`/api`), trailing slashes stripped
    /// - `PUBLIC_APP_NAME` (`teuportal`)
    /// - `PUBLIC_REQUIRE_SETUP` (false)
    /// - `PROTECTED_PREFIXES` (`/app`), comma separated
    /// - `SESSION_REQUEST_TIMEOUT_SECS` (10)
    /// - `SESSION_CONNECT_TIMEOUT_SECS` (5)
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an unparseable port, an origin without
    /// an http(s) scheme, or a prefix list with nothing usable in it.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let raw_origin = lookup("API_ORIGIN").unwrap_or_else(|| DEFAULT_API_ORIGIN.to_owned());
        let api_origin = raw_origin.trim().trim_end_matches('/').to_owned();
        if !is_http_url(&api_origin) {
            return Err(ConfigError::InvalidOrigin(raw_origin));
        }

        let protected_prefixes = match lookup("PROTECTED_PREFIXES") {
            Some(raw) => match raw.parse::<ProtectedPrefixSet>() {
                Ok(set) if !set.is_empty() => set,
                _ => return Err(ConfigError::NoProtectedPrefixes(raw)),
            },
            None => ProtectedPrefixSet::default(),
        };

        let public = PublicConfig {
            api_base: normalize_api_base(&lookup("PUBLIC_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_owned())),
            app_name: lookup("PUBLIC_APP_NAME")
                .map(|name| name.trim().to_owned())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_APP_NAME.to_owned()),
            require_setup: lookup("PUBLIC_REQUIRE_SETUP")
                .and_then(|raw| parse_bool(&raw))
                .unwrap_or(false),
            protected_prefixes: protected_prefixes.iter().map(str::to_owned).collect(),
        };

        let timeouts = SessionApiTimeouts {
            request_secs: parse_u64(lookup("SESSION_REQUEST_TIMEOUT_SECS"), DEFAULT_SESSION_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(lookup("SESSION_CONNECT_TIMEOUT_SECS"), DEFAULT_SESSION_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, api_origin, public, protected_prefixes, timeouts })
    }

    /// Absolute session endpoint for serving-side verification.
    ///
    /// An absolute `api_base` is used as is; a path-only base is resolved
    /// against `api_origin`.
    #[must_use]
    pub fn session_endpoint(&self) -> String {
        if is_http_url(&self.public.api_base) {
            session_endpoint(&self.public.api_base)
        } else {
            format!("{}{}", self.api_origin, session_endpoint(&self.public.api_base))
        }
    }
}

/// Parse the usual boolean spellings (`1/true/yes/on`, `0/false/no/off`).
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}

fn is_http_url(raw: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| raw.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
