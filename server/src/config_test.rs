use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| env.get(key).cloned())
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_origin, DEFAULT_API_ORIGIN);
    assert_eq!(cfg.public.api_base, "/api");
    assert_eq!(cfg.public.app_name, DEFAULT_APP_NAME);
    assert!(!cfg.public.require_setup);
    assert_eq!(cfg.protected_prefixes, ProtectedPrefixSet::default());
    assert_eq!(cfg.public.protected_prefixes, vec!["/app".to_owned()]);
    assert_eq!(
        cfg.timeouts,
        SessionApiTimeouts {
            request_secs: DEFAULT_SESSION_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_SESSION_CONNECT_TIMEOUT_SECS,
        }
    );
}

#[test]
fn default_session_endpoint_uses_origin_and_base() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.session_endpoint(), "http://127.0.0.1:8080/api/auth/session");
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn overrides_are_parsed() {
    let cfg = config_from(&[
        ("PORT", "8088"),
        ("API_ORIGIN", "https://core.internal:9443/"),
        ("PUBLIC_API_BASE", "/backend/"),
        ("PUBLIC_APP_NAME", "  acme  "),
        ("PUBLIC_REQUIRE_SETUP", "yes"),
        ("PROTECTED_PREFIXES", "/app, /admin/"),
        ("SESSION_REQUEST_TIMEOUT_SECS", "3"),
        ("SESSION_CONNECT_TIMEOUT_SECS", "1"),
    ])
    .unwrap();

    assert_eq!(cfg.port, 8088);
    assert_eq!(cfg.api_origin, "https://core.internal:9443");
    assert_eq!(cfg.public.api_base, "/backend");
    assert_eq!(cfg.public.app_name, "acme");
    assert!(cfg.public.require_setup);
    assert_eq!(cfg.protected_prefixes.iter().collect::<Vec<_>>(), vec!["/app", "/admin"]);
    assert_eq!(cfg.public.protected_prefixes, vec!["/app".to_owned(), "/admin".to_owned()]);
    assert_eq!(cfg.timeouts, SessionApiTimeouts { request_secs: 3, connect_secs: 1 });
    assert_eq!(cfg.session_endpoint(), "https://core.internal:9443/backend/auth/session");
}

#[test]
fn absolute_api_base_bypasses_origin() {
    let cfg = config_from(&[("PUBLIC_API_BASE", "https://api.example.com/v1/")]).unwrap();
    assert_eq!(cfg.session_endpoint(), "https://api.example.com/v1/auth/session");
}

#[test]
fn blank_app_name_falls_back() {
    let cfg = config_from(&[("PUBLIC_APP_NAME", "   ")]).unwrap();
    assert_eq!(cfg.public.app_name, DEFAULT_APP_NAME);
}

#[test]
fn unparseable_timeouts_fall_back() {
    let cfg = config_from(&[("SESSION_REQUEST_TIMEOUT_SECS", "soon")]).unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_SESSION_REQUEST_TIMEOUT_SECS);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn invalid_port_is_rejected() {
    let err = config_from(&[("PORT", "70000")]).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".to_owned()));
}

#[test]
fn origin_without_scheme_is_rejected() {
    for origin in ["core:8080", "ftp://core", "http://"] {
        let err = config_from(&[("API_ORIGIN", origin)]).unwrap_err();
        assert_eq!(err, ConfigError::InvalidOrigin(origin.to_owned()), "{origin}");
    }
}

#[test]
fn empty_prefix_list_is_rejected() {
    let err = config_from(&[("PROTECTED_PREFIXES", " , /")]).unwrap_err();
    assert!(matches!(err, ConfigError::NoProtectedPrefixes(_)));
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  true  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "NO"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}
