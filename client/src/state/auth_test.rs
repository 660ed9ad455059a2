use super::*;

fn session(name: &str) -> Session {
    Session {
        user_id: "u-1".to_owned(),
        email: "ada@example.com".to_owned(),
        display_name: name.to_owned(),
        roles: std::collections::BTreeSet::new(),
        organization_id: "org-1".to_owned(),
    }
}

#[test]
fn default_is_idle_without_session() {
    let state = AuthState::default();
    assert_eq!(state.status, AuthStatus::Idle);
    assert!(state.session.is_none());
    assert!(!state.is_verified());
}

#[test]
fn seeded_with_session_is_verified() {
    let state = AuthState::seeded(Some(session("Ada")));
    assert!(state.is_verified());
    assert_eq!(AuthState::seeded(None).status, AuthStatus::Idle);
}

#[test]
fn verification_lifecycle() {
    let mut state = AuthState::default();
    state.begin_verification();
    assert_eq!(state.status, AuthStatus::Verifying);
    state.verified(Some(session("Ada")));
    assert!(state.is_verified());
    assert_eq!(state.session.as_ref().map(|s| s.user_id.as_str()), Some("u-1"));
}

#[test]
fn verified_without_session_keeps_existing_one() {
    let mut state = AuthState::seeded(Some(session("Ada")));
    state.verified(None);
    assert_eq!(state.display_label(), Some("Ada"));
}

#[test]
fn rejected_drops_session() {
    let mut state = AuthState::seeded(Some(session("Ada")));
    state.rejected();
    assert_eq!(state.status, AuthStatus::Rejected);
    assert!(state.session.is_none());
}

#[test]
fn reset_returns_to_default() {
    let mut state = AuthState::seeded(Some(session("Ada")));
    state.reset();
    assert_eq!(state, AuthState::default());
}

#[test]
fn display_label_falls_back_to_email() {
    assert_eq!(AuthState::seeded(Some(session("  "))).display_label(), Some("ada@example.com"));
    assert_eq!(AuthState::default().display_label(), None);
}
