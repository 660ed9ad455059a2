use super::*;

fn session(user_id: &str) -> Session {
    Session {
        user_id: user_id.to_owned(),
        email: format!("{user_id}@example.com"),
        display_name: user_id.to_uppercase(),
        roles: ["MEMBER".to_owned()].into_iter().collect(),
        organization_id: "org-1".to_owned(),
    }
}

#[test]
fn new_cache_is_empty() {
    let cache = SessionCache::new();
    assert!(!cache.is_populated());
    assert!(cache.get().is_none());
}

#[test]
fn seeded_cache_holds_session() {
    let cache = SessionCache::seeded(Some(session("u1")));
    assert_eq!(cache.get(), Some(session("u1")));
}

#[test]
fn settle_with_current_ticket_applies() {
    let cache = SessionCache::new();
    let ticket = cache.begin();
    assert!(cache.settle(ticket, Some(session("u1"))));
    assert_eq!(cache.get(), Some(session("u1")));
}

#[test]
fn settle_with_none_resets_slot() {
    let cache = SessionCache::seeded(Some(session("u1")));
    let ticket = cache.begin();
    assert!(cache.settle(ticket, None));
    assert!(cache.get().is_none());
}

#[test]
fn older_ticket_cannot_overwrite_newer_result() {
    let cache = SessionCache::new();
    let first = cache.begin();
    let second = cache.begin();
    assert!(cache.settle(second, Some(session("new"))));
    assert!(!cache.settle(first, None));
    assert_eq!(cache.get(), Some(session("new")));
}

#[test]
fn older_ticket_is_stale_even_before_newer_settles() {
    let cache = SessionCache::new();
    let first = cache.begin();
    let _second = cache.begin();
    assert!(!cache.settle(first, Some(session("old"))));
    assert!(cache.get().is_none());
}

#[test]
fn clear_invalidates_in_flight_ticket() {
    let cache = SessionCache::seeded(Some(session("u1")));
    let ticket = cache.begin();
    cache.clear();
    assert!(!cache.settle(ticket, Some(session("u1"))));
    assert!(!cache.is_populated());
}

#[test]
fn clones_share_the_slot() {
    let cache = SessionCache::new();
    let handle = cache.clone();
    let ticket = handle.begin();
    handle.settle(ticket, Some(session("u1")));
    assert!(cache.is_populated());
    assert!(!SessionCache::new().is_populated());
}
