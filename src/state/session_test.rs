use super::*;
use crate::test_support::sample_user;

#[test]
fn empty_store_has_no_session() {
    assert_eq!(MemorySessionStore::new().load(), None);
}

#[test]
fn save_then_load_returns_token_and_user() {
    let store = MemorySessionStore::new();
    let session = Session::new("tok-123", Some(sample_user()));
    store.save(&session);
    assert_eq!(store.load(), Some(session));
    assert_eq!(store.raw(AUTH_TOKEN_KEY).as_deref(), Some("tok-123"));
}

#[test]
fn cached_user_without_token_is_no_session() {
    let store = MemorySessionStore::new();
    store.save_user(&sample_user());
    assert_eq!(store.load(), None);
}

#[test]
fn unreadable_user_json_loads_as_token_only() {
    let store = MemorySessionStore::new();
    store.set_raw(AUTH_TOKEN_KEY, "tok");
    store.set_raw(USER_KEY, "{not json");
    assert_eq!(store.load(), Some(Session::new("tok", None)));
}

#[test]
fn saving_session_without_user_drops_stale_user() {
    let store = MemorySessionStore::new();
    store.save(&Session::new("old", Some(sample_user())));
    store.save(&Session::new("new", None));
    assert_eq!(store.raw(USER_KEY), None);
    assert_eq!(store.load(), Some(Session::new("new", None)));
}

#[test]
fn save_user_replaces_only_the_cached_user() {
    let store = MemorySessionStore::new();
    store.save(&Session::new("tok", None));
    let mut user = sample_user();
    user.name = "Grace".to_owned();
    store.save_user(&user);
    assert_eq!(store.load(), Some(Session::new("tok", Some(user))));
}

#[test]
fn clear_removes_both_keys() {
    let store = MemorySessionStore::new();
    store.save(&Session::new("tok", Some(sample_user())));
    store.clear();
    assert_eq!(store.raw(AUTH_TOKEN_KEY), None);
    assert_eq!(store.raw(USER_KEY), None);
    assert_eq!(store.load(), None);
}

#[test]
fn browser_store_is_empty_off_the_browser() {
    assert_eq!(BrowserSessionStore.load(), None);
}
