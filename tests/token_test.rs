use gmail_extract::{MemoryTokenStore, Token, TokenStore};

fn fixture_token() -> Token {
    Token {
        access_token: "ya29.a0Af".to_string(),
        refresh_token: Some("1//0gRefresh".to_string()),
        token_type: Some("Bearer".to_string()),
        scope: Some("https://www.googleapis.com/auth/gmail.readonly".to_string()),
        expiry_date: Some(1_735_732_800_000),
    }
}

#[test]
fn test_store_starts_empty() {
    let store = MemoryTokenStore::new();

    assert!(store.get().is_none());
    assert!(!store.is_authenticated());
}

#[test]
fn test_set_then_get_round_trips() {
    let store = MemoryTokenStore::new();
    store.set(fixture_token());

    let token = store.get().unwrap();
    assert_eq!(token.access_token, "ya29.a0Af");
    assert_eq!(token.refresh_token.as_deref(), Some("1//0gRefresh"));
    assert!(store.is_authenticated());
}

#[test]
fn test_set_replaces_previous_token() {
    let store = MemoryTokenStore::new();
    store.set(fixture_token());
    store.set(Token::bearer("fresh-token".to_string()));

    let token = store.get().unwrap();
    assert_eq!(token.access_token, "fresh-token");
    assert!(token.refresh_token.is_none());
}

#[test]
fn test_clear_drops_token() {
    let store = MemoryTokenStore::new();
    store.set(fixture_token());
    store.clear();

    assert!(store.get().is_none());
    assert!(!store.is_authenticated());
}

#[test]
fn test_usable_through_trait_object() {
    // Route layers hold `&dyn TokenStore`; tests substitute fakes the
    // same way.
    let store = MemoryTokenStore::new();
    let dyn_store: &dyn TokenStore = &store;

    dyn_store.set(Token::bearer("abc".to_string()));
    assert!(dyn_store.is_authenticated());

    dyn_store.clear();
    assert!(!dyn_store.is_authenticated());
}

#[test]
fn test_token_deserializes_from_oauth_response() {
    let token: Token = serde_json::from_str(
        r#"{
            "access_token": "ya29.a0Af",
            "refresh_token": "1//0gRefresh",
            "scope": "https://www.googleapis.com/auth/gmail.readonly",
            "token_type": "Bearer",
            "expiry_date": 1735732800000
        }"#,
    )
    .unwrap();

    assert_eq!(token.access_token, "ya29.a0Af");
    assert_eq!(token.expiry_date, Some(1_735_732_800_000));
}
