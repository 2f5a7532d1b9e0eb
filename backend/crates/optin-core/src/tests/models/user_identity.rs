use crate::UserIdentity;

#[test]
fn test_has_id() {
    assert!(UserIdentity::new("uid-1").has_id());
    assert!(!UserIdentity::new("").has_id());
    assert!(!UserIdentity::new("   ").has_id());
}

#[test]
fn test_debug_redacts_id_token() {
    let identity = UserIdentity {
        id_token: Some("secret-token".into()),
        ..UserIdentity::new("uid-1")
    };

    let debug = format!("{:?}", identity);
    assert!(!debug.contains("secret-token"));
    assert!(debug.contains("<redacted>"));
}

#[test]
fn test_id_token_is_not_serialized() {
    let identity = UserIdentity {
        id_token: Some("secret-token".into()),
        ..UserIdentity::new("uid-1")
    };

    let json = serde_json::to_string(&identity).unwrap();
    assert!(!json.contains("secret-token"));
}

#[test]
fn test_to_profile_record_copies_contact_fields() {
    let identity = UserIdentity {
        email: Some("ada@example.com".into()),
        display_name: Some("Ada Lovelace".into()),
        username: Some("ada".into()),
        ..UserIdentity::new("uid-1")
    };

    let record = identity.to_profile_record();
    assert_eq!(record.id, "uid-1");
    assert!(!record.is_opted_in);
    assert_eq!(record.email.as_deref(), Some("ada@example.com"));
    assert_eq!(record.username.as_deref(), Some("ada"));
}
