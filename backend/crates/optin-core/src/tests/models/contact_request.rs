use crate::{ContactAction, ContactName, ContactRequest};

use serde_json::json;

#[test]
fn test_new_request_serializes_camel_case() {
    let request = ContactRequest::new(
        "Ada@Example.com",
        ContactAction::Add,
        ContactName::from_display_name("Ada Lovelace"),
        Some("ada".to_string()),
    );

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value,
        json!({
            "email": "Ada@Example.com",
            "action": "add",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "username": "ada"
        })
    );
}

#[test]
fn test_absent_optional_fields_are_not_serialized() {
    let request: ContactRequest =
        serde_json::from_value(json!({ "email": "ada@example.com", "action": "remove" })).unwrap();

    assert!(request.first_name.is_none());
    let value = serde_json::to_value(&request).unwrap();
    assert!(value.get("firstName").is_none());
    assert!(value.get("username").is_none());
}

#[test]
fn test_unknown_action_still_deserializes() {
    let request: ContactRequest =
        serde_json::from_value(json!({ "email": "ada@example.com", "action": "archive" })).unwrap();
    assert_eq!(request.action, "archive");
}

#[test]
fn test_normalized_email_is_lowercase() {
    let request: ContactRequest =
        serde_json::from_value(json!({ "email": "Ada@Example.COM", "action": "add" })).unwrap();
    assert_eq!(request.normalized_email(), "ada@example.com");
}
