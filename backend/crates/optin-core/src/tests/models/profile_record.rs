use crate::ProfileRecord;

use serde_json::json;

#[test]
fn test_missing_opt_in_flag_defaults_to_false() {
    let record: ProfileRecord = serde_json::from_value(json!({
        "id": "uid-1",
        "email": "ada@example.com"
    }))
    .unwrap();

    assert!(!record.is_opted_in);
    assert_eq!(record.email.as_deref(), Some("ada@example.com"));
}

#[test]
fn test_contact_name_from_display_name() {
    let record = ProfileRecord {
        display_name: Some("Ada Lovelace".into()),
        ..ProfileRecord::new("uid-1")
    };

    let name = record.contact_name();
    assert_eq!(name.first_name, "Ada");
    assert_eq!(name.last_name, "Lovelace");
}

#[test]
fn test_contact_name_without_display_name_is_empty() {
    let name = ProfileRecord::new("uid-1").contact_name();
    assert_eq!(name.first_name, "");
    assert_eq!(name.last_name, "");
}
