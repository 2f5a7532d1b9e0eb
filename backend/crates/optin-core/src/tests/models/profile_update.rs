use crate::{ProfileRecord, ProfileUpdate};

fn sample_record() -> ProfileRecord {
    ProfileRecord {
        id: "uid-1".into(),
        is_opted_in: false,
        email: Some("ada@example.com".into()),
        display_name: Some("Ada Lovelace".into()),
        username: Some("ada".into()),
    }
}

#[test]
fn test_opt_in_update_only_touches_flag() {
    let mut record = sample_record();

    ProfileUpdate::opt_in(true).apply_to(&mut record);

    assert!(record.is_opted_in);
    assert_eq!(record.email.as_deref(), Some("ada@example.com"));
    assert_eq!(record.display_name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(record.username.as_deref(), Some("ada"));
}

#[test]
fn test_empty_update_is_noop() {
    let mut record = sample_record();
    let update = ProfileUpdate::default();

    assert!(update.is_empty());
    update.apply_to(&mut record);

    assert_eq!(record, sample_record());
}

#[test]
fn test_update_from_record_carries_all_fields() {
    let update = ProfileUpdate::from(&sample_record());
    assert_eq!(update.is_opted_in, Some(false));
    assert_eq!(update.username.as_deref(), Some("ada"));
    assert!(!update.is_empty());
}
