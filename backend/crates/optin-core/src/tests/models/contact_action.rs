use crate::{ContactAction, CoreError};

use std::str::FromStr;

#[test]
fn test_contact_action_as_str() {
    assert_eq!(ContactAction::Add.as_str(), "add");
    assert_eq!(ContactAction::Remove.as_str(), "remove");
}

#[test]
fn test_contact_action_from_str() {
    assert_eq!(ContactAction::from_str("add").unwrap(), ContactAction::Add);
    assert_eq!(
        ContactAction::from_str("remove").unwrap(),
        ContactAction::Remove
    );
}

#[test]
fn test_contact_action_rejects_unknown_values() {
    let err = ContactAction::from_str("archive").unwrap_err();
    assert!(matches!(err, CoreError::InvalidAction { ref value, .. } if value == "archive"));
}

#[test]
fn test_contact_action_is_case_sensitive() {
    assert!(ContactAction::from_str("Add").is_err());
    assert!(ContactAction::from_str("REMOVE").is_err());
}

#[test]
fn test_contact_action_for_opt_in() {
    assert_eq!(ContactAction::for_opt_in(true), ContactAction::Add);
    assert_eq!(ContactAction::for_opt_in(false), ContactAction::Remove);
}
