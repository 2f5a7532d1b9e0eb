use crate::SendGridError;

#[test]
fn test_list_not_found_message_capitalizes_list_name() {
    let err = SendGridError::list_not_found("obscurity-users");
    assert_eq!(err.message(), "Obscurity-users list not found");
    assert!(err.to_string().starts_with("Obscurity-users list not found"));
}

#[test]
fn test_contact_not_found_message() {
    let err = SendGridError::contact_not_found();
    assert_eq!(err.message(), "Contact not found in SendGrid");
    assert_eq!(err.kind(), "contact_not_found");
}

#[test]
fn test_status_message_has_operation_and_code() {
    let err = SendGridError::status("Failed to fetch lists", 401);
    assert_eq!(err.message(), "Failed to fetch lists: 401");
    assert_eq!(err.kind(), "status");
}

#[test]
fn test_message_excludes_location() {
    let err = SendGridError::status("Failed to search for contact", 500);
    assert!(!err.message().contains(".rs"));
    assert!(err.to_string().len() > err.message().len());
}

#[test]
fn test_decode_message_names_operation() {
    let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
    let err = SendGridError::decode("Failed to add to SendGrid contact list", source);
    assert!(
        err.message()
            .starts_with("Failed to add to SendGrid contact list: invalid response body")
    );
    assert_eq!(err.kind(), "decode");
}
