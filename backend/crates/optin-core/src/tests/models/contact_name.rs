use crate::ContactName;

#[test]
fn test_two_token_name_splits_into_first_and_last() {
    let name = ContactName::from_display_name("Ada Lovelace");
    assert_eq!(name.first_name, "Ada");
    assert_eq!(name.last_name, "Lovelace");
}

#[test]
fn test_single_token_name_has_empty_last_name() {
    let name = ContactName::from_display_name("Ada");
    assert_eq!(name.first_name, "Ada");
    assert_eq!(name.last_name, "");
}

#[test]
fn test_remaining_tokens_join_into_last_name() {
    let name = ContactName::from_display_name("Augusta Ada King Lovelace");
    assert_eq!(name.first_name, "Augusta");
    assert_eq!(name.last_name, "Ada King Lovelace");
}

#[test]
fn test_repeated_whitespace_is_collapsed() {
    let name = ContactName::from_display_name("  Ada \t  Lovelace  ");
    assert_eq!(name.first_name, "Ada");
    assert_eq!(name.last_name, "Lovelace");
}

#[test]
fn test_empty_name_yields_empty_parts() {
    assert_eq!(ContactName::from_display_name(""), ContactName::default());
    assert_eq!(ContactName::from_display_name("   "), ContactName::default());
}
