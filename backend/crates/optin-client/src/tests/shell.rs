use crate::{SessionPublisher, Shell, View};

use optin_core::UserIdentity;

#[test]
fn test_signed_out_shows_login() {
    let publisher = SessionPublisher::new();
    let shell = Shell::new(publisher.subscribe());

    assert_eq!(shell.view(), View::Login);
}

#[test]
fn test_signed_in_shows_profile() {
    let publisher = SessionPublisher::new();
    let identity = UserIdentity::new("uid-1");
    publisher.publish(Some(identity.clone()));

    let shell = Shell::new(publisher.subscribe());

    assert_eq!(shell.view(), View::Profile(identity));
}

#[tokio::test]
async fn test_next_view_follows_sign_in_and_sign_out() {
    let publisher = SessionPublisher::new();
    let mut shell = Shell::new(publisher.subscribe());
    let identity = UserIdentity::new("uid-1");

    publisher.publish(Some(identity.clone()));
    assert_eq!(shell.next_view().await, Some(View::Profile(identity)));

    publisher.publish(None);
    assert_eq!(shell.next_view().await, Some(View::Login));

    drop(publisher);
    assert_eq!(shell.next_view().await, None);
}
