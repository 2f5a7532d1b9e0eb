use crate::SessionSubscription;

use optin_core::UserIdentity;

/// Which screen the session calls for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Login,
    Profile(UserIdentity),
}

/// Routes between the login and profile views from the session state
pub struct Shell {
    subscription: SessionSubscription,
}

impl Shell {
    pub fn new(subscription: SessionSubscription) -> Self {
        Self { subscription }
    }

    pub fn view(&self) -> View {
        match self.subscription.current() {
            Some(identity) => View::Profile(identity),
            None => View::Login,
        }
    }

    /// Wait for the session to change, then return the new view.
    ///
    /// `None` once the session publisher is gone.
    pub async fn next_view(&mut self) -> Option<View> {
        if self.subscription.changed().await {
            Some(self.view())
        } else {
            None
        }
    }
}
