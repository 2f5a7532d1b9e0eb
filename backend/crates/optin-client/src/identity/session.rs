//! Current-session broadcast.
//!
//! One publisher owns the session value; every subscriber sees the value that
//! was current when it subscribed, then each later change. Dropping a
//! subscription unsubscribes it.

use optin_core::UserIdentity;

use std::sync::Arc;

use log::info;
use tokio::sync::watch;

#[derive(Clone)]
pub struct SessionPublisher {
    sender: Arc<watch::Sender<Option<UserIdentity>>>,
}

impl SessionPublisher {
    /// Start signed out
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Replace the session; works with or without subscribers
    pub fn publish(&self, session: Option<UserIdentity>) {
        match session {
            Some(ref identity) => info!("Session started for {}", identity.id),
            None => info!("Session cleared"),
        }
        self.sender.send_replace(session);
    }

    pub fn current(&self) -> Option<UserIdentity> {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> SessionSubscription {
        SessionSubscription {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for SessionPublisher {
    fn default() -> Self {
        Self::new()
    }
}

pub struct SessionSubscription {
    receiver: watch::Receiver<Option<UserIdentity>>,
}

impl SessionSubscription {
    /// Latest published session
    pub fn current(&self) -> Option<UserIdentity> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next change. Returns false once the publisher is gone.
    pub async fn changed(&mut self) -> bool {
        self.receiver.changed().await.is_ok()
    }
}
