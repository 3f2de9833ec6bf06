//! # Alert Channel
//!
//! Each record owns one [`AlertChannel`]: a list of subscriber callbacks invoked
//! synchronously, in attachment order, whenever the record raises an alert.
//!
//! Dispatch iterates over a snapshot of the subscriber list taken when the alert is
//! triggered. A callback that attaches a new subscriber to the same channel does not
//! receive the alert currently being delivered; it sees the next one.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

/// Shape of an alert subscriber.
pub type AlertHandler = Rc<dyn Fn(&str)>;

/// Multicast notification channel owned by a single record.
#[derive(Default)]
pub struct AlertChannel {
    subscribers: RefCell<Vec<AlertHandler>>,
}

impl AlertChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a subscriber. There is no unsubscribe.
    pub fn subscribe(&self, handler: AlertHandler) {
        self.subscribers.borrow_mut().push(handler);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Delivers `message` to every current subscriber and returns how many were called.
    ///
    /// With no subscribers this is a silent no-op; nothing is buffered for later.
    pub fn publish(&self, message: &str) -> usize {
        let snapshot: Vec<AlertHandler> = self.subscribers.borrow().clone();
        if snapshot.is_empty() {
            trace!("No subscribers for alert");
            return 0;
        }
        for handler in &snapshot {
            handler(message);
        }
        snapshot.len()
    }
}

impl fmt::Debug for AlertChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertChannel")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
