//! Process-wide publish/subscribe for view refresh.
//!
//! Views that rendered a collection before a mutation need to hear about
//! it. The notifier is a plain synchronous fan-out: `publish` runs every
//! handler currently subscribed to the topic, in subscription order, on
//! the calling thread, before it returns. There is no buffering; a
//! subscriber registered after a publish never sees that publish.
//!
//! Subscriptions are scoped: dropping the [`Subscription`] returned by
//! [`Notifier::subscribe`] deregisters the handler.

use std::cell::RefCell;
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::{Rc, Weak};

use log::warn;

/// Topic published after the `lostPets` collection changes.
pub const LOST_UPDATED: &str = "lost-updated";
/// Topic published after the `foundPets` collection changes.
pub const FOUND_UPDATED: &str = "found-updated";

type Handler = Rc<RefCell<dyn FnMut()>>;

#[derive(Default)]
struct Registry {
    next_token: u64,
    topics: HashMap<String, Vec<(u64, Handler)>>,
}

/// The in-process event bus. Cloning produces another handle onto the same
/// registry.
#[derive(Clone, Default)]
pub struct Notifier {
    registry: Rc<RefCell<Registry>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `topic`. The handler runs on every publish
    /// until the returned subscription is dropped.
    pub fn subscribe(&self, topic: &str, handler: impl FnMut() + 'static) -> Subscription {
        let handler: Handler = Rc::new(RefCell::new(handler));
        let mut registry = self.registry.borrow_mut();
        registry.next_token += 1;
        let token = registry.next_token;
        registry
            .topics
            .entry(topic.to_string())
            .or_default()
            .push((token, handler));
        Subscription {
            registry: Rc::downgrade(&self.registry),
            topic: topic.to_string(),
            token,
        }
    }

    /// Invokes the topic's handlers in subscription order. A panicking
    /// handler is caught and logged so the remaining handlers still run.
    pub fn publish(&self, topic: &str) {
        let handlers: Vec<Handler> = {
            let registry = self.registry.borrow();
            registry
                .topics
                .get(topic)
                .map(|subs| subs.iter().map(|(_, h)| Rc::clone(h)).collect())
                .unwrap_or_default()
        };
        for handler in handlers {
            let outcome = catch_unwind(AssertUnwindSafe(|| {
                // A handler that publishes its own topic would find itself
                // already borrowed; that reentrant call is skipped.
                if let Ok(mut callback) = handler.try_borrow_mut() {
                    (callback)();
                }
            }));
            if outcome.is_err() {
                warn!("subscriber for topic '{topic}' panicked; remaining subscribers still run");
            }
        }
    }
}

/// Scoped registration handle. Dropping it removes the handler.
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    topic: String,
    token: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Some(subs) = registry.borrow_mut().topics.get_mut(&self.topic) {
                subs.retain(|(token, _)| *token != self.token);
            }
        }
    }
}
