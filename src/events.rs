//! Game event bus for decoupled communication between systems.
//!
//! Producers publish into an [`EventBus`]; every live [`Subscription`] gets
//! its own queue that the owner drains once per frame. Dropping the
//! subscription is the unsubscribe: the bus stops delivering to it on the
//! next publish.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use glam::Vec2;
use hecs::Entity;

use crate::bounds::Aabb;

/// Node lifecycle notifications
#[derive(Debug, Clone)]
pub enum NodeEvent {
    /// A node became part of the playable area
    Enabled { node: Entity, bounds: Aabb },
    /// A node left the playable area
    Disabled { node: Entity },
}

/// Pointer drag notifications, positions in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragSignal {
    /// Drag began; position where the button was pressed
    Start(Vec2),
    /// Drag finished; position where the button was released
    End(Vec2),
}

type Mailbox<E> = RefCell<VecDeque<E>>;

/// Fan-out queue: each subscriber receives every event published after it subscribed.
pub struct EventBus<E> {
    subscribers: Vec<Weak<Mailbox<E>>>,
}

impl<E: Clone> EventBus<E> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Register a new receiver. Keep the handle alive for as long as events are wanted.
    pub fn subscribe(&mut self) -> Subscription<E> {
        let mailbox = Rc::new(RefCell::new(VecDeque::new()));
        self.subscribers.push(Rc::downgrade(&mailbox));
        Subscription { mailbox }
    }

    /// Queue an event for every live subscriber, pruning dropped ones.
    pub fn publish(&mut self, event: E) {
        self.subscribers.retain(|subscriber| match subscriber.upgrade() {
            Some(mailbox) => {
                mailbox.borrow_mut().push_back(event.clone());
                true
            }
            None => false,
        });
    }

    /// Number of subscriptions still alive
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .iter()
            .filter(|subscriber| subscriber.strong_count() > 0)
            .count()
    }
}

impl<E: Clone> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving end of an [`EventBus`]; unsubscribes on drop.
pub struct Subscription<E> {
    mailbox: Rc<Mailbox<E>>,
}

impl<E> Subscription<E> {
    /// Take the oldest pending event
    pub fn poll(&self) -> Option<E> {
        self.mailbox.borrow_mut().pop_front()
    }

    /// Drain all pending events for processing, oldest first.
    /// Events published while draining are picked up by the same drain.
    pub fn drain(&self) -> impl Iterator<Item = E> + '_ {
        std::iter::from_fn(move || self.poll())
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.mailbox.borrow().is_empty()
    }

    /// Explicit unsubscribe, same as dropping the handle
    pub fn unsubscribe(self) {}
}
