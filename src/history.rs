//! Navigation source contract and in-memory history
//!
//! The router does not talk to a browser directly. It requires a
//! [`NavigationAdapter`]: something that can report the current location,
//! push or replace history entries, and notify subscribers when the location
//! changes behind the router's back (the `popstate` role).
//!
//! [`MemoryNavigation`] is the bundled implementation: a plain history stack
//! with forward/backward traversal, forward-history truncation on push, and
//! a configurable size limit. It doubles as the test double for simulated
//! navigation.

use crate::NavigationDirection;
use std::rc::Rc;

/// Listener invoked with the new location when it changes externally.
///
/// `Rc` rather than `Arc`: the whole router runs on a single-threaded,
/// event-driven model, and notifications fire synchronously on the caller's
/// turn.
pub type ChangeListener = Rc<dyn Fn(&str)>;

/// Handle identifying one subscription, returned by
/// [`NavigationAdapter::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Contract the host environment's history facility must satisfy.
pub trait NavigationAdapter {
    /// Current location as a path string, query included if present.
    fn current_path(&self) -> String;

    /// Push a new history entry. Does not notify subscribers - the
    /// initiator already knows where it navigated.
    fn push(&mut self, path: &str);

    /// Replace the current history entry without notifying subscribers.
    fn replace(&mut self, path: &str);

    /// Register a location-change listener.
    fn subscribe(&mut self, listener: ChangeListener) -> SubscriptionId;

    /// Remove a previously registered listener. Unknown ids are ignored.
    fn unsubscribe(&mut self, id: SubscriptionId);
}

/// Event describing one history traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEvent {
    /// Previous path
    pub from: Option<String>,
    /// New path
    pub to: String,
    /// Navigation direction
    pub direction: NavigationDirection,
}

/// In-process navigation history stack.
#[derive(Clone)]
pub struct MemoryNavigation {
    entries: Vec<String>,
    current: usize,
    /// Maximum history size (0 = unlimited)
    max_size: usize,
    listeners: Vec<(SubscriptionId, ChangeListener)>,
    next_id: u64,
}

impl MemoryNavigation {
    const DEFAULT_MAX_SIZE: usize = 1000;

    /// Create a new history with an initial location.
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self::with_max_size(initial_path, Self::DEFAULT_MAX_SIZE)
    }

    /// Create with a custom size limit.
    pub fn with_max_size(initial_path: impl Into<String>, max_size: usize) -> Self {
        Self {
            entries: vec![initial_path.into()],
            current: 0,
            max_size,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Go back one entry, notifying subscribers.
    ///
    /// This is the simulated `popstate`: traversal is initiated outside the
    /// router, so subscribers must hear about it.
    pub fn back(&mut self) -> Option<NavigationEvent> {
        if !self.can_go_back() {
            return None;
        }

        let from = Some(self.current_entry().to_string());
        self.current -= 1;
        let to = self.current_entry().to_string();

        self.notify(&to);

        Some(NavigationEvent {
            from,
            to,
            direction: NavigationDirection::Back,
        })
    }

    /// Go forward one entry, notifying subscribers.
    pub fn forward(&mut self) -> Option<NavigationEvent> {
        if !self.can_go_forward() {
            return None;
        }

        let from = Some(self.current_entry().to_string());
        self.current += 1;
        let to = self.current_entry().to_string();

        self.notify(&to);

        Some(NavigationEvent {
            from,
            to,
            direction: NavigationDirection::Forward,
        })
    }

    /// Check if can go back
    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    /// Check if can go forward
    pub fn can_go_forward(&self) -> bool {
        self.current < self.entries.len() - 1
    }

    /// Number of history entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if history is empty (never true in practice)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current position in the stack
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of active subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn current_entry(&self) -> &str {
        &self.entries[self.current]
    }

    fn notify(&self, path: &str) {
        // Snapshot so a listener unsubscribing mid-notification is safe.
        let listeners: Vec<ChangeListener> =
            self.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();

        for listener in listeners {
            listener(path);
        }
    }

    fn enforce_size_limit(&mut self) {
        if self.max_size > 0 && self.entries.len() > self.max_size {
            let excess = self.entries.len() - self.max_size;
            self.entries.drain(0..excess);
            self.current = self.current.saturating_sub(excess);
        }
    }
}

impl Default for MemoryNavigation {
    fn default() -> Self {
        Self::new("/")
    }
}

impl NavigationAdapter for MemoryNavigation {
    fn current_path(&self) -> String {
        self.current_entry().to_string()
    }

    fn push(&mut self, path: &str) {
        // Pushing discards forward history, like the browser does.
        self.entries.truncate(self.current + 1);
        self.entries.push(path.to_string());
        self.current += 1;

        self.enforce_size_limit();
    }

    fn replace(&mut self, path: &str) {
        self.entries[self.current] = path.to_string();
    }

    fn subscribe(&mut self, listener: ChangeListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(sid, _)| *sid != id);
    }
}

impl std::fmt::Debug for MemoryNavigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryNavigation")
            .field("entries", &self.entries)
            .field("current", &self.current)
            .field("max_size", &self.max_size)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}
