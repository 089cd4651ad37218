// src/view/listener.rs
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    /// Arrow/Enter/select-all handling for the listing.
    KeyDown,
    /// Closes the add menu on clicks outside it.
    OutsideClick,
}

/// Explicit subscriptions. Events for a listener that is not registered
/// are dropped by the owner.
#[derive(Debug, Default, Clone)]
pub struct ListenerRegistry {
    active: HashSet<Listener>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        ListenerRegistry::default()
    }

    pub fn subscribe(&mut self, listener: Listener) {
        if self.active.insert(listener) {
            tracing::debug!(?listener, "listener registered");
        }
    }

    pub fn unsubscribe(&mut self, listener: Listener) {
        if self.active.remove(&listener) {
            tracing::debug!(?listener, "listener removed");
        }
    }

    pub fn is_active(&self, listener: Listener) -> bool {
        self.active.contains(&listener)
    }

    pub fn clear(&mut self) {
        for listener in self.active.drain() {
            tracing::debug!(?listener, "listener removed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_unsubscribe() {
        let mut registry = ListenerRegistry::new();
        registry.subscribe(Listener::KeyDown);
        registry.subscribe(Listener::KeyDown);
        assert!(registry.is_active(Listener::KeyDown));
        assert!(!registry.is_active(Listener::OutsideClick));
        registry.unsubscribe(Listener::KeyDown);
        assert!(!registry.is_active(Listener::KeyDown));
    }

    #[test]
    fn clear_drops_everything() {
        let mut registry = ListenerRegistry::new();
        registry.subscribe(Listener::KeyDown);
        registry.subscribe(Listener::OutsideClick);
        registry.clear();
        assert!(!registry.is_active(Listener::KeyDown));
        assert!(!registry.is_active(Listener::OutsideClick));
    }
}
