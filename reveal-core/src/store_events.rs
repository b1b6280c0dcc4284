use reveal_types::{Action, GuessOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// An action changed the state
    ActionApplied {
        action: Action,
        outcome: Option<GuessOutcome>,
    },
    /// The whole state was swapped for another (reset or import)
    StateReplaced,
}

impl StoreEvent {
    pub fn action(&self) -> Option<&Action> {
        match self {
            StoreEvent::ActionApplied { action, .. } => Some(action),
            StoreEvent::StateReplaced => None,
        }
    }
}

/// Event handler trait for observing state transitions
pub trait StoreEventHandler {
    fn handle_event(&mut self, event: StoreEvent);
}

/// Simple event bus for distributing store events
pub struct StoreEventBus {
    handlers: Vec<Box<dyn StoreEventHandler>>,
}

impl StoreEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn StoreEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: StoreEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }
}

impl Default for StoreEventBus {
    fn default() -> Self {
        Self::new()
    }
}
