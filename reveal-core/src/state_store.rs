use reveal_types::{Action, AppState, GuessOutcome};
use tracing::debug;

use crate::reducer::reduce;
use crate::store_events::{StoreEvent, StoreEventBus, StoreEventHandler};

/// Owns the current `AppState`. Each dispatch swaps in a complete new state;
/// readers only ever see committed values.
pub struct StateStore {
    state: AppState,
    event_bus: StoreEventBus,
}

impl StateStore {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            event_bus: StoreEventBus::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn add_handler(&mut self, handler: Box<dyn StoreEventHandler>) {
        self.event_bus.add_handler(handler);
    }

    /// Apply an action. Returns whether the state changed and the guess report, if any.
    pub fn dispatch(&mut self, action: Action) -> (bool, Option<GuessOutcome>) {
        let transition = reduce(&self.state, &action);
        let changed = transition.changed;
        let outcome = transition.outcome.clone();

        if !changed {
            debug!("Action {} left the state unchanged", action.name());
            return (false, outcome);
        }

        self.state = transition.state;
        let event = if matches!(action, Action::ResetAll) {
            StoreEvent::StateReplaced
        } else {
            StoreEvent::ActionApplied {
                action,
                outcome: outcome.clone(),
            }
        };
        self.event_bus.publish(event);
        (true, outcome)
    }

    /// Swap in a state produced elsewhere, e.g. by an import
    pub fn replace(&mut self, state: AppState) {
        if state == self.state {
            return;
        }
        self.state = state;
        self.event_bus.publish(StoreEvent::StateReplaced);
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
