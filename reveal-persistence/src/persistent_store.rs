use reveal_core::{StateStore, StoreEventHandler, TabularDocument, import};
use reveal_types::{Action, AppState, GuessOutcome, ImportError};
use tracing::info;

use crate::storage::{StateStorage, load_state, save_state_best_effort};

/// A `StateStore` bound to its storage: loaded on open, flushed after every change.
pub struct PersistentStore<S: StateStorage> {
    store: StateStore,
    storage: S,
}

impl<S: StateStorage> PersistentStore<S> {
    pub async fn open(storage: S) -> Self {
        let state = load_state(&storage).await;
        info!(
            "Opened state: {} players, {} sets, {} words, status {}",
            state.players.len(),
            state.sets.len(),
            state.words.len(),
            state.game_status.as_str()
        );

        Self {
            store: StateStore::new(state),
            storage,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn add_handler(&mut self, handler: Box<dyn StoreEventHandler>) {
        self.store.add_handler(handler);
    }

    pub async fn dispatch(&mut self, action: Action) -> Option<GuessOutcome> {
        let (changed, outcome) = self.store.dispatch(action);
        if changed {
            self.flush().await;
        }
        outcome
    }

    pub async fn replace(&mut self, state: AppState) {
        self.store.replace(state);
        self.flush().await;
    }

    /// Apply a tabular import. On error nothing changes.
    pub async fn import(&mut self, document: &TabularDocument) -> Result<(), ImportError> {
        let next = import(self.store.state(), document)?;
        self.replace(next).await;
        Ok(())
    }

    async fn flush(&self) {
        save_state_best_effort(&self.storage, self.store.state()).await;
    }
}
