use anyhow::{Context, Result};
use async_trait::async_trait;
use reveal_core::restore;
use reveal_types::AppState;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Key-value boundary the state is persisted through
#[async_trait]
pub trait StateStorage: Send + Sync {
    async fn load(&self) -> Result<Option<String>>;
    async fn save(&self, raw: &str) -> Result<()>;
}

/// Load and migrate the persisted state. Any failure falls back to the default state.
pub async fn load_state(storage: &dyn StateStorage) -> AppState {
    match storage.load().await {
        Ok(raw) => restore(raw.as_deref()),
        Err(e) => {
            warn!("Could not load persisted state, starting fresh: {:#}", e);
            AppState::default()
        }
    }
}

pub async fn save_state(storage: &dyn StateStorage, state: &AppState) -> Result<()> {
    let raw = serde_json::to_string(state).context("failed to serialize state")?;
    storage.save(&raw).await
}

/// Fire-and-forget flush: failures are logged, never returned
pub async fn save_state_best_effort(storage: &dyn StateStorage, state: &AppState) -> bool {
    match save_state(storage, state).await {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to persist state, keeping it in memory only: {:#}", e);
            false
        }
    }
}

/// In-process storage, mainly for tests. Can be told to fail saves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStorage {
    value: Arc<Mutex<Option<String>>>,
    fail_saves: Arc<Mutex<bool>>,
}

impl MemoryStateStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(raw: &str) -> Self {
        let storage = Self::default();
        *storage.value.lock().unwrap_or_else(|e| e.into_inner()) = Some(raw.to_string());
        storage
    }

    pub fn set_fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap_or_else(|e| e.into_inner()) = fail;
    }

    pub fn raw(&self) -> Option<String> {
        self.value.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl StateStorage for MemoryStateStorage {
    async fn load(&self) -> Result<Option<String>> {
        Ok(self.raw())
    }

    async fn save(&self, raw: &str) -> Result<()> {
        if *self.fail_saves.lock().unwrap_or_else(|e| e.into_inner()) {
            anyhow::bail!("storage quota exceeded");
        }
        *self.value.lock().unwrap_or_else(|e| e.into_inner()) = Some(raw.to_string());
        Ok(())
    }
}
