pub mod connection;
pub mod entities;
pub mod persistent_store;
pub mod repositories;
pub mod storage;

pub use persistent_store::PersistentStore;
pub use repositories::{StateRepository, DEFAULT_STATE_KEY};
pub use storage::{load_state, save_state, save_state_best_effort, MemoryStateStorage, StateStorage};
