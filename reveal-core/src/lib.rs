pub mod ids;
pub mod normalize;
pub mod reducer;
pub mod scoreboard;
pub mod state_migration;
pub mod state_store;
pub mod store_events;
pub mod tabular;

// Re-export main components
pub use ids::*;
pub use normalize::*;
pub use reducer::*;
pub use scoreboard::*;
pub use state_migration::{migrate, restore, DEFAULT_SET_NAME};
pub use state_store::*;
pub use store_events::*;
pub use tabular::{export, import, Sheet, TabularDocument, PLAYERS_SHEET};
