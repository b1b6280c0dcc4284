pub mod errors;
pub mod game;
pub mod messages;
pub mod user;

// Re-export all types
pub use errors::*;
pub use game::*;
pub use messages::*;
pub use user::*;

/// Opaque identifier shared by players, sets and words.
pub type EntityId = String;
pub type PlayerId = EntityId;
pub type SetId = EntityId;
pub type WordId = EntityId;
