pub use super::app_state::Entity as AppStateRow;
