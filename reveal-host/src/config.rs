use reveal_persistence::DEFAULT_STATE_KEY;
use reveal_persistence::connection::DEFAULT_DATABASE_URL;
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub state_key: String,
}

impl Config {
    pub fn new() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from any variable source. Blank values fall back to defaults.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            database_url: var("DATABASE_URL", DEFAULT_DATABASE_URL),
            state_key: var("STATE_KEY", DEFAULT_STATE_KEY),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
