use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Reasons a tabular import is rejected. Import is all-or-nothing, so any of
/// these leaves the current state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ImportError {
    #[error("could not read import document: {reason}")]
    Unreadable { reason: String },
    #[error("no usable rows found in any sheet")]
    NoUsableRows,
}
