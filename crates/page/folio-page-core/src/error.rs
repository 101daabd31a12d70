//! Error types for page behaviour

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PageError {
    /// Configuration could not be parsed
    #[error("Config error: {reason}")]
    Config { reason: String },

    /// Section bounds that cannot be ordered (non-finite top)
    #[error("Invalid section: {id}")]
    InvalidSection { id: String },
}
