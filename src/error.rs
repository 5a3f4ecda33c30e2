// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Password length must be between 4 and 64 characters (got {length})")]
    InvalidLength { length: usize },

    #[error("At least one character type must be selected")]
    NoCharacterClass,

    #[error("Character pool is empty")]
    EmptyCharacterPool,

    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PasswordError {
    /// True for the validation failures a caller can fix by changing its options.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            PasswordError::InvalidLength { .. }
                | PasswordError::NoCharacterClass
                | PasswordError::EmptyCharacterPool
        )
    }
}

pub type Result<T> = std::result::Result<T, PasswordError>;
