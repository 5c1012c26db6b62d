use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Validated total byte count of a generated file (always > 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FileSize(u64);

impl FileSize {
    /// Construct from a raw (possibly negative) request value
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(DomainError::NonPositiveSize { given: value });
        }

        Ok(Self(value as u64))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for FileSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
