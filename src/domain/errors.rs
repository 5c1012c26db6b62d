use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("File size must be positive, got {given}")]
    NonPositiveSize { given: i64 },
}
