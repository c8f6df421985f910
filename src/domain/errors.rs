// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures reported by the address store.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid address data: {0}")]
    Validation(String),
    #[error("address conflict: {0}")]
    Conflict(String),
    /// Store unavailable or rejected the operation. The detail is for logs.
    #[error("address store error: {0}")]
    Persistence(String),
}
