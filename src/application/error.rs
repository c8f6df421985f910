// src/application/error.rs
use crate::{
    application::outcome::{Error, Outcome},
    domain::{
        address::AddressId,
        errors::{DomainError, DomainResult},
    },
};

pub const ADDRESS_NOT_FOUND: &str = "Address.NotFound";
pub const ADDRESS_CONFLICT: &str = "Address.Conflict";
pub const ADDRESS_INVALID: &str = "Address.Invalid";
pub const ADDRESS_PERSISTENCE: &str = "Address.Persistence";

pub fn address_not_found(id: AddressId) -> Error {
    Error::not_found(
        ADDRESS_NOT_FOUND,
        format!("Address with ID {id} was not found"),
    )
}

/// Lifts a store result onto the railway. Store errors become failures.
pub fn from_store<T>(result: DomainResult<T>) -> Outcome<T> {
    match result {
        Ok(value) => Outcome::success(value),
        Err(err) => Outcome::failure(err.into()),
    }
}

impl From<DomainError> for Error {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::validation(ADDRESS_INVALID, msg),
            DomainError::Conflict(msg) => Self::conflict(ADDRESS_CONFLICT, msg),
            DomainError::Persistence(detail) => {
                tracing::error!(error = %detail, "address store failure");
                Self::failure(
                    ADDRESS_PERSISTENCE,
                    "The address store could not complete the operation",
                )
            }
        }
    }
}
