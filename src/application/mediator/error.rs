// src/application/mediator/error.rs
use thiserror::Error;

/// Handler wiring mistakes. Fatal at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("a handler is already registered for request type {0}")]
    DuplicateHandler(&'static str),
}

/// Dispatch did not produce a response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("no handler is registered for request type {0}")]
    MissingHandler(&'static str),

    #[error("request was cancelled before it completed")]
    Cancelled,
}
