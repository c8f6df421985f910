pub mod commands;
pub mod dto;
pub mod error;
pub mod mediator;
pub mod outcome;
pub mod ports;
pub mod queries;
pub mod services;
pub mod validation;

pub use outcome::{Error, ErrorKind, FailureResponse, Outcome};
