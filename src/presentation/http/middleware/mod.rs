// src/presentation/http/middleware/mod.rs
pub mod request_context;

pub use request_context::{REQUEST_ID_HEADER, request_context};
