// src/presentation/http/mod.rs
pub mod endpoints;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod state;
