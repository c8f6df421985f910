// src/infrastructure/repositories/mod.rs
mod error;
mod memory_address;
mod postgres_address;

pub use error::map_sqlx;
pub use memory_address::InMemoryAddressRepository;
pub use postgres_address::PostgresAddressRepository;
