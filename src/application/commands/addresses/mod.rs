// src/application/commands/addresses/mod.rs
mod create;
mod delete;
mod rules;
mod update;

pub use create::{CreateAddressCommand, CreateAddressHandler, CreateAddressValidator};
pub use delete::{DeleteAddressCommand, DeleteAddressHandler};
pub use update::{UpdateAddressCommand, UpdateAddressHandler, UpdateAddressValidator};
