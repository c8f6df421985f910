// src/application/queries/addresses/mod.rs
mod get_by_id;
mod list;

pub use get_by_id::{GetAddressByIdHandler, GetAddressByIdQuery};
pub use list::{GetAllAddressesHandler, GetAllAddressesQuery};
