pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Address, AddressChanges, NewAddress};
pub use repository::AddressRepository;
pub use value_objects::AddressId;
