pub mod addresses;

pub use addresses::AddressDto;
