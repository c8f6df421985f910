// tests/support/mocks/mod.rs
pub mod repos;
pub mod time;

pub use repos::{FailingAddressRepo, LEAKY_DETAIL, PanickingAddressRepo};
pub use time::{SteppingClock, fixed_now};
