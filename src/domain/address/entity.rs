// src/domain/address/entity.rs
use crate::domain::address::value_objects::AddressId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: AddressId,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A record ready to be stored; the id and creation time are fixed by the caller.
#[derive(Debug, Clone)]
pub struct NewAddress {
    pub id: AddressId,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
}

impl From<NewAddress> for Address {
    fn from(value: NewAddress) -> Self {
        Self {
            id: value.id,
            street: value.street,
            city: value.city,
            state: value.state,
            zip_code: value.zip_code,
            country: value.country,
            created_at: value.created_at,
            updated_at: None,
        }
    }
}

/// Full replacement of the mutable fields of an address.
#[derive(Debug, Clone)]
pub struct AddressChanges {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub updated_at: DateTime<Utc>,
}

impl Address {
    pub fn apply(&mut self, changes: AddressChanges) {
        let AddressChanges {
            street,
            city,
            state,
            zip_code,
            country,
            updated_at,
        } = changes;
        self.street = street;
        self.city = city;
        self.state = state;
        self.zip_code = zip_code;
        self.country = country;
        self.updated_at = Some(updated_at);
    }
}
