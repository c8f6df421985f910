// src/infrastructure/repositories/memory_address.rs
use crate::domain::address::{Address, AddressChanges, AddressId, AddressRepository, NewAddress};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local store. Each operation holds the lock for its whole
/// read-modify-write, so updates and deletes are atomic.
#[derive(Debug, Default)]
pub struct InMemoryAddressRepository {
    addresses: RwLock<HashMap<AddressId, Address>>,
}

impl InMemoryAddressRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AddressRepository for InMemoryAddressRepository {
    async fn insert(&self, address: NewAddress) -> DomainResult<Address> {
        let mut addresses = self.addresses.write().await;
        if addresses.contains_key(&address.id) {
            return Err(DomainError::Conflict(format!(
                "address {} already exists",
                address.id
            )));
        }
        let address = Address::from(address);
        addresses.insert(address.id, address.clone());
        Ok(address)
    }

    async fn find_by_id(&self, id: AddressId) -> DomainResult<Option<Address>> {
        Ok(self.addresses.read().await.get(&id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Address>> {
        let mut all: Vec<Address> = self.addresses.read().await.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn update(
        &self,
        id: AddressId,
        changes: AddressChanges,
    ) -> DomainResult<Option<Address>> {
        let mut addresses = self.addresses.write().await;
        Ok(addresses.get_mut(&id).map(|address| {
            address.apply(changes);
            address.clone()
        }))
    }

    async fn delete(&self, id: AddressId) -> DomainResult<bool> {
        Ok(self.addresses.write().await.remove(&id).is_some())
    }
}
