use crate::domain::address::entity::{Address, AddressChanges, NewAddress};
use crate::domain::address::value_objects::AddressId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Storage port for addresses. Every method is atomic on its own.
#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn insert(&self, address: NewAddress) -> DomainResult<Address>;
    async fn find_by_id(&self, id: AddressId) -> DomainResult<Option<Address>>;
    async fn list(&self) -> DomainResult<Vec<Address>>;
    /// Returns `None` when no address with `id` exists.
    async fn update(&self, id: AddressId, changes: AddressChanges)
    -> DomainResult<Option<Address>>;
    /// Returns `false` when no address with `id` exists.
    async fn delete(&self, id: AddressId) -> DomainResult<bool>;
}
