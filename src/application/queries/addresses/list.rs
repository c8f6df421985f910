use crate::{
    application::{
        dto::AddressDto,
        error::from_store,
        mediator::{Request, RequestContext, RequestHandler},
        outcome::Outcome,
    },
    domain::address::AddressRepository,
};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default)]
pub struct GetAllAddressesQuery;

impl Request for GetAllAddressesQuery {
    type Response = Outcome<Vec<AddressDto>>;
}

pub struct GetAllAddressesHandler {
    repo: Arc<dyn AddressRepository>,
}

impl GetAllAddressesHandler {
    pub fn new(repo: Arc<dyn AddressRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl RequestHandler<GetAllAddressesQuery> for GetAllAddressesHandler {
    async fn handle(
        &self,
        _query: GetAllAddressesQuery,
        _ctx: &RequestContext,
    ) -> Outcome<Vec<AddressDto>> {
        from_store(self.repo.list().await)
            .map(|addresses| addresses.into_iter().map(Into::into).collect())
    }
}
