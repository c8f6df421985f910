use crate::{
    application::{
        dto::AddressDto,
        error::address_not_found,
        mediator::{Request, RequestContext, RequestHandler},
        outcome::Outcome,
    },
    domain::address::{AddressId, AddressRepository},
};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
pub struct GetAddressByIdQuery {
    pub id: AddressId,
}

impl Request for GetAddressByIdQuery {
    type Response = Outcome<AddressDto>;
}

pub struct GetAddressByIdHandler {
    repo: Arc<dyn AddressRepository>,
}

impl GetAddressByIdHandler {
    pub fn new(repo: Arc<dyn AddressRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl RequestHandler<GetAddressByIdQuery> for GetAddressByIdHandler {
    async fn handle(&self, query: GetAddressByIdQuery, _ctx: &RequestContext) -> Outcome<AddressDto> {
        match self.repo.find_by_id(query.id).await {
            Ok(Some(address)) => Outcome::success(address.into()),
            Ok(None) => Outcome::failure(address_not_found(query.id)),
            Err(err) => Outcome::failure(err.into()),
        }
    }
}
