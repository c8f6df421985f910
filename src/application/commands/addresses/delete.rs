// src/application/commands/addresses/delete.rs
use crate::{
    application::{
        error::address_not_found,
        mediator::{Request, RequestContext, RequestHandler},
        outcome::Outcome,
    },
    domain::address::{AddressId, AddressRepository},
};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
pub struct DeleteAddressCommand {
    pub id: AddressId,
}

impl Request for DeleteAddressCommand {
    type Response = Outcome;
}

pub struct DeleteAddressHandler {
    repo: Arc<dyn AddressRepository>,
}

impl DeleteAddressHandler {
    pub fn new(repo: Arc<dyn AddressRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl RequestHandler<DeleteAddressCommand> for DeleteAddressHandler {
    async fn handle(&self, command: DeleteAddressCommand, _ctx: &RequestContext) -> Outcome {
        match self.repo.delete(command.id).await {
            Ok(true) => {
                tracing::info!(address_id = %command.id, "address deleted");
                Outcome::completed()
            }
            Ok(false) => Outcome::failure(address_not_found(command.id)),
            Err(err) => Outcome::failure(err.into()),
        }
    }
}
