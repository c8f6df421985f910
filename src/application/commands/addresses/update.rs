// src/application/commands/addresses/update.rs
use super::rules::{AddressFields, address_rules};
use crate::{
    application::{
        dto::AddressDto,
        error::address_not_found,
        mediator::{Request, RequestContext, RequestHandler},
        outcome::Outcome,
        ports::time::Clock,
        validation::{RuleSet, ValidationIssue, Validator},
    },
    domain::address::{AddressChanges, AddressId, AddressRepository},
};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct UpdateAddressCommand {
    pub id: AddressId,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl Request for UpdateAddressCommand {
    type Response = Outcome<AddressDto>;
}

impl AddressFields for UpdateAddressCommand {
    fn street(&self) -> &str {
        &self.street
    }

    fn city(&self) -> &str {
        &self.city
    }

    fn state(&self) -> &str {
        &self.state
    }

    fn zip_code(&self) -> &str {
        &self.zip_code
    }

    fn country(&self) -> &str {
        &self.country
    }
}

pub struct UpdateAddressValidator {
    rules: RuleSet<UpdateAddressCommand>,
}

impl Default for UpdateAddressValidator {
    fn default() -> Self {
        Self {
            rules: address_rules(),
        }
    }
}

#[async_trait]
impl Validator<UpdateAddressCommand> for UpdateAddressValidator {
    async fn validate(&self, request: &UpdateAddressCommand) -> Vec<ValidationIssue> {
        self.rules.check(request)
    }
}

pub struct UpdateAddressHandler {
    repo: Arc<dyn AddressRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateAddressHandler {
    pub fn new(repo: Arc<dyn AddressRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

#[async_trait]
impl RequestHandler<UpdateAddressCommand> for UpdateAddressHandler {
    async fn handle(
        &self,
        command: UpdateAddressCommand,
        _ctx: &RequestContext,
    ) -> Outcome<AddressDto> {
        let UpdateAddressCommand {
            id,
            street,
            city,
            state,
            zip_code,
            country,
        } = command;

        let changes = AddressChanges {
            street,
            city,
            state,
            zip_code,
            country,
            updated_at: self.clock.now(),
        };

        match self.repo.update(id, changes).await {
            Ok(Some(updated)) => {
                tracing::info!(address_id = %id, "address updated");
                Outcome::success(updated.into())
            }
            Ok(None) => Outcome::failure(address_not_found(id)),
            Err(err) => Outcome::failure(err.into()),
        }
    }
}
