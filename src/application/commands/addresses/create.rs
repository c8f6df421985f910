// src/application/commands/addresses/create.rs
use super::rules::{AddressFields, address_rules};
use crate::{
    application::{
        dto::AddressDto,
        mediator::{Request, RequestContext, RequestHandler},
        outcome::Outcome,
        ports::time::Clock,
        validation::{RuleSet, ValidationIssue, Validator},
    },
    domain::address::{AddressId, AddressRepository, NewAddress},
};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CreateAddressCommand {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl Request for CreateAddressCommand {
    type Response = Outcome<AddressDto>;
}

impl AddressFields for CreateAddressCommand {
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

pub struct CreateAddressValidator {
    rules: RuleSet<CreateAddressCommand>,
}

impl Default for CreateAddressValidator {
    fn default() -> Self {
        Self {
            rules: address_rules(),
        }
    }
}

#[async_trait]
impl Validator<CreateAddressCommand> for CreateAddressValidator {
    async fn validate(&self, request: &CreateAddressCommand) -> Vec<ValidationIssue> {
        self.rules.check(request)
    }
}

pub struct CreateAddressHandler {
    repo: Arc<dyn AddressRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateAddressHandler {
    pub fn new(repo: Arc<dyn AddressRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

#[async_trait]
impl RequestHandler<CreateAddressCommand> for CreateAddressHandler {
    async fn handle(
        &self,
        command: CreateAddressCommand,
        _ctx: &RequestContext,
    ) -> Outcome<AddressDto> {
        let CreateAddressCommand {
            street,
            city,
            state,
            zip_code,
            country,
        } = command;

        let new_address = NewAddress {
            id: AddressId::generate(),
            street,
            city,
            state,
            zip_code,
            country,
            created_at: self.clock.now(),
        };

        match self.repo.insert(new_address).await {
            Ok(created) => {
                tracing::info!(address_id = %created.id, "address created");
                Outcome::success(created.into())
            }
            Err(err) => Outcome::failure(err.into()),
        }
    }
}
