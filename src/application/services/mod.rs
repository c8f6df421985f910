// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::addresses::{
            CreateAddressCommand, CreateAddressHandler, CreateAddressValidator,
            DeleteAddressCommand, DeleteAddressHandler, UpdateAddressCommand,
            UpdateAddressHandler, UpdateAddressValidator,
        },
        mediator::{Mediator, MediatorBuilder, RegistryError},
        ports::time::Clock,
        queries::addresses::{
            GetAddressByIdHandler, GetAddressByIdQuery, GetAllAddressesHandler,
            GetAllAddressesQuery,
        },
    },
    domain::address::AddressRepository,
};

/// Everything the transport layer needs to serve requests.
pub struct ApplicationServices {
    mediator: Arc<Mediator>,
}

impl ApplicationServices {
    pub fn new(
        address_repo: Arc<dyn AddressRepository>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, RegistryError> {
        let mediator = register_address_features(Mediator::builder(), &address_repo, &clock)?.build();
        Ok(Self {
            mediator: Arc::new(mediator),
        })
    }

    pub fn mediator(&self) -> Arc<Mediator> {
        Arc::clone(&self.mediator)
    }
}

/// Registers every address handler and validator.
pub fn register_address_features(
    builder: MediatorBuilder,
    repo: &Arc<dyn AddressRepository>,
    clock: &Arc<dyn Clock>,
) -> Result<MediatorBuilder, RegistryError> {
    builder
        .validator::<CreateAddressCommand, _>(CreateAddressValidator::default())
        .validator::<UpdateAddressCommand, _>(UpdateAddressValidator::default())
        .handler::<CreateAddressCommand, _>(CreateAddressHandler::new(
            Arc::clone(repo),
            Arc::clone(clock),
        ))?
        .handler::<GetAddressByIdQuery, _>(GetAddressByIdHandler::new(Arc::clone(repo)))?
        .handler::<GetAllAddressesQuery, _>(GetAllAddressesHandler::new(Arc::clone(repo)))?
        .handler::<UpdateAddressCommand, _>(UpdateAddressHandler::new(
            Arc::clone(repo),
            Arc::clone(clock),
        ))?
        .handler::<DeleteAddressCommand, _>(DeleteAddressHandler::new(Arc::clone(repo)))
}
