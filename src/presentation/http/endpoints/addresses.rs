// src/presentation/http/endpoints/addresses.rs
use super::{Endpoint, HttpMethod, RouteInfo, map_route};
use crate::{
    application::{
        commands::addresses::{CreateAddressCommand, DeleteAddressCommand, UpdateAddressCommand},
        dto::AddressDto,
        queries::addresses::{GetAddressByIdQuery, GetAllAddressesQuery},
    },
    presentation::http::{
        error::{ErrorResponse, ProblemDetails},
        extractors::{AddressIdPath, Context, JsonBody},
        response::{IntoHttpResponse, created, no_content, ok},
        state::HttpState,
    },
};
use axum::{Extension, Router, response::Response};
use serde::Deserialize;
use utoipa::ToSchema;

pub const COLLECTION_PATH: &str = "/addresses";
pub const ITEM_PATH: &str = "/addresses/{id}";

/// Body of create and update requests. Absent fields read as empty strings
/// and are reported by validation.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressPayload {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

pub fn endpoints() -> Vec<Box<dyn Endpoint>> {
    vec![
        Box::new(CreateAddress),
        Box::new(GetAddressById),
        Box::new(GetAllAddresses),
        Box::new(UpdateAddress),
        Box::new(DeleteAddress),
    ]
}

#[utoipa::path(
    post,
    path = "/addresses",
    request_body = AddressPayload,
    responses(
        (status = 201, description = "Address created.", body = AddressDto),
        (status = 400, description = "Validation failed.", body = ErrorResponse),
        (status = 500, description = "Unexpected failure.", body = ProblemDetails)
    ),
    tag = "Addresses"
)]
pub async fn create_address(
    Extension(state): Extension<HttpState>,
    Context(ctx): Context,
    JsonBody(payload): JsonBody<AddressPayload>,
) -> Response {
    let command = CreateAddressCommand {
        street: payload.street,
        city: payload.city,
        state: payload.state,
        zip_code: payload.zip_code,
        country: payload.country,
    };

    state
        .services
        .mediator()
        .send(command, &ctx)
        .await
        .respond_with(|address| created(&format!("{COLLECTION_PATH}/{}", address.id), address))
}

#[utoipa::path(
    get,
    path = "/addresses/{id}",
    params(("id" = uuid::Uuid, Path, description = "Address id")),
    responses(
        (status = 200, description = "The address.", body = AddressDto),
        (status = 400, description = "Malformed id.", body = ErrorResponse),
        (status = 404, description = "No such address.", body = ErrorResponse)
    ),
    tag = "Addresses"
)]
pub async fn get_address_by_id(
    Extension(state): Extension<HttpState>,
    Context(ctx): Context,
    AddressIdPath(id): AddressIdPath,
) -> Response {
    state
        .services
        .mediator()
        .send(GetAddressByIdQuery { id }, &ctx)
        .await
        .respond_with(ok)
}

#[utoipa::path(
    get,
    path = "/addresses",
    responses(
        (status = 200, description = "Every stored address.", body = [AddressDto])
    ),
    tag = "Addresses"
)]
pub async fn list_addresses(
    Extension(state): Extension<HttpState>,
    Context(ctx): Context,
) -> Response {
    state
        .services
        .mediator()
        .send(GetAllAddressesQuery, &ctx)
        .await
        .respond_with(ok)
}

#[utoipa::path(
    put,
    path = "/addresses/{id}",
    params(("id" = uuid::Uuid, Path, description = "Address id")),
    request_body = AddressPayload,
    responses(
        (status = 200, description = "The updated address.", body = AddressDto),
        (status = 400, description = "Validation failed or malformed id.", body = ErrorResponse),
        (status = 404, description = "No such address.", body = ErrorResponse)
    ),
    tag = "Addresses"
)]
pub async fn update_address(
    Extension(state): Extension<HttpState>,
    Context(ctx): Context,
    AddressIdPath(id): AddressIdPath,
    JsonBody(payload): JsonBody<AddressPayload>,
) -> Response {
    let command = UpdateAddressCommand {
        id,
        street: payload.street,
        city: payload.city,
        state: payload.state,
        zip_code: payload.zip_code,
        country: payload.country,
    };

    state
        .services
        .mediator()
        .send(command, &ctx)
        .await
        .respond_with(ok)
}

#[utoipa::path(
    delete,
    path = "/addresses/{id}",
    params(("id" = uuid::Uuid, Path, description = "Address id")),
    responses(
        (status = 204, description = "Address deleted."),
        (status = 400, description = "Malformed id.", body = ErrorResponse),
        (status = 404, description = "No such address.", body = ErrorResponse)
    ),
    tag = "Addresses"
)]
pub async fn delete_address(
    Extension(state): Extension<HttpState>,
    Context(ctx): Context,
    AddressIdPath(id): AddressIdPath,
) -> Response {
    state
        .services
        .mediator()
        .send(DeleteAddressCommand { id }, &ctx)
        .await
        .respond_with(no_content)
}

pub struct CreateAddress;

impl Endpoint for CreateAddress {
    fn route(&self) -> RouteInfo {
        RouteInfo::new(HttpMethod::Post, COLLECTION_PATH, "CreateAddress")
    }

    fn bind(&self, router: Router) -> Router {
        map_route(router, self.route(), create_address)
    }
}

pub struct GetAddressById;

impl Endpoint for GetAddressById {
    fn route(&self) -> RouteInfo {
        RouteInfo::new(HttpMethod::Get, ITEM_PATH, "GetAddressById")
    }

    fn bind(&self, router: Router) -> Router {
        map_route(router, self.route(), get_address_by_id)
    }
}

pub struct GetAllAddresses;

impl Endpoint for GetAllAddresses {
    fn route(&self) -> RouteInfo {
        RouteInfo::new(HttpMethod::Get, COLLECTION_PATH, "GetAllAddresses")
    }

    fn bind(&self, router: Router) -> Router {
        map_route(router, self.route(), list_addresses)
    }
}

pub struct UpdateAddress;

impl Endpoint for UpdateAddress {
    fn route(&self) -> RouteInfo {
        RouteInfo::new(HttpMethod::Put, ITEM_PATH, "UpdateAddress")
    }

    fn bind(&self, router: Router) -> Router {
        map_route(router, self.route(), update_address)
    }
}

pub struct DeleteAddress;

impl Endpoint for DeleteAddress {
    fn route(&self) -> RouteInfo {
        RouteInfo::new(HttpMethod::Delete, ITEM_PATH, "DeleteAddress")
    }

    fn bind(&self, router: Router) -> Router {
        map_route(router, self.route(), delete_address)
    }
}
