// src/presentation/http/openapi.rs
use crate::{
    application::dto::AddressDto,
    presentation::http::{
        endpoints::addresses::AddressPayload,
        error::{ErrorResponse, ProblemDetails},
    },
};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";
pub const DOCS_PATH: &str = "/docs";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::endpoints::addresses::create_address,
        crate::presentation::http::endpoints::addresses::get_address_by_id,
        crate::presentation::http::endpoints::addresses::list_addresses,
        crate::presentation::http::endpoints::addresses::update_address,
        crate::presentation::http::endpoints::addresses::delete_address,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            AddressDto,
            AddressPayload,
            ErrorResponse,
            ProblemDetails
        )
    ),
    tags(
        (name = "Addresses", description = "Postal address records"),
        (name = "System", description = "Service status")
    )
)]
pub struct ApiDoc;

/// Swagger UI under `/docs`, reading the document served at `/openapi.json`.
pub fn docs_router() -> axum::Router {
    SwaggerUi::new(DOCS_PATH)
        .url(OPENAPI_JSON_PATH, ApiDoc::openapi())
        .into()
}

/// Writes the pretty-printed document to `path`, creating parent directories.
pub fn write_openapi_snapshot(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}
