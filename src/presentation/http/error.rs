// src/presentation/http/error.rs
use crate::application::{
    mediator::DispatchError,
    outcome::{Error, ErrorKind},
};
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const REQUEST_INVALID: &str = "Request.Invalid";
pub const REQUEST_CANCELLED: &str = "Request.Cancelled";
pub const SERVER_ERROR: &str = "Server.Error";

const PROBLEM_JSON: &str = "application/problem+json";

/// Body for 4xx responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Body for 5xx responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProblemDetails {
    pub title: String,
    pub detail: String,
    pub status: u16,
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    code: String,
    message: String,
}

impl HttpError {
    pub fn from_error(error: &Error) -> Self {
        let status = match error.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Failure | ErrorKind::None => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, error.code(), error.message())
    }

    pub fn from_dispatch(err: &DispatchError) -> Self {
        match err {
            DispatchError::Cancelled => Self::new(
                cancelled_status(),
                REQUEST_CANCELLED,
                "The request was cancelled before it completed",
            ),
            DispatchError::MissingHandler(request_type) => {
                tracing::error!(request_type, "no handler registered");
                Self::internal()
            }
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, REQUEST_INVALID, message)
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            SERVER_ERROR,
            "An unexpected error occurred",
        )
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
        }
    }
}

fn cancelled_status() -> StatusCode {
    // 499: client closed request
    StatusCode::from_u16(499).unwrap_or(StatusCode::REQUEST_TIMEOUT)
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            let body = ProblemDetails {
                title: self.code,
                detail: self.message,
                status: self.status.as_u16(),
            };
            let mut response = (self.status, Json(body)).into_response();
            response
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(PROBLEM_JSON));
            return response;
        }

        let body = ErrorResponse {
            error: self.code,
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}
