// src/presentation/http/response.rs
//! Turns a dispatch result into the wire response.

use super::error::HttpError;
use crate::application::{mediator::DispatchError, outcome::Outcome};
use axum::{
    Json,
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub trait IntoHttpResponse<T> {
    /// Uses `on_success` for a successful outcome and the error-kind status
    /// mapping for everything else.
    fn respond_with(self, on_success: impl FnOnce(T) -> Response) -> Response;
}

impl<T> IntoHttpResponse<T> for Result<Outcome<T>, DispatchError> {
    fn respond_with(self, on_success: impl FnOnce(T) -> Response) -> Response {
        match self {
            Ok(outcome) => outcome.match_with(on_success, |error| {
                HttpError::from_error(&error).into_response()
            }),
            Err(err) => HttpError::from_dispatch(&err).into_response(),
        }
    }
}

pub fn ok<T: Serialize>(value: T) -> Response {
    (StatusCode::OK, Json(value)).into_response()
}

pub fn created<T: Serialize>(location: &str, value: T) -> Response {
    (StatusCode::CREATED, [(LOCATION, location)], Json(value)).into_response()
}

pub fn no_content((): ()) -> Response {
    StatusCode::NO_CONTENT.into_response()
}
