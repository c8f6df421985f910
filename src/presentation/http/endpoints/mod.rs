// src/presentation/http/endpoints/mod.rs
//! HTTP endpoints and the registry that binds them onto a router.
//!
//! Each endpoint names its own method and path; [`EndpointRegistry`]
//! rejects two endpoints claiming the same pair before anything is bound.

pub mod addresses;

use axum::{
    Router,
    handler::Handler,
    routing::{MethodFilter, on},
};
use std::{collections::HashMap, fmt};
use thiserror::Error;

/// Endpoint wiring mistakes. Fatal at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EndpointError {
    #[error("route {method} {path} is claimed by both {first} and {second}")]
    DuplicateRoute {
        method: HttpMethod,
        path: &'static str,
        first: &'static str,
        second: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    pub const fn filter(self) -> MethodFilter {
        match self {
            Self::Get => MethodFilter::GET,
            Self::Post => MethodFilter::POST,
            Self::Put => MethodFilter::PUT,
            Self::Delete => MethodFilter::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Method, path template and a name used in logs and wiring errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteInfo {
    pub method: HttpMethod,
    pub path: &'static str,
    pub name: &'static str,
}

impl RouteInfo {
    pub const fn new(method: HttpMethod, path: &'static str, name: &'static str) -> Self {
        Self { method, path, name }
    }
}

pub trait Endpoint: Send + Sync {
    fn route(&self) -> RouteInfo;

    /// Adds this endpoint's handler to `router`, usually via [`map_route`].
    fn bind(&self, router: Router) -> Router;
}

/// Binds `handler` to exactly the method and path of `route`.
pub fn map_route<H, T>(router: Router, route: RouteInfo, handler: H) -> Router
where
    H: Handler<T, ()>,
    T: 'static,
{
    router.route(route.path, on(route.method.filter(), handler))
}

pub struct EndpointRegistry {
    endpoints: Vec<Box<dyn Endpoint>>,
}

impl EndpointRegistry {
    pub fn new(endpoints: Vec<Box<dyn Endpoint>>) -> Result<Self, EndpointError> {
        let mut claimed: HashMap<(HttpMethod, &'static str), &'static str> = HashMap::new();
        for endpoint in &endpoints {
            let route = endpoint.route();
            if let Some(first) = claimed.insert((route.method, route.path), route.name) {
                return Err(EndpointError::DuplicateRoute {
                    method: route.method,
                    path: route.path,
                    first,
                    second: route.name,
                });
            }
        }
        Ok(Self { endpoints })
    }

    /// Every endpoint this service exposes.
    pub fn discover() -> Result<Self, EndpointError> {
        Self::new(addresses::endpoints())
    }

    pub fn routes(&self) -> Vec<RouteInfo> {
        self.endpoints.iter().map(|endpoint| endpoint.route()).collect()
    }

    pub fn bind(&self, router: Router) -> Router {
        self.endpoints.iter().fold(router, |router, endpoint| {
            let route = endpoint.route();
            tracing::debug!(method = %route.method, path = route.path, name = route.name, "binding endpoint");
            endpoint.bind(router)
        })
    }
}
