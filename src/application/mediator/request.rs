// src/application/mediator/request.rs
use super::context::RequestContext;
use crate::application::outcome::FailureResponse;
use async_trait::async_trait;

/// A command or query. Its concrete type is the dispatch key.
pub trait Request: Send + Sync + 'static {
    type Response: FailureResponse + Send + 'static;
}

/// The single component that executes a request of type `R`.
#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync {
    async fn handle(&self, request: R, ctx: &RequestContext) -> R::Response;
}
