// src/application/validation/behavior.rs
use super::{ValidationIssue, Validator};
use crate::application::{
    mediator::{DispatchError, DispatchResult, Next, PipelineBehavior, Request, RequestContext},
    outcome::{Error, FailureResponse},
};
use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;

pub const VALIDATION_FAILED: &str = "Validation.Failed";

/// Runs every validator registered for `R` before the rest of the chain.
///
/// Any issue turns into a single `Validation` error whose message joins all
/// issues with `"; "`; the handler is then never reached.
pub struct ValidationBehavior<'v, R: Request> {
    validators: &'v [Arc<dyn Validator<R>>],
}

impl<'v, R: Request> ValidationBehavior<'v, R> {
    pub const fn new(validators: &'v [Arc<dyn Validator<R>>]) -> Self {
        Self { validators }
    }
}

#[async_trait]
impl<'v, R: Request> PipelineBehavior<R> for ValidationBehavior<'v, R> {
    async fn handle(
        &self,
        request: R,
        ctx: &RequestContext,
        next: Next<'_, R>,
    ) -> DispatchResult<R> {
        if self.validators.is_empty() {
            return next.run(request).await;
        }

        // Partial results from a cancelled run are dropped with the join.
        let issues = tokio::select! {
            biased;
            () = ctx.cancellation().cancelled() => return Err(DispatchError::Cancelled),
            issues = collect_issues(self.validators, &request) => issues,
        };

        if issues.is_empty() {
            return next.run(request).await;
        }

        let message = issues
            .iter()
            .map(|issue| issue.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        tracing::debug!(issues = issues.len(), %message, "request rejected by validation");

        Ok(R::Response::from_failure(Error::validation(
            VALIDATION_FAILED,
            message,
        )))
    }
}

async fn collect_issues<R: Request>(
    validators: &[Arc<dyn Validator<R>>],
    request: &R,
) -> Vec<ValidationIssue> {
    join_all(validators.iter().map(|validator| validator.validate(request)))
        .await
        .into_iter()
        .flatten()
        .collect()
}
