// src/application/mediator/pipeline.rs
use super::{
    context::RequestContext,
    error::DispatchError,
    request::{Request, RequestHandler},
};
use async_trait::async_trait;
use futures::future::BoxFuture;

pub type DispatchResult<R> = Result<<R as Request>::Response, DispatchError>;

/// A stage wrapped around handler execution.
///
/// A behavior either returns a response of its own (short-circuit) or hands
/// the request to `next`. [`Next::run`] consumes `next`, so the rest of the
/// chain runs at most once per behavior.
#[async_trait]
pub trait PipelineBehavior<R: Request>: Send + Sync {
    async fn handle(
        &self,
        request: R,
        ctx: &RequestContext,
        next: Next<'_, R>,
    ) -> DispatchResult<R>;
}

/// The remainder of the chain after the current behavior.
pub struct Next<'a, R: Request> {
    stages: &'a [&'a dyn PipelineBehavior<R>],
    handler: &'a dyn RequestHandler<R>,
    ctx: &'a RequestContext,
}

impl<'a, R: Request> Next<'a, R> {
    pub(crate) const fn new(
        stages: &'a [&'a dyn PipelineBehavior<R>],
        handler: &'a dyn RequestHandler<R>,
        ctx: &'a RequestContext,
    ) -> Self {
        Self {
            stages,
            handler,
            ctx,
        }
    }

    pub fn run(self, request: R) -> BoxFuture<'a, DispatchResult<R>> {
        Box::pin(async move {
            match self.stages.split_first() {
                Some((stage, rest)) => {
                    let next = Next::new(rest, self.handler, self.ctx);
                    stage.handle(request, self.ctx, next).await
                }
                None => invoke_handler(self.handler, request, self.ctx).await,
            }
        })
    }
}

async fn invoke_handler<R: Request>(
    handler: &dyn RequestHandler<R>,
    request: R,
    ctx: &RequestContext,
) -> DispatchResult<R> {
    let cancellation = ctx.cancellation();
    if cancellation.is_cancelled() {
        return Err(DispatchError::Cancelled);
    }

    tokio::select! {
        biased;
        () = cancellation.cancelled() => Err(DispatchError::Cancelled),
        response = handler.handle(request, ctx) => Ok(response),
    }
}
