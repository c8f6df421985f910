// src/application/mediator/mod.rs
//! Request dispatch.
//!
//! Handlers, validators and behaviors are registered explicitly on a
//! [`MediatorBuilder`] at startup and frozen into an immutable [`Mediator`].
//! Each dispatch runs `registered behaviors -> validation -> handler`.

mod context;
mod error;
mod pipeline;
mod request;

pub use context::{Cancellation, CancellationHandle, RequestContext};
pub use error::{DispatchError, RegistryError};
pub use pipeline::{DispatchResult, Next, PipelineBehavior};
pub use request::{Request, RequestHandler};

use crate::application::validation::{ValidationBehavior, Validator};
use std::{
    any::{Any, TypeId, type_name},
    collections::HashMap,
    sync::Arc,
};
use tracing::Instrument;

struct Registration<R: Request> {
    handler: Option<Arc<dyn RequestHandler<R>>>,
    validators: Vec<Arc<dyn Validator<R>>>,
    behaviors: Vec<Arc<dyn PipelineBehavior<R>>>,
}

impl<R: Request> Default for Registration<R> {
    fn default() -> Self {
        Self {
            handler: None,
            validators: Vec::new(),
            behaviors: Vec::new(),
        }
    }
}

type Registrations = HashMap<TypeId, Box<dyn Any + Send + Sync>>;

#[derive(Default)]
pub struct MediatorBuilder {
    registrations: Registrations,
}

impl MediatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the handler for `R`. A second handler for the same request
    /// type is rejected.
    pub fn handler<R, H>(mut self, handler: H) -> Result<Self, RegistryError>
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        let registration = self.registration_mut::<R>();
        if registration.handler.is_some() {
            return Err(RegistryError::DuplicateHandler(type_name::<R>()));
        }
        registration.handler = Some(Arc::new(handler));
        Ok(self)
    }

    /// Adds a validator for `R`. Validators report in registration order.
    #[must_use]
    pub fn validator<R, V>(mut self, validator: V) -> Self
    where
        R: Request,
        V: Validator<R> + 'static,
    {
        self.registration_mut::<R>()
            .validators
            .push(Arc::new(validator));
        self
    }

    /// Adds a behavior for `R`. Behaviors wrap validation and the handler,
    /// the first registered being the outermost.
    #[must_use]
    pub fn behavior<R, B>(mut self, behavior: B) -> Self
    where
        R: Request,
        B: PipelineBehavior<R> + 'static,
    {
        self.registration_mut::<R>().behaviors.push(Arc::new(behavior));
        self
    }

    pub fn build(self) -> Mediator {
        Mediator {
            registrations: self.registrations,
        }
    }

    fn registration_mut<R: Request>(&mut self) -> &mut Registration<R> {
        self.registrations
            .entry(TypeId::of::<R>())
            .or_insert_with(|| Box::new(Registration::<R>::default()))
            .downcast_mut::<Registration<R>>()
            .unwrap_or_else(|| unreachable!("registrations are keyed by their request type"))
    }
}

/// Read-only dispatcher shared by every request for the process lifetime.
pub struct Mediator {
    registrations: Registrations,
}

impl Mediator {
    pub fn builder() -> MediatorBuilder {
        MediatorBuilder::new()
    }

    pub fn has_handler<R: Request>(&self) -> bool {
        self.registration::<R>()
            .is_some_and(|registration| registration.handler.is_some())
    }

    pub fn validator_count<R: Request>(&self) -> usize {
        self.registration::<R>()
            .map_or(0, |registration| registration.validators.len())
    }

    /// Routes `request` to its handler through the behavior chain.
    pub async fn send<R: Request>(&self, request: R, ctx: &RequestContext) -> DispatchResult<R> {
        let request_type = short_type_name(type_name::<R>());
        let Some(registration) = self.registration::<R>() else {
            return Err(DispatchError::MissingHandler(type_name::<R>()));
        };
        let Some(handler) = registration.handler.as_deref() else {
            return Err(DispatchError::MissingHandler(type_name::<R>()));
        };

        let validation = ValidationBehavior::new(&registration.validators);
        let mut stages: Vec<&dyn PipelineBehavior<R>> = registration
            .behaviors
            .iter()
            .map(|behavior| behavior.as_ref() as &dyn PipelineBehavior<R>)
            .collect();
        stages.push(&validation);

        let span = tracing::info_span!(
            "dispatch",
            request = request_type,
            request_id = %ctx.request_id(),
        );

        async {
            let result = Next::new(&stages, handler, ctx).run(request).await;
            if let Err(err) = &result {
                tracing::warn!(error = %err, "dispatch aborted");
            }
            result
        }
        .instrument(span)
        .await
    }

    fn registration<R: Request>(&self) -> Option<&Registration<R>> {
        self.registrations
            .get(&TypeId::of::<R>())
            .and_then(|entry| entry.downcast_ref::<Registration<R>>())
    }
}

fn short_type_name(full: &'static str) -> &'static str {
    full.rsplit("::").next().unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        outcome::{Error, ErrorKind, Outcome},
        validation::ValidationIssue,
    };
    use async_trait::async_trait;
    use std::{
        sync::{
            Mutex,
            atomic::{AtomicUsize, Ordering},
        },
        time::Duration,
    };

    struct Echo(String);

    impl Request for Echo {
        type Response = Outcome<String>;
    }

    struct Ping;

    impl Request for Ping {
        type Response = Outcome;
    }

    #[derive(Default)]
    struct EchoHandler {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl RequestHandler<Echo> for EchoHandler {
        async fn handle(&self, request: Echo, _ctx: &RequestContext) -> Outcome<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Outcome::success(request.0)
        }
    }

    struct PingHandler {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl RequestHandler<Ping> for PingHandler {
        async fn handle(&self, _request: Ping, _ctx: &RequestContext) -> Outcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Outcome::completed()
        }
    }

    struct Reject(&'static str);

    #[async_trait]
    impl<R: Request> Validator<R> for Reject {
        async fn validate(&self, _request: &R) -> Vec<ValidationIssue> {
            vec![ValidationIssue::new(self.0)]
        }
    }

    struct Accept;

    #[async_trait]
    impl<R: Request> Validator<R> for Accept {
        async fn validate(&self, _request: &R) -> Vec<ValidationIssue> {
            Vec::new()
        }
    }

    struct Record {
        name: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait]
    impl PipelineBehavior<Echo> for Record {
        async fn handle(
            &self,
            request: Echo,
            _ctx: &RequestContext,
            next: Next<'_, Echo>,
        ) -> DispatchResult<Echo> {
            self.log.lock().unwrap().push(self.name);
            next.run(request).await
        }
    }

    struct ShortCircuit;

    #[async_trait]
    impl PipelineBehavior<Echo> for ShortCircuit {
        async fn handle(
            &self,
            _request: Echo,
            _ctx: &RequestContext,
            _next: Next<'_, Echo>,
        ) -> DispatchResult<Echo> {
            Ok(Outcome::failure(Error::conflict("Echo.Blocked", "blocked")))
        }
    }

    struct Slow;

    #[async_trait]
    impl RequestHandler<Echo> for Slow {
        async fn handle(&self, request: Echo, _ctx: &RequestContext) -> Outcome<String> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Outcome::success(request.0)
        }
    }

    #[tokio::test]
    async fn dispatches_to_registered_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mediator = Mediator::builder()
            .handler::<Echo, _>(EchoHandler {
                calls: Arc::clone(&calls),
            })
            .unwrap()
            .build();

        let response = mediator
            .send(Echo("hello".into()), &RequestContext::detached())
            .await
            .unwrap();

        assert_eq!(response.into_value().unwrap(), "hello");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_handler_is_reported() {
        let mediator = Mediator::builder().validator::<Ping, _>(Accept).build();

        let err = mediator
            .send(Ping, &RequestContext::detached())
            .await
            .unwrap_err();

        assert!(matches!(err, DispatchError::MissingHandler(name) if name.ends_with("Ping")));
        assert!(!mediator.has_handler::<Ping>());
    }

    #[test]
    fn duplicate_handler_is_rejected() {
        let result = Mediator::builder()
            .handler::<Echo, _>(EchoHandler::default())
            .unwrap()
            .handler::<Echo, _>(EchoHandler::default());

        assert!(matches!(result, Err(RegistryError::DuplicateHandler(_))));
    }

    #[tokio::test]
    async fn validation_failure_skips_handler_and_joins_messages_in_order() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mediator = Mediator::builder()
            .validator::<Ping, _>(Reject("first"))
            .validator::<Ping, _>(Accept)
            .validator::<Ping, _>(Reject("second"))
            .handler::<Ping, _>(PingHandler {
                calls: Arc::clone(&calls),
            })
            .unwrap()
            .build();

        let response = mediator
            .send(Ping, &RequestContext::detached())
            .await
            .unwrap();

        assert_eq!(mediator.validator_count::<Ping>(), 3);
        assert_eq!(response.error().kind(), ErrorKind::Validation);
        assert_eq!(response.error().code(), "Validation.Failed");
        assert_eq!(response.error().message(), "first; second");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn generic_response_gets_generic_validation_failure() {
        let mediator = Mediator::builder()
            .validator::<Echo, _>(Reject("nope"))
            .handler::<Echo, _>(EchoHandler::default())
            .unwrap()
            .build();

        let response: Outcome<String> = mediator
            .send(Echo("x".into()), &RequestContext::detached())
            .await
            .unwrap();

        assert!(response.is_failure());
        assert_eq!(response.error().message(), "nope");
    }

    #[tokio::test]
    async fn passing_validators_let_the_handler_run() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mediator = Mediator::builder()
            .validator::<Ping, _>(Accept)
            .handler::<Ping, _>(PingHandler {
                calls: Arc::clone(&calls),
            })
            .unwrap()
            .build();

        let response = mediator
            .send(Ping, &RequestContext::detached())
            .await
            .unwrap();

        assert!(response.is_success());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn behaviors_run_in_registration_order_before_handler() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mediator = Mediator::builder()
            .behavior::<Echo, _>(Record {
                name: "outer",
                log: Arc::clone(&log),
            })
            .behavior::<Echo, _>(Record {
                name: "inner",
                log: Arc::clone(&log),
            })
            .handler::<Echo, _>(EchoHandler::default())
            .unwrap()
            .build();

        let response = mediator
            .send(Echo("x".into()), &RequestContext::detached())
            .await
            .unwrap();

        assert!(response.is_success());
        assert_eq!(*log.lock().unwrap(), vec!["outer", "inner"]);
    }

    #[tokio::test]
    async fn short_circuiting_behavior_prevents_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mediator = Mediator::builder()
            .behavior::<Echo, _>(ShortCircuit)
            .handler::<Echo, _>(EchoHandler {
                calls: Arc::clone(&calls),
            })
            .unwrap()
            .build();

        let response = mediator
            .send(Echo("x".into()), &RequestContext::detached())
            .await
            .unwrap();

        assert_eq!(response.error().code(), "Echo.Blocked");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn cancelled_context_never_reaches_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mediator = Mediator::builder()
            .handler::<Ping, _>(PingHandler {
                calls: Arc::clone(&calls),
            })
            .unwrap()
            .build();
        let (handle, cancellation) = Cancellation::new();
        handle.cancel();
        let ctx = RequestContext::new(uuid::Uuid::new_v4(), cancellation);

        let err = mediator.send(Ping, &ctx).await.unwrap_err();

        assert_eq!(err, DispatchError::Cancelled);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_cancels_running_handler() {
        let mediator = Mediator::builder().handler::<Echo, _>(Slow).unwrap().build();
        let (_handle, cancellation) = Cancellation::with_timeout(Duration::from_millis(100));
        let ctx = RequestContext::new(uuid::Uuid::new_v4(), cancellation);

        let err = mediator.send(Echo("x".into()), &ctx).await.unwrap_err();

        assert_eq!(err, DispatchError::Cancelled);
    }
}
