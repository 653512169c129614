//! The action wrapper.
//!
//! [`SafeAction`] composes a schema and a handler into one callable that
//! always produces an [`ActionResponse`]. Validation failures, handler
//! errors and handler panics are all absorbed into the response; nothing
//! propagates to the caller as an error or an unwind.

use std::borrow::Cow;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use futures::FutureExt;
use futures::future::BoxFuture;
use safe_action_schema::{AsyncSchema, FieldErrors, ROOT_FIELD};
use serde::Serialize;
use serde_json::Value;
use tracing::Instrument;

use crate::config::ActionConfig;
use crate::error::HandlerError;
use crate::handler::Handler;
use crate::response::ActionResponse;

/// A schema and a handler composed into one validated, panic-free action.
///
/// Stateless and reentrant: concurrent invocations share nothing but the
/// schema and handler they borrow.
#[derive(Clone)]
pub struct SafeAction<S, H> {
    schema: S,
    handler: H,
    config: ActionConfig,
    name: Option<Cow<'static, str>>,
}

/// Builds a safe action with [`ActionConfig::default`].
///
/// # Examples
///
/// ```rust,ignore
/// let update_user = create_action(
///     SerdeSchema::<UpdateUser>::new().refine(
///         "name",
///         |u| u.name.chars().count() >= 3,
///         "Name should be at least 3 characters long",
///     ),
///     |user: UpdateUser| async move {
///         Ok::<_, HandlerError>(json!({ "success": true, "updatedName": user.name }))
///     },
/// );
///
/// let response = update_user.invoke(json!({ "id": "1", "name": "Al" })).await;
/// assert!(response.is_invalid());
/// ```
pub fn create_action<S, H>(schema: S, handler: H) -> SafeAction<S, H>
where
    S: AsyncSchema,
    H: Handler<S::Output>,
{
    create_action_with(schema, handler, ActionConfig::default())
}

/// Builds a safe action with an explicit configuration.
pub fn create_action_with<S, H>(schema: S, handler: H, config: ActionConfig) -> SafeAction<S, H>
where
    S: AsyncSchema,
    H: Handler<S::Output>,
{
    SafeAction {
        schema,
        handler,
        config,
        name: None,
    }
}

impl<S, H> SafeAction<S, H>
where
    S: AsyncSchema,
    H: Handler<S::Output>,
{
    /// Names the action; the name is recorded on every log line it emits.
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: ActionConfig) -> Self {
        self.config = config;
        self
    }

    /// The action's name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The active configuration.
    pub fn config(&self) -> &ActionConfig {
        &self.config
    }

    /// The wrapped schema.
    pub fn schema(&self) -> &S {
        &self.schema
    }

    /// The wrapped handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Validates `raw` and, if it is accepted, runs the handler.
    ///
    /// Never fails and never panics through: every outcome is a response.
    pub async fn invoke(&self, raw: Value) -> ActionResponse<H::Output> {
        self.run(raw).instrument(self.span()).await
    }

    /// Serializes `input` to raw JSON and invokes the action with it.
    ///
    /// Input that cannot be represented as JSON is reported as invalid
    /// under [`ROOT_FIELD`].
    pub async fn invoke_with<R>(&self, input: &R) -> ActionResponse<H::Output>
    where
        R: Serialize + ?Sized,
    {
        match serde_json::to_value(input) {
            Ok(raw) => self.invoke(raw).await,
            Err(e) => self.span().in_scope(|| {
                let start = Instant::now();
                tracing::debug!(error = %e, "input could not be converted to JSON");
                self.reject(FieldErrors::single(ROOT_FIELD, e.to_string()), start)
            }),
        }
    }

    /// Turns the action into a cloneable `Fn(Value) -> Future` callable.
    pub fn into_fn(
        self,
    ) -> impl Fn(Value) -> BoxFuture<'static, ActionResponse<H::Output>> + Clone + Send + Sync
    where
        S: 'static,
        H: 'static,
    {
        let action = Arc::new(self);
        move |raw| {
            let action = Arc::clone(&action);
            async move { action.invoke(raw).await }.boxed()
        }
    }

    fn span(&self) -> tracing::Span {
        tracing::info_span!(
            "action",
            action = self.name.as_deref().unwrap_or("anonymous")
        )
    }

    async fn run(&self, raw: Value) -> ActionResponse<H::Output> {
        let start = Instant::now();

        let input = match self.schema.safe_parse_async(&raw).await {
            Ok(input) => input,
            Err(error) => {
                let errors = self.schema.flatten_errors(&error);
                tracing::debug!(fields = errors.len(), "input rejected by schema");
                return self.reject(errors, start);
            }
        };

        match AssertUnwindSafe(self.handler.handle(input)).catch_unwind().await {
            Ok(Ok(data)) => {
                let response = self.stamp(ActionResponse::succeeded(data), start);
                if self.config.logs_success_timing() {
                    let duration_ms = response.duration().unwrap_or_default().as_millis() as u64;
                    tracing::info!(duration_ms, "[ACTION LOG]: Success in {duration_ms}ms");
                }
                response
            }
            Ok(Err(error)) => self.fail(&error, start),
            Err(payload) => self.fail(&HandlerError::from_panic(payload), start),
        }
    }

    fn reject(&self, errors: FieldErrors, start: Instant) -> ActionResponse<H::Output> {
        self.stamp(ActionResponse::invalid(errors), start)
    }

    fn fail(&self, error: &HandlerError, start: Instant) -> ActionResponse<H::Output> {
        tracing::error!(
            error = %error,
            standard = error.is_standard(),
            "[ACTION_ERROR]: {error}"
        );
        self.stamp(ActionResponse::failed(error.response_message()), start)
    }

    fn stamp(
        &self,
        response: ActionResponse<H::Output>,
        start: Instant,
    ) -> ActionResponse<H::Output> {
        if self.config.track_duration {
            response.with_duration(start.elapsed())
        } else {
            response
        }
    }
}

impl<S, H> fmt::Debug for SafeAction<S, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SafeAction")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("schema", &std::any::type_name::<S>())
            .field("handler", &std::any::type_name::<H>())
            .finish()
    }
}
