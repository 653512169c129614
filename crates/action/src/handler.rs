//! Business-logic handlers.
//!
//! A [`Handler`] only ever sees input that a schema has already accepted.
//! Async closures returning `Result<T, E>` with `E: Into<HandlerError>` are
//! handlers through a blanket impl, so most call sites never name the trait.

use std::future::Future;

use crate::error::HandlerError;

/// Async business logic invoked with validated input.
///
/// # Examples
///
/// ```rust,ignore
/// use safe_action::{Handler, HandlerError};
///
/// struct Rename { store: UserStore }
///
/// impl Handler<UpdateUser> for Rename {
///     type Output = Renamed;
///
///     fn handle(
///         &self,
///         input: UpdateUser,
///     ) -> impl Future<Output = Result<Renamed, HandlerError>> + Send {
///         let store = self.store.clone();
///         async move {
///             store.rename(&input.id, &input.name).await?;
///             Ok(Renamed { updated_name: input.name })
///         }
///     }
/// }
/// ```
pub trait Handler<I>: Send + Sync {
    /// Value produced on success.
    type Output: Send;

    /// Runs the business logic.
    fn handle(&self, input: I) -> impl Future<Output = Result<Self::Output, HandlerError>> + Send;
}

impl<I, F, Fut, T, E> Handler<I> for F
where
    F: Fn(I) -> Fut + Send + Sync,
    Fut: Future<Output = Result<T, E>> + Send,
    T: Send,
    E: Into<HandlerError>,
{
    type Output = T;

    fn handle(&self, input: I) -> impl Future<Output = Result<T, HandlerError>> + Send {
        let fut = self(input);
        async move { fut.await.map_err(Into::into) }
    }
}
