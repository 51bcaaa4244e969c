//! Async combinators for [`Outcome`] (requires the `async` feature).
//!
//! These mirror [`map`](Outcome::map) and [`flat_map`](Outcome::flat_map)
//! with one rule added: the await happens only on the success branch. An
//! already-failed outcome short-circuits without suspending, so error
//! propagation stays synchronous even in async chains.
//!
//! The crate exposes no cancellation or timeout of its own; an in-flight
//! transform is governed entirely by the caller-supplied future.

use core::future::Future;

use crate::outcome::{Outcome, SuccessOutcome};

impl<T> Outcome<T> {
    /// Awaits an asynchronous transform of the success value.
    ///
    /// On error the original error — kind included — is forwarded without
    /// ever constructing or awaiting the transform's future.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[tokio::main(flavor = "current_thread")] async fn main() {
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::success(21).map_async(|n| async move { n * 2 }).await;
    /// assert_eq!(outcome.into_data(), Some(42));
    /// # }
    /// ```
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Success(s) => Outcome::Success(SuccessOutcome {
                data: f(s.data).await,
                message: s.message,
                request_id: s.request_id,
            }),
            Self::Error(e) => Outcome::Error(e),
        }
    }

    /// Awaits an asynchronous dependent operation, short-circuiting on error.
    ///
    /// The async analogue of [`flat_map`](Outcome::flat_map): on success the
    /// returned outcome is exactly what `f`'s future resolved to; on error
    /// `f` is never invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[tokio::main(flavor = "current_thread")] async fn main() {
    /// use outcome_rail::Outcome;
    ///
    /// async fn lookup(id: u32) -> Outcome<String> {
    ///     if id == 0 { Outcome::not_found("user") } else { Outcome::success(format!("user-{id}")) }
    /// }
    ///
    /// let outcome = Outcome::success(3).flat_map_async(lookup).await;
    /// assert_eq!(outcome.into_data().as_deref(), Some("user-3"));
    /// # }
    /// ```
    pub async fn flat_map_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self {
            Self::Success(s) => f(s.data).await,
            Self::Error(e) => Outcome::Error(e),
        }
    }
}
