//! Adapters between ordinary fallible code and the outcome world.
//!
//! [`try_catch`] is the single sanctioned boundary where `Result`-returning
//! code enters the model; everything else in the crate is total. The JSON and
//! schema helpers ([`stringify`], [`parse`], [`parse_schema`]) all route
//! through it, as does the error aggregator [`flatten_errors`].

use core::fmt::Display;

use serde::de::DeserializeOwned;
use serde_json::Value;
use smallvec::SmallVec;

use crate::kind::ErrorKind;
use crate::logging::ErrorLog;
use crate::outcome::Outcome;
use crate::wire::WireOutcome;

/// Message used when a `try_catch` caller does not supply one.
pub const DEFAULT_ERROR_MESSAGE: &str = "Unexpected error";

/// Separator between aggregated error messages in [`flatten_errors`].
pub const MESSAGE_SEPARATOR: &str = "; ";

/// Placeholder recorded when an aggregated error carries no diagnostic.
pub const MISSING_DIAGNOSTIC: &str = "<no diagnostic>";

fn caught_error<T>(message: &str, kind: ErrorKind, cause: impl Display) -> WireOutcome<T> {
    WireOutcome::Error {
        error_type: kind,
        message: message.to_string(),
        diagnostic: Some(cause.to_string()),
        request_id: None,
    }
}

/// Runs a fallible operation, converting its outcome into the wire form.
///
/// `Ok` becomes a success; `Err` becomes an `unexpected` error whose message
/// is [`DEFAULT_ERROR_MESSAGE`] and whose diagnostic is the error's
/// rendering. This never panics and never lets the inner error escape.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::try_catch;
///
/// let ok = try_catch(|| "7".parse::<i32>());
/// assert_eq!(ok.into_data(), Some(7));
///
/// let err = try_catch(|| "x".parse::<i32>());
/// assert!(err.is_error());
/// ```
pub fn try_catch<T, E, F>(f: F) -> WireOutcome<T>
where
    E: Display,
    F: FnOnce() -> Result<T, E>,
{
    try_catch_kind(f, DEFAULT_ERROR_MESSAGE, ErrorKind::Unexpected)
}

/// [`try_catch`] with a caller-supplied failure message.
pub fn try_catch_with<T, E, F>(f: F, message: &str) -> WireOutcome<T>
where
    E: Display,
    F: FnOnce() -> Result<T, E>,
{
    try_catch_kind(f, message, ErrorKind::Unexpected)
}

/// [`try_catch`] with both the message and the error kind overridden.
pub fn try_catch_kind<T, E, F>(f: F, message: &str, kind: ErrorKind) -> WireOutcome<T>
where
    E: Display,
    F: FnOnce() -> Result<T, E>,
{
    match f() {
        Ok(data) => WireOutcome::success(data),
        Err(cause) => caught_error(message, kind, cause),
    }
}

/// Async [`try_catch`]: awaits the operation's future, then converts.
///
/// Suspension happens only while awaiting `f`'s future; the conversion itself
/// never suspends.
///
/// # Examples
///
/// ```
/// # #[tokio::main(flavor = "current_thread")] async fn main() {
/// use outcome_rail::convert::try_catch_async;
///
/// let outcome = try_catch_async(|| async { "7".parse::<i32>() }).await;
/// assert_eq!(outcome.into_data(), Some(7));
/// # }
/// ```
#[cfg(feature = "async")]
pub async fn try_catch_async<T, E, F, Fut>(f: F) -> WireOutcome<T>
where
    E: Display,
    F: FnOnce() -> Fut,
    Fut: core::future::Future<Output = Result<T, E>>,
{
    try_catch_async_with(f, DEFAULT_ERROR_MESSAGE).await
}

/// [`try_catch_async`] with a caller-supplied failure message.
#[cfg(feature = "async")]
pub async fn try_catch_async_with<T, E, F, Fut>(f: F, message: &str) -> WireOutcome<T>
where
    E: Display,
    F: FnOnce() -> Fut,
    Fut: core::future::Future<Output = Result<T, E>>,
{
    match f().await {
        Ok(data) => WireOutcome::success(data),
        Err(cause) => caught_error(message, ErrorKind::Unexpected, cause),
    }
}

/// External validator contract: turn an untyped JSON value into a typed one,
/// or fail.
///
/// The crate treats the validator as a black box; only "returned" versus
/// "failed" is distinguished, and the failure's rendering survives solely as
/// the diagnostic string.
pub trait Schema {
    /// The validated, typed output.
    type Output;
    /// The validator's error type.
    type Error: Display;

    /// Validates `value`, producing the typed output or an error.
    fn validate(&self, value: Value) -> Result<Self::Output, Self::Error>;
}

/// Schema backed by serde deserialization into `T`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::{Schema, SerdeSchema};
/// use serde_json::json;
///
/// let schema = SerdeSchema::<Vec<i32>>::new();
/// assert_eq!(schema.validate(json!([1, 2])).unwrap(), vec![1, 2]);
/// ```
#[derive(Debug, Default)]
pub struct SerdeSchema<T> {
    _marker: core::marker::PhantomData<fn() -> T>,
}

impl<T> SerdeSchema<T> {
    /// Creates the schema marker.
    #[must_use]
    pub fn new() -> Self {
        Self { _marker: core::marker::PhantomData }
    }
}

impl<T: DeserializeOwned> Schema for SerdeSchema<T> {
    type Output = T;
    type Error = serde_json::Error;

    fn validate(&self, value: Value) -> Result<T, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// Validates a JSON value against a schema, producing a wire outcome.
///
/// A validation failure becomes a `user-validation` error carrying `message`
/// (or a derived default); the raw validator error is preserved only as the
/// diagnostic, never as structured data.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::{parse_schema, SerdeSchema};
/// use outcome_rail::ErrorKind;
/// use serde_json::json;
///
/// let schema = SerdeSchema::<u32>::new();
/// let bad = parse_schema(json!("not a number"), &schema, Some("invalid id"));
/// assert_eq!(bad.error_kind(), Some(ErrorKind::UserValidation));
/// assert_eq!(bad.message(), Some("invalid id"));
/// ```
pub fn parse_schema<S: Schema>(
    value: Value,
    schema: &S,
    message: Option<&str>,
) -> WireOutcome<S::Output> {
    let message = message.unwrap_or("Schema validation failed");
    try_catch_kind(|| schema.validate(value), message, ErrorKind::UserValidation)
}

/// JSON-encodes a value, wrapping the attempt in [`try_catch`].
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::stringify;
///
/// let outcome = stringify(&vec![1, 2, 3]);
/// assert_eq!(outcome.into_data().as_deref(), Some("[1,2,3]"));
/// ```
pub fn stringify<T: serde::Serialize>(data: &T) -> WireOutcome<String> {
    try_catch_with(|| serde_json::to_string(data), "Failed to encode value as JSON")
}

/// JSON-decodes a string, wrapping the attempt in [`try_catch`].
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::parse;
///
/// assert!(parse(r#"{"a":1}"#).is_success());
/// assert!(parse("{oops").is_error());
/// ```
pub fn parse(text: &str) -> WireOutcome<Value> {
    try_catch_with(|| serde_json::from_str(text), "Failed to parse JSON")
}

/// Collapses a sequence of wire outcomes into one.
///
/// If every input is a success, returns a success holding each `data` in
/// input order. If any input is an error, returns a single error joining
/// every failing message with [`MESSAGE_SEPARATOR`] and every failing
/// diagnostic (or [`MISSING_DIAGNOSTIC`]) with newlines; the aggregate keeps
/// the first failing result's kind so status-code mapping stays meaningful.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::flatten_errors;
/// use outcome_rail::WireOutcome;
///
/// let merged = flatten_errors(vec![WireOutcome::success(1), WireOutcome::success(2)]);
/// assert_eq!(merged.into_data(), Some(vec![1, 2]));
///
/// let failed = flatten_errors(vec![
///     WireOutcome::success(1),
///     WireOutcome::error("a"),
///     WireOutcome::error("b"),
/// ]);
/// assert_eq!(failed.message(), Some("a; b"));
/// ```
pub fn flatten_errors<T, I>(results: I) -> WireOutcome<Vec<T>>
where
    I: IntoIterator<Item = WireOutcome<T>>,
{
    let mut data = Vec::new();
    let mut messages: SmallVec<[String; 4]> = SmallVec::new();
    let mut diagnostics: SmallVec<[String; 4]> = SmallVec::new();
    let mut first_kind = None;

    for result in results {
        match result {
            WireOutcome::Success { data: value, .. } => data.push(value),
            WireOutcome::Error { error_type, message, diagnostic, .. } => {
                first_kind.get_or_insert(error_type);
                messages.push(message);
                diagnostics.push(diagnostic.unwrap_or_else(|| MISSING_DIAGNOSTIC.to_string()));
            }
        }
    }

    match first_kind {
        None => WireOutcome::success(data),
        Some(kind) => WireOutcome::Error {
            error_type: kind,
            message: messages.join(MESSAGE_SEPARATOR),
            diagnostic: Some(diagnostics.join("\n")),
            request_id: None,
        },
    }
}

/// Rehydrates a transport form into a combinator-bearing [`Outcome`].
///
/// Alias for [`Outcome::from_wire`], mirroring the adapter naming of the rest
/// of this module.
#[inline]
pub fn deserialize_outcome<T>(wire: WireOutcome<T>) -> Outcome<T> {
    Outcome::from_wire(wire)
}

/// Returns the success data or a default, discarding (and logging) any error.
///
/// `None` behaves like an error: the default is returned. This is the one
/// function in the crate with a side effect; the discarded error is reported
/// through the default log sink before being dropped.
#[deprecated(note = "prefer `fold` or pattern matching; this silently discards errors")]
#[inline]
pub fn unwrap_or<T>(result: Option<Outcome<T>>, default: T) -> T {
    unwrap_or_with(result, default, &default_log())
}

/// [`unwrap_or`] with an injected log sink, for callers that need to observe
/// or silence the discard.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::unwrap_or_with;
/// use outcome_rail::logging::NoopLog;
/// use outcome_rail::Outcome;
///
/// assert_eq!(unwrap_or_with(Some(Outcome::success(7)), 42, &NoopLog), 7);
/// assert_eq!(unwrap_or_with(Some(Outcome::error("x")), 42, &NoopLog), 42);
/// assert_eq!(unwrap_or_with(None, 42, &NoopLog), 42);
/// ```
pub fn unwrap_or_with<T>(result: Option<Outcome<T>>, default: T, log: &dyn ErrorLog) -> T {
    match result {
        Some(Outcome::Success(s)) => s.data,
        Some(Outcome::Error(e)) => {
            log.log(&e.message, e.diagnostic.as_deref());
            default
        }
        None => default,
    }
}

#[cfg(feature = "tracing")]
fn default_log() -> crate::logging::TracingLog {
    crate::logging::TracingLog
}

#[cfg(not(feature = "tracing"))]
fn default_log() -> crate::logging::NoopLog {
    crate::logging::NoopLog
}
