//! Success-or-classified-error outcomes with a fluent combinator API and a
//! serialization-safe transport twin.
//!
//! Two layers compose:
//!
//! - [`WireOutcome<T>`] — a plain tagged union with no behavior, the form
//!   that crosses a process or network boundary (JSON-encoded API responses).
//! - [`Outcome<T>`] — the same data enriched with `map` / `flat_map` /
//!   `catch` / `fold`, used only within one process for ergonomic chaining.
//!
//! Producers build an [`Outcome`]; combinators transform it without ever
//! materializing an intermediate panic or exception;
//! [`serialize`](Outcome::serialize) strips the behavior down to the wire
//! form and [`Outcome::from_wire`] attaches it again. The adapters in
//! [`convert`] bridge ordinary fallible code into the model.
//!
//! # Examples
//!
//! ## Chaining
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn half(n: i32) -> Outcome<i32> {
//!     if n % 2 == 0 {
//!         Outcome::success(n / 2)
//!     } else {
//!         Outcome::user_validation_error("odd input", None)
//!     }
//! }
//!
//! let outcome = Outcome::success(84).flat_map(half).map(|n| n.to_string());
//! assert_eq!(outcome.into_data().as_deref(), Some("42"));
//! ```
//!
//! ## Crossing a boundary
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let wire = Outcome::<u32>::not_found("order").with_request_id("req-9").into_wire();
//! let json = serde_json::to_string(&wire).unwrap();
//! assert!(json.contains(r#""errorType":"not-found""#));
//!
//! let back: outcome_rail::WireOutcome<u32> = serde_json::from_str(&json).unwrap();
//! let status = Outcome::from_wire(back).fold(|_| 200, |e| e.status_code());
//! assert_eq!(status, 404);
//! ```
//!
//! ## Wrapping fallible code
//!
//! ```
//! use outcome_rail::convert::try_catch_with;
//!
//! let outcome = try_catch_with(|| "not a number".parse::<i32>(), "bad input");
//! assert_eq!(outcome.message(), Some("bad input"));
//! ```

/// Adapters bridging fallible code, JSON, and schema validation into outcomes
pub mod convert;
/// Injected diagnostic-capture capability for error construction
pub mod diagnostic;
/// Error taxonomy and the fixed status-code mapping
pub mod kind;
/// Logging seam used when an error is deliberately discarded
pub mod logging;
/// The in-process combinator-bearing outcome type
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The transport-safe plain-data outcome form
pub mod wire;

/// Async combinators for outcomes (requires the `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

pub use kind::ErrorKind;
pub use outcome::{ErrorOutcome, Outcome, SuccessOutcome};
pub use wire::WireOutcome;
