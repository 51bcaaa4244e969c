//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn lookup(id: u32) -> Outcome<String> {
//!     if id == 0 {
//!         Outcome::not_found("account")
//!     } else {
//!         Outcome::success(format!("account-{id}"))
//!     }
//! }
//!
//! let wire: WireOutcome<String> = lookup(0).into_wire();
//! assert_eq!(wire.error_kind(), Some(ErrorKind::NotFound));
//! ```

pub use crate::convert::{
    deserialize_outcome, flatten_errors, parse, parse_schema, stringify, try_catch,
    try_catch_kind, try_catch_with, Schema, SerdeSchema,
};
pub use crate::diagnostic::{BacktraceCapture, DiagnosticCapture, NoCapture};
pub use crate::kind::ErrorKind;
pub use crate::logging::{ErrorLog, NoopLog};
pub use crate::outcome::{ErrorOutcome, Outcome, SuccessOutcome};
pub use crate::wire::WireOutcome;

#[cfg(feature = "async")]
pub use crate::convert::{try_catch_async, try_catch_async_with};
