//! In-process outcome type with the fluent combinator API.
//!
//! [`Outcome`] is the behavior-carrying twin of [`WireOutcome`]: the same
//! success-or-classified-error union, enriched with `map`, `flat_map`,
//! `catch` and `fold`. It never crosses a process boundary directly —
//! [`Outcome::serialize`] detaches the behavior and hands back the plain wire
//! form.
//!
//! Every value is immutable after construction; combinators consume `self`
//! and return a fresh outcome. An error forwarded through a chain keeps its
//! message, kind, diagnostic and request id unchanged.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let total = Outcome::success(20)
//!     .map(|n| n + 1)
//!     .flat_map(|n| if n > 0 { Outcome::success(n * 2) } else { Outcome::error("negative") })
//!     .fold(|n| n, |_| 0);
//!
//! assert_eq!(total, 42);
//! ```

use crate::diagnostic::{BacktraceCapture, DiagnosticCapture, NoCapture};
use crate::kind::ErrorKind;
use crate::wire::WireOutcome;

/// Payload of a successful [`Outcome`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessOutcome<T> {
    /// The success value.
    pub data: T,
    /// Optional human-readable note.
    pub message: Option<String>,
    /// Opaque caller-set correlation id.
    pub request_id: Option<String>,
}

/// Payload of a failed [`Outcome`].
///
/// Carries no `T`, so propagating an error through a chain retags the type
/// parameter without touching the error itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorOutcome {
    /// Why the operation failed.
    pub kind: ErrorKind,
    /// Human-readable failure description.
    pub message: String,
    /// Optional trace or cause string, informational only.
    pub diagnostic: Option<String>,
    /// Opaque caller-set correlation id.
    pub request_id: Option<String>,
}

impl ErrorOutcome {
    /// Converts this error into an [`Outcome`] of any success type.
    #[must_use]
    #[inline]
    pub fn into_outcome<T>(self) -> Outcome<T> {
        Outcome::Error(self)
    }

    /// Returns the fixed transport status code for this error's kind.
    #[must_use]
    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }
}

/// The outcome of one operation: a typed success value or a classified error.
///
/// Construct with the producers ([`success`](Outcome::success),
/// [`error`](Outcome::error) and its specializations), chain with the
/// combinators, and unwrap with [`fold`](Outcome::fold). Obtain the transport
/// form only through [`serialize`](Outcome::serialize) or
/// [`into_wire`](Outcome::into_wire).
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The operation produced a value.
    Success(SuccessOutcome<T>),
    /// The operation failed.
    Error(ErrorOutcome),
}

impl<T> Outcome<T> {
    /// Wraps a value as a successful outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::success(7);
    /// assert_eq!(outcome.data(), Some(&7));
    /// ```
    #[inline]
    pub fn success(data: T) -> Self {
        Self::Success(SuccessOutcome { data, message: None, request_id: None })
    }

    /// Wraps a value as a successful outcome with an accompanying note.
    #[inline]
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self::Success(SuccessOutcome { data, message: Some(message.into()), request_id: None })
    }

    /// Creates an error outcome with the default kind and an auto-captured
    /// backtrace diagnostic.
    ///
    /// Construction itself never fails. The outcome is parameterized over the
    /// caller's intended success type without ever holding one.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ErrorKind, Outcome};
    ///
    /// let outcome: Outcome<String> = Outcome::error("database unreachable");
    /// assert_eq!(outcome.error_ref().map(|e| e.kind), Some(ErrorKind::Unexpected));
    /// ```
    #[inline]
    pub fn error(message: impl Into<String>) -> Self {
        Self::error_with_capture(message, ErrorKind::Unexpected, &BacktraceCapture)
    }

    /// Creates an error outcome with an explicit kind and an auto-captured
    /// backtrace diagnostic.
    #[inline]
    pub fn error_kind(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self::error_with_capture(message, kind, &BacktraceCapture)
    }

    /// Creates an error outcome whose diagnostic is the rendering of an
    /// explicit cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let cause = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    /// let outcome: Outcome<()> = Outcome::error_with_cause("write failed", &cause);
    /// assert_eq!(outcome.error_ref().and_then(|e| e.diagnostic.as_deref()), Some("disk full"));
    /// ```
    #[inline]
    pub fn error_with_cause(message: impl Into<String>, cause: impl core::fmt::Display) -> Self {
        Self::error_kind_with_cause(message, ErrorKind::Unexpected, cause)
    }

    /// Creates an error outcome with both an explicit kind and an explicit
    /// cause.
    ///
    /// The fully general producer: [`error_with_cause`](Outcome::error_with_cause)
    /// is this with the default kind, as [`error_kind`](Outcome::error_kind)
    /// is [`error`](Outcome::error) with an explicit one.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ErrorKind, Outcome};
    ///
    /// let outcome: Outcome<()> =
    ///     Outcome::error_kind_with_cause("token rejected", ErrorKind::Unauthorized, "expired");
    /// let err = outcome.error_ref().unwrap();
    /// assert_eq!(err.kind, ErrorKind::Unauthorized);
    /// assert_eq!(err.diagnostic.as_deref(), Some("expired"));
    /// ```
    #[inline]
    pub fn error_kind_with_cause(
        message: impl Into<String>,
        kind: ErrorKind,
        cause: impl core::fmt::Display,
    ) -> Self {
        Self::Error(ErrorOutcome {
            kind,
            message: message.into(),
            diagnostic: Some(cause.to_string()),
            request_id: None,
        })
    }

    /// Creates an error outcome with an injected diagnostic-capture
    /// capability.
    ///
    /// This is the fully explicit form the other error producers delegate to;
    /// pass [`NoCapture`] for deterministic outcomes in tests.
    #[inline]
    pub fn error_with_capture(
        message: impl Into<String>,
        kind: ErrorKind,
        capture: &dyn DiagnosticCapture,
    ) -> Self {
        Self::Error(ErrorOutcome {
            kind,
            message: message.into(),
            diagnostic: capture.capture(),
            request_id: None,
        })
    }

    /// Creates a `user-validation` error for invalid caller input.
    ///
    /// With `cause: None` the diagnostic is left empty rather than capturing
    /// a backtrace; validation failures describe the input, not the stack.
    #[inline]
    pub fn user_validation_error(
        message: impl Into<String>,
        cause: Option<&dyn core::fmt::Display>,
    ) -> Self {
        Self::Error(ErrorOutcome {
            kind: ErrorKind::UserValidation,
            message: message.into(),
            diagnostic: cause.map(ToString::to_string),
            request_id: None,
        })
    }

    /// Creates the fixed `unauthorized` error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<()> = Outcome::unauthorized();
    /// assert_eq!(outcome.error_ref().map(|e| e.message.as_str()), Some("Unauthorized"));
    /// ```
    #[inline]
    pub fn unauthorized() -> Self {
        Self::error_with_capture("Unauthorized", ErrorKind::Unauthorized, &NoCapture)
    }

    /// Creates a `not-found` error for a missing subject.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<()> = Outcome::not_found("user");
    /// assert_eq!(outcome.error_ref().map(|e| e.message.as_str()), Some("user not found"));
    /// ```
    #[inline]
    pub fn not_found(subject: impl core::fmt::Display) -> Self {
        Self::error_with_capture(format!("{subject} not found"), ErrorKind::NotFound, &NoCapture)
    }

    /// Sets or replaces the human-readable note on a success; errors keep
    /// their message.
    #[inline]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        if let Self::Success(s) = &mut self {
            s.message = Some(message.into());
        }
        self
    }

    /// Sets the opaque correlation id on either variant.
    #[inline]
    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        match &mut self {
            Self::Success(s) => s.request_id = Some(id.into()),
            Self::Error(e) => e.request_id = Some(id.into()),
        }
        self
    }

    /// Returns `true` for the success variant.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for the error variant.
    #[must_use]
    #[inline]
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// Returns the success value, if any.
    #[must_use]
    #[inline]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(s) => Some(&s.data),
            Self::Error(_) => None,
        }
    }

    /// Consumes the outcome, returning the success value if any.
    #[must_use]
    #[inline]
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success(s) => Some(s.data),
            Self::Error(_) => None,
        }
    }

    /// Returns the error payload, if any.
    ///
    /// Named `error_ref` because `error` is the producer; see
    /// [`into_error`](Outcome::into_error) for the consuming form.
    #[must_use]
    #[inline]
    pub fn error_ref(&self) -> Option<&ErrorOutcome> {
        match self {
            Self::Success(_) => None,
            Self::Error(e) => Some(e),
        }
    }

    /// Consumes the outcome, returning the error payload if any.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<ErrorOutcome> {
        match self {
            Self::Success(_) => None,
            Self::Error(e) => Some(e),
        }
    }

    /// Returns the caller-set correlation id, if any.
    #[must_use]
    #[inline]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Success(s) => s.request_id.as_deref(),
            Self::Error(e) => e.request_id.as_deref(),
        }
    }

    /// Transforms the success value, forwarding any error unchanged.
    ///
    /// The success message and request id carry over to the new outcome. `f`
    /// is infallible by contract: a panic inside it is not caught here — wrap
    /// fallible transforms with [`try_catch`](crate::convert::try_catch) or
    /// chain with [`flat_map`](Outcome::flat_map) instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let doubled = Outcome::success(21).map(|n| n * 2);
    /// assert_eq!(doubled.into_data(), Some(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(s) => Outcome::Success(SuccessOutcome {
                data: f(s.data),
                message: s.message,
                request_id: s.request_id,
            }),
            Self::Error(e) => Outcome::Error(e),
        }
    }

    /// Chains a dependent operation, short-circuiting on error.
    ///
    /// On success the returned outcome is exactly what `f` produced; on error
    /// `f` is never invoked and the original error — kind included — is
    /// forwarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn parse(s: &str) -> Outcome<i32> {
    ///     match s.parse() {
    ///         Ok(n) => Outcome::success(n),
    ///         Err(_) => Outcome::user_validation_error("not a number", None),
    ///     }
    /// }
    ///
    /// let outcome = Outcome::success("17").flat_map(parse);
    /// assert_eq!(outcome.into_data(), Some(17));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(s) => f(s.data),
            Self::Error(e) => Outcome::Error(e),
        }
    }

    /// Recovers from an error, passing successes through untouched.
    ///
    /// On error, `f` receives the full [`ErrorOutcome`] and may return a new
    /// success or a transformed error. On success, `f` is never invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let recovered = Outcome::<i32>::not_found("row").catch(|_| Outcome::success(0));
    /// assert_eq!(recovered.into_data(), Some(0));
    /// ```
    #[inline]
    pub fn catch<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(ErrorOutcome) -> Outcome<T>,
    {
        match self {
            Self::Success(s) => Self::Success(s),
            Self::Error(e) => f(e),
        }
    }

    /// Terminal unwrap: runs exactly one of the two branches.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let code = Outcome::<()>::unauthorized().fold(|_| 200, |e| e.status_code());
    /// assert_eq!(code, 401);
    /// ```
    #[inline]
    pub fn fold<U, S, E>(self, on_success: S, on_error: E) -> U
    where
        S: FnOnce(T) -> U,
        E: FnOnce(ErrorOutcome) -> U,
    {
        match self {
            Self::Success(s) => on_success(s.data),
            Self::Error(e) => on_error(e),
        }
    }

    /// Detaches the combinators, returning a structural copy of the
    /// underlying data as the transport form.
    ///
    /// The copy is independent: mutating it cannot affect this outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, WireOutcome};
    ///
    /// let outcome = Outcome::success(5);
    /// assert_eq!(outcome.serialize(), WireOutcome::success(5));
    /// ```
    pub fn serialize(&self) -> WireOutcome<T>
    where
        T: Clone,
    {
        self.clone().into_wire()
    }

    /// Consuming form of [`serialize`](Outcome::serialize).
    pub fn into_wire(self) -> WireOutcome<T> {
        match self {
            Self::Success(s) => WireOutcome::Success {
                data: s.data,
                message: s.message,
                request_id: s.request_id,
            },
            Self::Error(e) => WireOutcome::Error {
                error_type: e.kind,
                message: e.message,
                diagnostic: e.diagnostic,
                request_id: e.request_id,
            },
        }
    }

    /// Rehydrates a transport form into a combinator-bearing outcome,
    /// preserving every field exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, WireOutcome};
    ///
    /// let wire = WireOutcome::success(9).with_request_id("r-7");
    /// let outcome = Outcome::from_wire(wire);
    /// assert_eq!(outcome.request_id(), Some("r-7"));
    /// ```
    pub fn from_wire(wire: WireOutcome<T>) -> Self {
        match wire {
            WireOutcome::Success { data, message, request_id } => {
                Self::Success(SuccessOutcome { data, message, request_id })
            }
            WireOutcome::Error { error_type, message, diagnostic, request_id } => {
                Self::Error(ErrorOutcome { kind: error_type, message, diagnostic, request_id })
            }
        }
    }
}

impl<T> From<WireOutcome<T>> for Outcome<T> {
    #[inline]
    fn from(wire: WireOutcome<T>) -> Self {
        Self::from_wire(wire)
    }
}

impl<T> From<Outcome<T>> for WireOutcome<T> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_wire()
    }
}
