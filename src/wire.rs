//! Transport-safe outcome form.
//!
//! [`WireOutcome`] is the plain-data twin of [`Outcome`](crate::Outcome): a
//! tagged union with no behavior, safe to encode to JSON and send across a
//! process or network boundary. The enum shape makes the central invariant
//! unrepresentable to violate — a success can never carry error fields and an
//! error can never carry `data`.
//!
//! # Wire schema
//!
//! ```json
//! { "status": "success", "data": 7, "message": "created", "requestId": "r-1" }
//! { "status": "error", "errorType": "not-found", "message": "user not found",
//!   "diagnostic": "...", "requestId": "r-1" }
//! ```
//!
//! Optional fields are omitted entirely when absent.

use serde::{Deserialize, Serialize};

use crate::kind::ErrorKind;

/// Plain, transport-safe tagged union of a success value or a classified error.
///
/// No combinators live here; attach behavior with
/// [`Outcome::from_wire`](crate::Outcome::from_wire) and detach it again with
/// [`Outcome::serialize`](crate::Outcome::serialize).
///
/// # Examples
///
/// ```
/// use outcome_rail::WireOutcome;
///
/// let wire = WireOutcome::success(42);
/// let json = serde_json::to_string(&wire).unwrap();
/// assert_eq!(json, r#"{"status":"success","data":42}"#);
/// ```
#[must_use]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WireOutcome<T> {
    /// The operation produced a value.
    Success {
        /// The success payload, owned by the outcome.
        data: T,
        /// Optional human-readable note accompanying the success.
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        /// Opaque correlation id set by the caller, passed through untouched.
        #[serde(rename = "requestId", skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
    },
    /// The operation failed with a classified error.
    Error {
        /// Why the operation failed.
        #[serde(rename = "errorType")]
        error_type: ErrorKind,
        /// Human-readable failure description.
        message: String,
        /// Optional trace or wrapped-cause string. Informational only, never
        /// parsed.
        #[serde(skip_serializing_if = "Option::is_none")]
        diagnostic: Option<String>,
        /// Opaque correlation id set by the caller, passed through untouched.
        #[serde(rename = "requestId", skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
    },
}

impl<T> WireOutcome<T> {
    /// Creates a bare success wire form.
    #[inline]
    pub fn success(data: T) -> Self {
        Self::Success { data, message: None, request_id: None }
    }

    /// Creates an error wire form with the default kind.
    #[inline]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error_type: ErrorKind::Unexpected,
            message: message.into(),
            diagnostic: None,
            request_id: None,
        }
    }

    /// Returns `true` for the success variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::WireOutcome;
    ///
    /// assert!(WireOutcome::success(1).is_success());
    /// assert!(!WireOutcome::<i32>::error("boom").is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns `true` for the error variant.
    #[must_use]
    #[inline]
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// Returns the success payload, if any.
    #[must_use]
    #[inline]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Error { .. } => None,
        }
    }

    /// Consumes the wire form, returning the success payload if any.
    #[must_use]
    #[inline]
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Error { .. } => None,
        }
    }

    /// Returns the error classification, if this is an error.
    #[must_use]
    #[inline]
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Error { error_type, .. } => Some(*error_type),
        }
    }

    /// Returns the message field of either variant.
    #[must_use]
    #[inline]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { message, .. } => message.as_deref(),
            Self::Error { message, .. } => Some(message),
        }
    }

    /// Returns the diagnostic string, if this is an error carrying one.
    #[must_use]
    #[inline]
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Error { diagnostic, .. } => diagnostic.as_deref(),
        }
    }

    /// Returns the caller-set correlation id, if any.
    #[must_use]
    #[inline]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Success { request_id, .. } | Self::Error { request_id, .. } => {
                request_id.as_deref()
            }
        }
    }

    /// Sets the opaque correlation id. The crate never generates one itself.
    #[inline]
    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        match &mut self {
            Self::Success { request_id, .. } | Self::Error { request_id, .. } => {
                *request_id = Some(id.into());
            }
        }
        self
    }
}
