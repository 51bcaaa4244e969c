//! Closed error taxonomy and its transport status mapping.
//!
//! [`ErrorKind`] classifies why an operation failed. The set is fixed; adding
//! a variant requires updating [`ErrorKind::status_code`], which the compiler
//! enforces through the exhaustive `match`.

use serde::{Deserialize, Serialize};

/// Classification of a failed outcome.
///
/// Serialized in kebab-case (`"user-validation"`, `"not-found"`, ...) so the
/// wire form matches the transport schema exactly.
///
/// # Examples
///
/// ```
/// use outcome_rail::ErrorKind;
///
/// assert_eq!(ErrorKind::NotFound.status_code(), 404);
/// assert_eq!(ErrorKind::default(), ErrorKind::Unexpected);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// Catch-all for failures with no more specific classification.
    #[default]
    Unexpected,
    /// Caller-supplied input failed validation.
    UserValidation,
    /// Authentication or authorization failure.
    Unauthorized,
    /// The requested subject does not exist.
    NotFound,
}

impl ErrorKind {
    /// Returns the fixed transport status code for this kind.
    ///
    /// The mapping is process-wide static configuration and never changes at
    /// runtime: `Unexpected` → 503, `UserValidation` → 400, `Unauthorized` →
    /// 401, `NotFound` → 404.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::Unexpected.status_code(), 503);
    /// assert_eq!(ErrorKind::UserValidation.status_code(), 400);
    /// ```
    #[must_use]
    #[inline]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::Unexpected => 503,
            Self::UserValidation => 400,
            Self::Unauthorized => 401,
            Self::NotFound => 404,
        }
    }

    /// Returns the wire name of this kind.
    #[must_use]
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unexpected => "unexpected",
            Self::UserValidation => "user-validation",
            Self::Unauthorized => "unauthorized",
            Self::NotFound => "not-found",
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
