//! Diagnostic capture capability for error construction.
//!
//! When an error outcome is built without an explicit cause, the constructor
//! asks a [`DiagnosticCapture`] for a trace of the current execution context.
//! The capability is injected rather than a global, so tests can substitute
//! [`NoCapture`] and get deterministic outcomes.

use std::backtrace::Backtrace;

/// Produces an optional diagnostic string describing the current execution
/// context.
///
/// The returned string is purely informational. It ends up in the
/// `diagnostic` field of the wire form and is never parsed.
pub trait DiagnosticCapture {
    /// Captures a diagnostic for an error being constructed right now.
    fn capture(&self) -> Option<String>;
}

/// Default capture: renders the current call-stack backtrace.
///
/// Uses [`Backtrace::force_capture`], so a trace is produced regardless of the
/// `RUST_BACKTRACE` environment variable.
///
/// # Examples
///
/// ```
/// use outcome_rail::diagnostic::{BacktraceCapture, DiagnosticCapture};
///
/// assert!(BacktraceCapture.capture().is_some());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceCapture;

impl DiagnosticCapture for BacktraceCapture {
    fn capture(&self) -> Option<String> {
        Some(Backtrace::force_capture().to_string())
    }
}

/// Capture that records nothing.
///
/// Useful in tests asserting on serialized outcomes, and on hot paths where
/// backtrace capture cost is unwanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCapture;

impl DiagnosticCapture for NoCapture {
    #[inline]
    fn capture(&self) -> Option<String> {
        None
    }
}
