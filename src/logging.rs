//! Logging seam for the one side-effecting function in the crate.
//!
//! [`unwrap_or`](crate::convert::unwrap_or) is permitted to log the error it
//! discards. The log call goes through [`ErrorLog`] rather than a hardwired
//! global sink, so callers (and tests) can observe or silence it.

/// Sink for errors discarded by `unwrap_or`.
///
/// The return value of [`log`](ErrorLog::log) is never consulted.
pub trait ErrorLog {
    /// Records a discarded error message and its optional diagnostic.
    fn log(&self, message: &str, diagnostic: Option<&str>);
}

/// Log sink that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLog;

impl ErrorLog for NoopLog {
    #[inline]
    fn log(&self, _message: &str, _diagnostic: Option<&str>) {}
}

/// Log sink backed by the `tracing` ecosystem (requires the `tracing`
/// feature).
///
/// Emits a `warn`-level event for each discarded error, carrying the message
/// and diagnostic as fields.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

#[cfg(feature = "tracing")]
impl ErrorLog for TracingLog {
    fn log(&self, message: &str, diagnostic: Option<&str>) {
        tracing::warn!(error.message = message, error.diagnostic = diagnostic, "discarded error outcome");
    }
}
