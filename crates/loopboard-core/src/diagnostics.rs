//! Diagnostic reporting channel for data-integrity violations.
//!
//! Resolution functions stay total: when upstream game state is found to be
//! inconsistent (an out-of-range owner index, for example), the affected
//! visual element is omitted and the violation is reported through a
//! [`DiagnosticSink`] supplied by the host. The host decides what
//! "reported" means: log it, collect it, or ignore it.
//!
//! # Provided sinks
//!
//! - [`LogSink`]: emits a `tracing` warning per violation
//! - [`NullSink`]: discards violations (host validates upstream)
//! - [`RecordingSink`]: accumulates violations for in-band inspection

use std::cell::RefCell;

use crate::error::DataIntegrityError;

/// Receives data-integrity violations discovered during resolution.
///
/// Implementations must not panic; resolution relies on `report` returning
/// so the rest of the cell can still be painted.
pub trait DiagnosticSink {
    /// Called once per violation, in the order violations are discovered.
    fn report(&self, error: DataIntegrityError);
}

/// Sink that logs each violation as a `tracing` warning.
///
/// This is the default choice for hosts that already ship a tracing
/// subscriber: inconsistent game state shows up in the log stream without
/// any extra plumbing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, error: DataIntegrityError) {
        tracing::warn!(%error, "inconsistent game state during cell resolution");
    }
}

/// Sink that discards all violations.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _error: DataIntegrityError) {}
}

/// Sink that accumulates violations for later inspection.
///
/// Uses interior mutability so it can be passed by shared reference through
/// the resolution call; it is single-threaded (not `Sync`), which matches
/// the synchronous render model.
///
/// # Example
///
/// ```
/// use loopboard_core::diagnostics::{DiagnosticSink, RecordingSink};
/// use loopboard_core::error::DataIntegrityError;
///
/// let sink = RecordingSink::new();
/// sink.report(DataIntegrityError::OwnerOutOfRange { owner: 9, player_count: 2 });
///
/// assert_eq!(sink.errors().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingSink {
    errors: RefCell<Vec<DataIntegrityError>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all violations reported so far, in report order.
    #[must_use]
    pub fn errors(&self) -> Vec<DataIntegrityError> {
        self.errors.borrow().clone()
    }

    /// Returns `true` if no violation has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.borrow().is_empty()
    }

    /// Drains and returns all recorded violations.
    pub fn take(&self) -> Vec<DataIntegrityError> {
        self.errors.take()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, error: DataIntegrityError) {
        self.errors.borrow_mut().push(error);
    }
}
