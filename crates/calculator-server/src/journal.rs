//! Calculation journal.
//!
//! Handlers report every outcome to a [`CalculationJournal`] taken from
//! [`AppState`](crate::state::AppState) instead of logging through a global.
//! Production uses [`TracingJournal`]; tests swap in [`MemoryJournal`] to
//! assert on what was reported.

use parking_lot::Mutex;
use tracing::{error, info};

use calculator_core::{CalcError, Calculation, Operation};

/// Sink for calculation outcomes.
pub trait CalculationJournal: Send + Sync {
    /// A calculation completed.
    fn record(&self, calculation: &Calculation);

    /// An operation was rejected during validation or evaluation.
    fn reject(&self, operation: Operation, error: &CalcError);
}

/// Journal that emits `tracing` events: info for results, error for failures.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingJournal;

impl CalculationJournal for TracingJournal {
    fn record(&self, calculation: &Calculation) {
        info!(
            operation = %calculation.operation,
            result = calculation.result,
            "{}",
            calculation
        );
    }

    fn reject(&self, operation: Operation, error: &CalcError) {
        error!(operation = %operation, "{}", error);
    }
}

/// One reported outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JournalEntry {
    /// Successful calculation.
    Recorded(Calculation),
    /// Failed operation.
    Rejected {
        /// Operation that failed.
        operation: Operation,
        /// Why it failed.
        error: CalcError,
    },
}

/// In-memory journal.
#[derive(Debug, Default)]
pub struct MemoryJournal {
    entries: Mutex<Vec<JournalEntry>>,
}

impl MemoryJournal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far, in order.
    pub fn entries(&self) -> Vec<JournalEntry> {
        self.entries.lock().clone()
    }

    /// Number of reported outcomes.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// True when nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl CalculationJournal for MemoryJournal {
    fn record(&self, calculation: &Calculation) {
        self.entries.lock().push(JournalEntry::Recorded(*calculation));
    }

    fn reject(&self, operation: Operation, error: &CalcError) {
        self.entries.lock().push(JournalEntry::Rejected {
            operation,
            error: *error,
        });
    }
}
