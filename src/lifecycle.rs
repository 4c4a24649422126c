//! Result-lifecycle state machine for the single outstanding generation
//! request.
//!
//! Four states, no separate reset: starting a new request from `Succeeded`
//! or `Failed` goes straight back to `Pending` and discards the prior
//! data. The held `ReportResult` is replaced wholesale, never merged.

use crate::client::GenerateError;
use crate::report::ReportResult;

/// Where the current (or most recent) generation request stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GenerationPhase {
    #[default]
    Idle,
    Pending,
    Succeeded(ReportResult),
    Failed(String),
}

/// Which terminal state a resolution produced. The caller uses this to
/// apply the one lifecycle/tab coupling rule (jump to the report view on
/// success).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    Succeeded,
    Failed,
}

impl GenerationPhase {
    /// Transition to `Pending`, dropping any previously held result or
    /// error.
    pub fn begin(&mut self) {
        *self = GenerationPhase::Pending;
    }

    /// Apply the outcome of a generation exchange.
    #[must_use]
    pub fn resolve(&mut self, outcome: Result<ReportResult, GenerateError>) -> Resolved {
        match outcome {
            Ok(result) => {
                *self = GenerationPhase::Succeeded(result);
                Resolved::Succeeded
            }
            Err(err) => {
                tracing::warn!("generation failed: {err}");
                *self = GenerationPhase::Failed(err.to_string());
                Resolved::Failed
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, GenerationPhase::Pending)
    }

    /// The held result, if the last request succeeded.
    pub fn result(&self) -> Option<&ReportResult> {
        match self {
            GenerationPhase::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    /// The failure message, if the last request failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            GenerationPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}
