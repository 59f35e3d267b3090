//! Lifecycle of a single aggregation.
//!
//! Every invocation walks the same path:
//!
//! ```text
//! NotStarted -> Validating -> (Failed | Iterating) -> (Failed | Completed)
//! ```
//!
//! `Validating` finishes before the source cursor is obtained. Both
//! `Failed` and `Completed` are terminal; there is no retry.
//!
//! When the `tracing` feature is enabled, transitions are emitted at
//! `TRACE` and failures at `DEBUG`.

use super::error::{EmptySequenceError, MissingArgumentError};

/// The phases an aggregation passes through.
///
/// # Examples
///
/// ```rust
/// use foldwise::aggregate::AggregatePhase;
///
/// assert!(AggregatePhase::Validating.can_transition_to(AggregatePhase::Iterating));
/// assert!(!AggregatePhase::Completed.can_transition_to(AggregatePhase::Iterating));
/// assert!(AggregatePhase::Failed.is_terminal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregatePhase {
    /// The operation has not been invoked yet.
    NotStarted,
    /// Required arguments are being checked.
    Validating,
    /// The source cursor is being advanced.
    Iterating,
    /// The final value (raw or projected) has been produced.
    Completed,
    /// Validation, the source, or a caller function failed.
    Failed,
}

impl AggregatePhase {
    /// Returns `true` for `Completed` and `Failed`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Returns whether `next` directly follows `self`.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::NotStarted, Self::Validating)
                | (Self::Validating | Self::Iterating, Self::Failed)
                | (Self::Validating, Self::Iterating)
                | (Self::Iterating, Self::Completed)
        )
    }

    /// Returns the lowercase name used in log output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Validating => "validating",
            Self::Iterating => "iterating",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for AggregatePhase {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[inline]
pub(crate) fn record_transition(operation: &'static str, phase: AggregatePhase) {
    #[cfg(feature = "tracing")]
    tracing::trace!(operation, phase = %phase, "aggregate phase transition");
    #[cfg(not(feature = "tracing"))]
    let _ = (operation, phase);
}

#[inline]
pub(crate) fn record_missing_argument(error: &MissingArgumentError) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        operation = error.operation,
        parameter = error.parameter,
        "aggregate argument missing"
    );
    record_transition(error.operation, AggregatePhase::Failed);
}

#[inline]
pub(crate) fn record_empty_sequence(error: &EmptySequenceError) {
    #[cfg(feature = "tracing")]
    tracing::debug!(operation = error.operation, "aggregate over empty sequence");
    record_transition(error.operation, AggregatePhase::Failed);
}
