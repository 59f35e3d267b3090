//! Error types for aggregation.
//!
//! Two failures exist: a required argument was not supplied, or the
//! unseeded aggregation was asked to fold a sequence with no elements.
//! Both are programming errors at the call site, not transient conditions.

/// Represents a required argument that was not supplied.
///
/// Only the [`checked`](super::checked) layer can produce this error, since
/// the other entry points take their arguments by value.
///
/// # Examples
///
/// ```rust
/// use foldwise::aggregate::MissingArgumentError;
///
/// let error = MissingArgumentError {
///     operation: "aggregate_with_seed",
///     parameter: "function",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "aggregate_with_seed: required argument `function` was not supplied"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingArgumentError {
    /// The name of the operation that was invoked.
    pub operation: &'static str,
    /// The name of the absent parameter.
    pub parameter: &'static str,
}

impl std::fmt::Display for MissingArgumentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: required argument `{}` was not supplied",
            self.operation, self.parameter
        )
    }
}

impl std::error::Error for MissingArgumentError {}

/// Represents an unseeded aggregation over a sequence with no elements.
///
/// Without a first element there is no initial accumulator, so the
/// operation cannot produce a value. The seeded shapes never raise this.
///
/// # Examples
///
/// ```rust
/// use foldwise::aggregate::EmptySequenceError;
///
/// let error = EmptySequenceError { operation: "aggregate" };
/// assert_eq!(format!("{}", error), "aggregate: sequence contains no elements");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySequenceError {
    /// The name of the operation that was invoked.
    pub operation: &'static str,
}

impl std::fmt::Display for EmptySequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: sequence contains no elements", self.operation)
    }
}

impl std::error::Error for EmptySequenceError {}

/// Represents every error an aggregation can report on its own.
///
/// Faults raised by the source or by caller-supplied functions are never
/// folded into this type; see [`fallible`](super::fallible).
///
/// # Examples
///
/// ```rust
/// use foldwise::aggregate::{AggregateError, EmptySequenceError};
///
/// let error = AggregateError::from(EmptySequenceError { operation: "aggregate" });
/// assert!(error.is_empty_sequence());
/// assert!(!error.is_missing_argument());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateError {
    /// A required argument was not supplied.
    MissingArgument(MissingArgumentError),
    /// The unseeded shape was given an empty sequence.
    EmptySequence(EmptySequenceError),
}

impl AggregateError {
    /// Returns `true` if this is an absent-argument error.
    #[must_use]
    pub const fn is_missing_argument(&self) -> bool {
        matches!(self, Self::MissingArgument(_))
    }

    /// Returns `true` if this is an empty-sequence error.
    #[must_use]
    pub const fn is_empty_sequence(&self) -> bool {
        matches!(self, Self::EmptySequence(_))
    }

    /// Returns the name of the operation that failed.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::MissingArgument(error) => error.operation,
            Self::EmptySequence(error) => error.operation,
        }
    }
}

impl std::fmt::Display for AggregateError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingArgument(error) => write!(formatter, "{error}"),
            Self::EmptySequence(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for AggregateError {}

impl From<MissingArgumentError> for AggregateError {
    fn from(error: MissingArgumentError) -> Self {
        Self::MissingArgument(error)
    }
}

impl From<EmptySequenceError> for AggregateError {
    fn from(error: EmptySequenceError) -> Self {
        Self::EmptySequence(error)
    }
}

static_assertions::assert_impl_all!(MissingArgumentError: Send, Sync, std::error::Error);
static_assertions::assert_impl_all!(EmptySequenceError: Send, Sync, std::error::Error);
static_assertions::assert_impl_all!(AggregateError: Send, Sync, std::error::Error);
