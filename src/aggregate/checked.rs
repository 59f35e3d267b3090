//! Aggregation with explicit absent-argument checks.
//!
//! Every required argument is taken as an `Option`. Arguments are checked in
//! parameter order (`source`, `function`, `projector`) and the first `None`
//! is reported as [`MissingArgumentError`]. All checks finish before the
//! source is turned into a cursor, so a call that fails validation never
//! touches an element.
//!
//! # Examples
//!
//! ```rust
//! use foldwise::aggregate::checked;
//!
//! let result = checked::aggregate_with_seed(Some(vec![1, 3]), 5, None::<fn(i32, i32) -> i32>);
//! assert!(result.unwrap_err().is_missing_argument());
//! ```

use super::engine;
use super::error::{AggregateError, MissingArgumentError};
use super::phase::{AggregatePhase, record_missing_argument, record_transition};

fn require<T>(
    argument: Option<T>,
    operation: &'static str,
    parameter: &'static str,
) -> Result<T, MissingArgumentError> {
    argument.ok_or_else(|| {
        let error = MissingArgumentError {
            operation,
            parameter,
        };
        record_missing_argument(&error);
        error
    })
}

/// Checked form of [`engine::aggregate`].
///
/// # Errors
///
/// - [`AggregateError::MissingArgument`] if `source` or `function` is `None`
/// - [`AggregateError::EmptySequence`] if `source` yields no elements
///
/// # Examples
///
/// ```rust
/// use foldwise::aggregate::checked;
///
/// let folded = checked::aggregate(Some(vec![5, 3, 2]), Some(|x: i32, y: i32| x * y));
/// assert_eq!(folded, Ok(30));
///
/// let empty = checked::aggregate(Some(Vec::<i32>::new()), Some(|x: i32, y: i32| x + y));
/// assert!(empty.unwrap_err().is_empty_sequence());
/// ```
pub fn aggregate<I, F>(source: Option<I>, function: Option<F>) -> Result<I::Item, AggregateError>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    const OPERATION: &str = "aggregate";

    record_transition(OPERATION, AggregatePhase::Validating);
    let source = require(source, OPERATION, "source")?;
    let function = require(function, OPERATION, "function")?;

    let accumulator = engine::fold_unseeded(OPERATION, source, function)?;
    record_transition(OPERATION, AggregatePhase::Completed);
    Ok(accumulator)
}

/// Checked form of [`engine::aggregate_with_seed`].
///
/// The seed is a plain value; only `source` and `function` can be absent.
///
/// # Errors
///
/// Returns [`AggregateError::MissingArgument`] if `source` or `function` is
/// `None`. An empty source is not an error.
///
/// # Examples
///
/// ```rust
/// use foldwise::aggregate::checked;
///
/// let sum = checked::aggregate_with_seed(Some(Vec::<i32>::new()), 5, Some(|x: i32, y: i32| x + y));
/// assert_eq!(sum, Ok(5));
/// ```
pub fn aggregate_with_seed<I, A, F>(
    source: Option<I>,
    seed: A,
    function: Option<F>,
) -> Result<A, AggregateError>
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
{
    const OPERATION: &str = "aggregate_with_seed";

    record_transition(OPERATION, AggregatePhase::Validating);
    let source = require(source, OPERATION, "source")?;
    let function = require(function, OPERATION, "function")?;

    let accumulator = engine::fold_seeded(OPERATION, source, seed, function);
    record_transition(OPERATION, AggregatePhase::Completed);
    Ok(accumulator)
}

/// Checked form of [`engine::aggregate_with_projection`].
///
/// # Errors
///
/// Returns [`AggregateError::MissingArgument`] if `source`, `function` or
/// `projector` is `None`.
///
/// # Examples
///
/// ```rust
/// use foldwise::aggregate::checked;
///
/// let text = checked::aggregate_with_projection(
///     Some(vec![1, 4, 5]),
///     5,
///     Some(|current: i32, value: i32| current * 2 + value),
///     Some(|result: i32| result.to_string()),
/// );
/// assert_eq!(text.as_deref(), Ok("57"));
/// ```
pub fn aggregate_with_projection<I, A, R, F, P>(
    source: Option<I>,
    seed: A,
    function: Option<F>,
    projector: Option<P>,
) -> Result<R, AggregateError>
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
    P: FnOnce(A) -> R,
{
    const OPERATION: &str = "aggregate_with_projection";

    record_transition(OPERATION, AggregatePhase::Validating);
    let source = require(source, OPERATION, "source")?;
    let function = require(function, OPERATION, "function")?;
    let projector = require(projector, OPERATION, "projector")?;

    let result = projector(engine::fold_seeded(OPERATION, source, seed, function));
    record_transition(OPERATION, AggregatePhase::Completed);
    Ok(result)
}
