//! The fold algorithm behind every aggregation shape.
//!
//! Each function obtains exactly one forward cursor from its source and
//! drives it to exhaustion on the calling thread. The accumulator function
//! is applied once per remaining element in source order; the projector, if
//! any, is applied once to the final accumulator.
//!
//! Arguments here are taken by value, so their presence is enforced by the
//! type system. See [`checked`](super::checked) for the layer that accepts
//! possibly absent arguments.
//!
//! Panics raised by the cursor or by a caller function unwind through these
//! functions without being caught.

use super::error::EmptySequenceError;
use super::phase::{AggregatePhase, record_empty_sequence, record_transition};

/// Folds a sequence using its first element as the initial accumulator.
///
/// The first element is not passed through `function`; every following
/// element `element` replaces the accumulator with
/// `function(accumulator, element)`.
///
/// # Errors
///
/// Returns [`EmptySequenceError`] if `source` yields no elements.
///
/// # Examples
///
/// ```rust
/// use foldwise::aggregate::aggregate;
///
/// // (1 * 2 + 4) * 2 + 5
/// assert_eq!(aggregate(vec![1, 4, 5], |current, value| current * 2 + value), Ok(17));
///
/// assert!(aggregate(Vec::<i32>::new(), |x, y| x + y).is_err());
/// ```
pub fn aggregate<I, F>(source: I, function: F) -> Result<I::Item, EmptySequenceError>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    const OPERATION: &str = "aggregate";

    record_transition(OPERATION, AggregatePhase::Validating);
    let accumulator = fold_unseeded(OPERATION, source, function)?;
    record_transition(OPERATION, AggregatePhase::Completed);
    Ok(accumulator)
}

/// Folds a sequence starting from a caller-supplied seed.
///
/// The accumulator type `A` is independent of the element type, so narrow
/// elements can be folded into a wider accumulator. An empty source returns
/// `seed` unchanged.
///
/// # Examples
///
/// ```rust
/// use foldwise::aggregate::aggregate_with_seed;
///
/// let large = 2_000_000_000_i32;
/// let sum = aggregate_with_seed(vec![large, large, large], 0_i64, |accumulator, value| {
///     accumulator + i64::from(value)
/// });
/// assert_eq!(sum, 6_000_000_000);
///
/// assert_eq!(aggregate_with_seed(Vec::<i32>::new(), 5, |x, y| x + y), 5);
/// ```
pub fn aggregate_with_seed<I, A, F>(source: I, seed: A, function: F) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
{
    const OPERATION: &str = "aggregate_with_seed";

    record_transition(OPERATION, AggregatePhase::Validating);
    let accumulator = fold_seeded(OPERATION, source, seed, function);
    record_transition(OPERATION, AggregatePhase::Completed);
    accumulator
}

/// Folds a sequence from a seed, then maps the final accumulator.
///
/// Equivalent to `projector(aggregate_with_seed(source, seed, function))`.
/// `projector` runs exactly once, after the source is exhausted.
///
/// # Examples
///
/// ```rust
/// use foldwise::aggregate::aggregate_with_projection;
///
/// let text = aggregate_with_projection(
///     vec![1, 4, 5],
///     5,
///     |current, value| current * 2 + value,
///     |result: i32| result.to_string(),
/// );
/// assert_eq!(text, "57");
/// ```
pub fn aggregate_with_projection<I, A, R, F, P>(
    source: I,
    seed: A,
    function: F,
    projector: P,
) -> R
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
    P: FnOnce(A) -> R,
{
    const OPERATION: &str = "aggregate_with_projection";

    record_transition(OPERATION, AggregatePhase::Validating);
    let accumulator = fold_seeded(OPERATION, source, seed, function);
    let result = projector(accumulator);
    record_transition(OPERATION, AggregatePhase::Completed);
    result
}

/// Iterating step of the unseeded shape, shared with the checked layer.
pub(crate) fn fold_unseeded<I, F>(
    operation: &'static str,
    source: I,
    function: F,
) -> Result<I::Item, EmptySequenceError>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    record_transition(operation, AggregatePhase::Iterating);

    let mut cursor = source.into_iter();
    let Some(first) = cursor.next() else {
        let error = EmptySequenceError { operation };
        record_empty_sequence(&error);
        return Err(error);
    };
    Ok(cursor.fold(first, function))
}

/// Iterating step of both seeded shapes.
pub(crate) fn fold_seeded<I, A, F>(operation: &'static str, source: I, seed: A, function: F) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
{
    record_transition(operation, AggregatePhase::Iterating);
    source.into_iter().fold(seed, function)
}
