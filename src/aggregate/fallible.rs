//! Aggregation over fallible sources and fallible functions.
//!
//! The source yields `Result<T, E>` and the accumulator and projector return
//! `Result<_, E>`. The first `Err`, wherever it comes from, ends the fold and
//! is returned exactly as produced. No element after the failing one is
//! requested from the cursor.
//!
//! The unseeded shape reports an empty source in the caller's error type,
//! which must therefore implement `From<EmptySequenceError>`.
//!
//! # Examples
//!
//! ```rust
//! use foldwise::aggregate::try_aggregate_with_seed;
//!
//! let lines = vec!["1", "2", "x", "4"];
//! let parsed = lines.into_iter().map(str::parse::<i32>);
//!
//! let result = try_aggregate_with_seed(parsed, 0, |total, value| Ok(total + value));
//! assert!(result.is_err());
//! ```

use super::error::EmptySequenceError;
use super::phase::{AggregatePhase, record_empty_sequence, record_transition};

fn fold_from<I, T, A, E, F>(cursor: I, seed: A, mut function: F) -> Result<A, E>
where
    I: Iterator<Item = Result<T, E>>,
    F: FnMut(A, T) -> Result<A, E>,
{
    let mut accumulator = seed;
    for element in cursor {
        accumulator = function(accumulator, element?)?;
    }
    Ok(accumulator)
}

fn fold_seeded<I, T, A, E, F>(
    operation: &'static str,
    source: I,
    seed: A,
    function: F,
) -> Result<A, E>
where
    I: IntoIterator<Item = Result<T, E>>,
    F: FnMut(A, T) -> Result<A, E>,
{
    record_transition(operation, AggregatePhase::Iterating);
    fold_from(source.into_iter(), seed, function)
}

fn finish<V, E>(operation: &'static str, result: Result<V, E>) -> Result<V, E> {
    let phase = if result.is_ok() {
        AggregatePhase::Completed
    } else {
        AggregatePhase::Failed
    };
    record_transition(operation, phase);
    result
}

/// Fallible form of [`aggregate`](super::aggregate).
///
/// # Errors
///
/// - The first `Err` yielded by `source` or returned by `function`, unchanged
/// - `E::from(EmptySequenceError)` if `source` yields no elements
///
/// # Examples
///
/// ```rust
/// use foldwise::aggregate::{try_aggregate, EmptySequenceError};
///
/// #[derive(Debug, PartialEq)]
/// enum Fault {
///     Empty,
///     Overflow,
/// }
///
/// impl From<EmptySequenceError> for Fault {
///     fn from(_: EmptySequenceError) -> Self {
///         Fault::Empty
///     }
/// }
///
/// let checked_product = |x: u8, y: u8| x.checked_mul(y).ok_or(Fault::Overflow);
///
/// assert_eq!(try_aggregate(vec![Ok(5), Ok(3), Ok(2)], checked_product), Ok(30));
/// assert_eq!(try_aggregate(vec![Ok(100), Ok(3)], checked_product), Err(Fault::Overflow));
/// assert_eq!(try_aggregate(Vec::<Result<u8, Fault>>::new(), checked_product), Err(Fault::Empty));
/// ```
pub fn try_aggregate<I, T, E, F>(source: I, function: F) -> Result<T, E>
where
    I: IntoIterator<Item = Result<T, E>>,
    F: FnMut(T, T) -> Result<T, E>,
    E: From<EmptySequenceError>,
{
    const OPERATION: &str = "try_aggregate";

    record_transition(OPERATION, AggregatePhase::Validating);
    record_transition(OPERATION, AggregatePhase::Iterating);

    let mut cursor = source.into_iter();
    let first = match cursor.next() {
        Some(first) => first,
        None => {
            let error = EmptySequenceError {
                operation: OPERATION,
            };
            record_empty_sequence(&error);
            return Err(E::from(error));
        }
    };

    let result = first.and_then(|first| fold_from(cursor, first, function));
    finish(OPERATION, result)
}

/// Fallible form of [`aggregate_with_seed`](super::aggregate_with_seed).
///
/// An empty source returns `Ok(seed)`.
///
/// # Errors
///
/// Returns the first `Err` yielded by `source` or returned by `function`,
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use foldwise::aggregate::try_aggregate_with_seed;
///
/// let source: Vec<Result<i32, String>> = vec![Ok(1), Ok(2), Ok(3)];
/// let total = try_aggregate_with_seed(source, 0_i64, |total, value| Ok(total + i64::from(value)));
/// assert_eq!(total, Ok(6));
/// ```
pub fn try_aggregate_with_seed<I, T, A, E, F>(source: I, seed: A, function: F) -> Result<A, E>
where
    I: IntoIterator<Item = Result<T, E>>,
    F: FnMut(A, T) -> Result<A, E>,
{
    const OPERATION: &str = "try_aggregate_with_seed";

    record_transition(OPERATION, AggregatePhase::Validating);
    finish(OPERATION, fold_seeded(OPERATION, source, seed, function))
}

/// Fallible form of [`aggregate_with_projection`](super::aggregate_with_projection).
///
/// `projector` runs only if every element was folded successfully.
///
/// # Errors
///
/// Returns the first `Err` yielded by `source`, returned by `function`, or
/// returned by `projector`, unchanged.
///
/// # Examples
///
/// ```rust
/// use foldwise::aggregate::try_aggregate_with_projection;
///
/// let source: Vec<Result<u32, String>> = vec![Ok(1), Ok(4), Ok(5)];
/// let text = try_aggregate_with_projection(
///     source,
///     5_u32,
///     |current, value| Ok(current * 2 + value),
///     |result: u32| char::from_digit(result % 10, 10).ok_or_else(|| "not a digit".to_string()),
/// );
/// assert_eq!(text, Ok('7'));
/// ```
pub fn try_aggregate_with_projection<I, T, A, R, E, F, P>(
    source: I,
    seed: A,
    function: F,
    projector: P,
) -> Result<R, E>
where
    I: IntoIterator<Item = Result<T, E>>,
    F: FnMut(A, T) -> Result<A, E>,
    P: FnOnce(A) -> Result<R, E>,
{
    const OPERATION: &str = "try_aggregate_with_projection";

    record_transition(OPERATION, AggregatePhase::Validating);
    let result = fold_seeded(OPERATION, source, seed, function).and_then(projector);
    finish(OPERATION, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Fault {
        Empty(&'static str),
        Cursor(usize),
        Function(i32),
    }

    impl From<EmptySequenceError> for Fault {
        fn from(error: EmptySequenceError) -> Self {
            Self::Empty(error.operation)
        }
    }

    #[rstest]
    fn try_aggregate_empty_uses_caller_error() {
        let result = try_aggregate(Vec::<Result<i32, Fault>>::new(), |x, y| Ok(x + y));
        assert_eq!(result, Err(Fault::Empty("try_aggregate")));
    }

    #[rstest]
    fn try_aggregate_failing_first_element() {
        let mut calls = 0;
        let result = try_aggregate(vec![Err(Fault::Cursor(0)), Ok(1)], |x: i32, y| {
            calls += 1;
            Ok(x + y)
        });
        assert_eq!(result, Err(Fault::Cursor(0)));
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn try_aggregate_with_seed_stops_at_first_cursor_fault() {
        let mut seen = Vec::new();
        let source = vec![Ok(1), Ok(2), Err(Fault::Cursor(2)), Ok(4), Err(Fault::Cursor(4))];
        let result = try_aggregate_with_seed(source, 0, |total, value| {
            seen.push(value);
            Ok(total + value)
        });
        assert_eq!(result, Err(Fault::Cursor(2)));
        assert_eq!(seen, vec![1, 2]);
    }

    #[rstest]
    fn try_aggregate_with_seed_propagates_function_fault() {
        let result = try_aggregate_with_seed(vec![Ok(1), Ok(-3), Ok(5)], 0, |total, value| {
            if value < 0 {
                Err(Fault::Function(value))
            } else {
                Ok(total + value)
            }
        });
        assert_eq!(result, Err(Fault::Function(-3)));
    }

    #[rstest]
    fn try_aggregate_with_projection_skips_projector_on_fault() {
        let mut projected = false;
        let result: Result<String, Fault> = try_aggregate_with_projection(
            vec![Ok(1), Err(Fault::Cursor(1))],
            0,
            |total, value: i32| Ok(total + value),
            |total| {
                projected = true;
                Ok(total.to_string())
            },
        );
        assert_eq!(result, Err(Fault::Cursor(1)));
        assert!(!projected);
    }

    #[rstest]
    fn try_aggregate_with_projection_propagates_projector_fault() {
        let result: Result<String, Fault> = try_aggregate_with_projection(
            vec![Ok(2), Ok(3)],
            1,
            |total, value: i32| Ok(total * value),
            |total| Err(Fault::Function(total)),
        );
        assert_eq!(result, Err(Fault::Function(6)));
    }
}
