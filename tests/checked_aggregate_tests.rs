//! Tests for the checked aggregation layer.
//!
//! Every required argument may be absent. An absent argument must be
//! reported before the source is touched.

use foldwise::aggregate::{AggregateError, MissingArgumentError, checked};
use rstest::rstest;
use std::cell::Cell;

type Add = fn(i32, i32) -> i32;
type ToText = fn(i32) -> String;

fn add(x: i32, y: i32) -> i32 {
    x + y
}

fn to_text(value: i32) -> String {
    value.to_string()
}

fn missing(operation: &'static str, parameter: &'static str) -> AggregateError {
    AggregateError::MissingArgument(MissingArgumentError {
        operation,
        parameter,
    })
}

// =============================================================================
// Unseeded
// =============================================================================

#[rstest]
fn null_source_unseeded() {
    let source: Option<Vec<i32>> = None;
    assert_eq!(
        checked::aggregate(source, Some(add)),
        Err(missing("aggregate", "source"))
    );
}

#[rstest]
fn null_func_unseeded() {
    let source = Some(vec![1, 3]);
    assert_eq!(
        checked::aggregate(source, None::<Add>),
        Err(missing("aggregate", "function"))
    );
}

#[rstest]
fn checked_unseeded_aggregation() {
    assert_eq!(
        checked::aggregate(
            Some(vec![1, 4, 5]),
            Some(|current: i32, value: i32| current * 2 + value)
        ),
        Ok(17)
    );
}

#[rstest]
fn checked_empty_sequence_unseeded() {
    let error = checked::aggregate(Some(Vec::<i32>::new()), Some(add)).unwrap_err();
    assert!(error.is_empty_sequence());
    assert_eq!(error.to_string(), "aggregate: sequence contains no elements");
}

// =============================================================================
// Seeded
// =============================================================================

#[rstest]
fn null_source_seeded() {
    let source: Option<Vec<i32>> = None;
    assert_eq!(
        checked::aggregate_with_seed(source, 3, Some(add)),
        Err(missing("aggregate_with_seed", "source"))
    );
}

#[rstest]
fn null_func_seeded() {
    assert_eq!(
        checked::aggregate_with_seed(Some(vec![1, 3]), 5, None::<Add>),
        Err(missing("aggregate_with_seed", "function"))
    );
}

#[rstest]
fn checked_empty_sequence_seeded() {
    assert_eq!(
        checked::aggregate_with_seed(Some(Vec::<i32>::new()), 5, Some(add)),
        Ok(5)
    );
}

// =============================================================================
// Seeded with Projection
// =============================================================================

#[rstest]
fn null_source_seeded_with_result_selector() {
    let source: Option<Vec<i32>> = None;
    assert_eq!(
        checked::aggregate_with_projection(source, 3, Some(add), Some(to_text)),
        Err(missing("aggregate_with_projection", "source"))
    );
}

#[rstest]
fn null_func_seeded_with_result_selector() {
    assert_eq!(
        checked::aggregate_with_projection(Some(vec![1, 3]), 5, None::<Add>, Some(to_text)),
        Err(missing("aggregate_with_projection", "function"))
    );
}

#[rstest]
fn null_projection_seeded_with_result_selector() {
    assert_eq!(
        checked::aggregate_with_projection(Some(vec![1, 3]), 5, Some(add), None::<ToText>),
        Err(missing("aggregate_with_projection", "projector"))
    );
}

#[rstest]
fn checked_seeded_aggregation_with_result_selector() {
    let result = checked::aggregate_with_projection(
        Some(vec![1, 4, 5]),
        5,
        Some(|current: i32, value: i32| current * 2 + value),
        Some(to_text),
    );
    assert_eq!(result, Ok("57".to_string()));
}

#[rstest]
fn checked_empty_sequence_seeded_with_result_selector() {
    let result =
        checked::aggregate_with_projection(Some(Vec::<i32>::new()), 5, Some(add), Some(to_text));
    assert_eq!(result, Ok("5".to_string()));
}

// =============================================================================
// Validation Happens Before Iteration
// =============================================================================

#[rstest]
#[case::function(None, Some(to_text as ToText), "function")]
#[case::projector(Some(add as Add), None, "projector")]
fn absent_argument_leaves_source_untouched(
    #[case] function: Option<Add>,
    #[case] projector: Option<ToText>,
    #[case] parameter: &'static str,
) {
    let pulls = Cell::new(0);
    let source = (1..=3).inspect(|_| pulls.set(pulls.get() + 1));

    let result = checked::aggregate_with_projection(Some(source), 0, function, projector);

    assert_eq!(result, Err(missing("aggregate_with_projection", parameter)));
    assert_eq!(pulls.get(), 0);
}

#[rstest]
fn absent_function_never_turns_source_into_cursor() {
    struct Untouchable;

    impl IntoIterator for Untouchable {
        type Item = i32;
        type IntoIter = std::vec::IntoIter<i32>;

        fn into_iter(self) -> Self::IntoIter {
            panic!("source must not be iterated");
        }
    }

    let result = checked::aggregate(Some(Untouchable), None::<Add>);
    assert!(result.unwrap_err().is_missing_argument());
}
