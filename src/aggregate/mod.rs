//! Sequence aggregation (fold with optional seed and projection).
//!
//! This module provides the aggregation entry points in three layers:
//!
//! - [`engine`]: [`aggregate`], [`aggregate_with_seed`] and
//!   [`aggregate_with_projection`], taking every argument by value
//! - [`checked`]: the same three shapes with `Option` arguments, reporting
//!   absent ones as [`MissingArgumentError`]
//! - [`fallible`]: [`try_aggregate`], [`try_aggregate_with_seed`] and
//!   [`try_aggregate_with_projection`] over `Result`-yielding sources
//!
//! The [`Aggregate`] extension trait exposes the engine and fallible shapes
//! as methods on every [`IntoIterator`].
//!
//! # Semantics
//!
//! - The source is turned into a cursor once and read front to back.
//! - The accumulator function runs once per remaining element, in order.
//!   In the unseeded shape the first element is the initial accumulator and
//!   is not passed through the function.
//! - The projector runs once, on the final accumulator.
//! - Only the unseeded shape can fail on its own, with
//!   [`EmptySequenceError`]. Seeded shapes return the seed for an empty
//!   source.
//!
//! # Laws
//!
//! ```text
//! aggregate(s, f)                  == s[1..].fold(s[0], f)      // s non-empty
//! aggregate_with_seed([], seed, f) == seed
//! aggregate_with_projection(s, seed, f, p) == p(aggregate_with_seed(s, seed, f))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use foldwise::aggregate::Aggregate;
//!
//! assert_eq!(vec![5, 3, 2].aggregate(|accumulator, value| accumulator * value), Ok(30));
//! assert_eq!(Vec::<i32>::new().aggregate_with_seed(5, |x, y| x + y), 5);
//! ```

pub mod checked;
pub mod engine;
mod error;
pub mod fallible;
mod phase;

pub use engine::{aggregate, aggregate_with_projection, aggregate_with_seed};
pub use error::{AggregateError, EmptySequenceError, MissingArgumentError};
pub use fallible::{try_aggregate, try_aggregate_with_projection, try_aggregate_with_seed};
pub use phase::AggregatePhase;

/// Aggregation methods for every [`IntoIterator`].
///
/// Each method delegates to the free function of the same name and consumes
/// `self`, so the source is read exactly once.
///
/// # Examples
///
/// ```rust
/// use foldwise::aggregate::Aggregate;
///
/// let words = vec!["fold", "with", "seed"];
/// let sentence = words.aggregate_with_projection(
///     String::new(),
///     |mut text, word| {
///         if !text.is_empty() {
///             text.push(' ');
///         }
///         text.push_str(word);
///         text
///     },
///     |text| text.len(),
/// );
/// assert_eq!(sentence, 14);
/// ```
pub trait Aggregate: IntoIterator + Sized {
    /// Folds using the first element as the initial accumulator.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequenceError`] if the sequence yields no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::aggregate::Aggregate;
    ///
    /// assert_eq!([1, 4, 5].aggregate(|current, value| current * 2 + value), Ok(17));
    /// ```
    fn aggregate<F>(self, function: F) -> Result<Self::Item, EmptySequenceError>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        engine::aggregate(self, function)
    }

    /// Folds starting from `seed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldwise::aggregate::Aggregate;
    ///
    /// assert_eq!([1, 4, 5].aggregate_with_seed(5, |current, value| current * 2 + value), 57);
    /// ```
    fn aggregate_with_seed<A, F>(self, seed: A, function: F) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        engine::aggregate_with_seed(self, seed, function)
    }

    /// Folds starting from `seed`, then maps the final accumulator.
    fn aggregate_with_projection<A, R, F, P>(self, seed: A, function: F, projector: P) -> R
    where
        F: FnMut(A, Self::Item) -> A,
        P: FnOnce(A) -> R,
    {
        engine::aggregate_with_projection(self, seed, function, projector)
    }

    /// Fallible form of [`Aggregate::aggregate`].
    ///
    /// # Errors
    ///
    /// Returns the first error from the sequence or from `function`, or
    /// `E::from(EmptySequenceError)` if the sequence yields no elements.
    fn try_aggregate<T, E, F>(self, function: F) -> Result<T, E>
    where
        Self: IntoIterator<Item = Result<T, E>>,
        F: FnMut(T, T) -> Result<T, E>,
        E: From<EmptySequenceError>,
    {
        fallible::try_aggregate(self, function)
    }

    /// Fallible form of [`Aggregate::aggregate_with_seed`].
    ///
    /// # Errors
    ///
    /// Returns the first error from the sequence or from `function`.
    fn try_aggregate_with_seed<T, A, E, F>(self, seed: A, function: F) -> Result<A, E>
    where
        Self: IntoIterator<Item = Result<T, E>>,
        F: FnMut(A, T) -> Result<A, E>,
    {
        fallible::try_aggregate_with_seed(self, seed, function)
    }

    /// Fallible form of [`Aggregate::aggregate_with_projection`].
    ///
    /// # Errors
    ///
    /// Returns the first error from the sequence, from `function`, or from
    /// `projector`.
    fn try_aggregate_with_projection<T, A, R, E, F, P>(
        self,
        seed: A,
        function: F,
        projector: P,
    ) -> Result<R, E>
    where
        Self: IntoIterator<Item = Result<T, E>>,
        F: FnMut(A, T) -> Result<A, E>,
        P: FnOnce(A) -> Result<R, E>,
    {
        fallible::try_aggregate_with_projection(self, seed, function, projector)
    }
}

impl<I: IntoIterator> Aggregate for I {}
