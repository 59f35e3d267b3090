//! # foldwise
//!
//! A single-pass sequence aggregation primitive for Rust.
//!
//! ## Overview
//!
//! `foldwise` folds an ordered, finite, lazily produced sequence into one
//! value. Three call shapes are provided:
//!
//! - **Unseeded**: the first element becomes the initial accumulator
//! - **Seeded**: the caller supplies the initial accumulator, which may have a
//!   different type from the elements
//! - **Seeded with projection**: as above, then the final accumulator is
//!   mapped into a result type
//!
//! Higher-level reductions such as sum, count, min/max and string joining are
//! all specializations of the seeded and projected shapes.
//!
//! ## Layers
//!
//! - [`aggregate::engine`]: argument presence enforced by the type system
//! - [`aggregate::checked`]: every required argument is an `Option`, absent
//!   arguments are reported as [`aggregate::MissingArgumentError`]
//! - [`aggregate::fallible`]: sources and functions that may fail with a
//!   caller-chosen error type, propagated unchanged
//!
//! ## Feature Flags
//!
//! - `tracing`: emit phase transitions and failures through `tracing` (default)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use foldwise::prelude::*;
//!
//! let folded = vec![1, 4, 5].aggregate(|current, value| current * 2 + value);
//! assert_eq!(folded, Ok(17));
//!
//! let text = vec![1, 4, 5].aggregate_with_projection(
//!     5,
//!     |current, value| current * 2 + value,
//!     |result: i32| result.to_string(),
//! );
//! assert_eq!(text, "57");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the [`Aggregate`](crate::aggregate::Aggregate) extension trait
/// and the error types.
///
/// # Usage
///
/// ```rust
/// use foldwise::prelude::*;
/// ```
pub mod prelude {
    pub use crate::aggregate::{
        Aggregate, AggregateError, AggregatePhase, EmptySequenceError, MissingArgumentError,
    };
}

pub mod aggregate;
