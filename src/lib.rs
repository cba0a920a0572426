//! Lazy sequences with chainable operators.
//!
//! A [`Sequence`] wraps a source of elements and layers operators such as
//! `filter`, `map` or `scan` on top of it without doing any work. Elements are
//! only computed when a terminal operation (`to_vec`, `reduce`, `count`, ...)
//! walks the sequence, and a sequence over a repeatable source can be walked
//! any number of times.
//!
//! ```
//! use gensequence::*;
//!
//! let fib = sequence_from_fn(|| {
//!     let mut state = (0u64, 1u64);
//!     std::iter::from_fn(move || {
//!         state = (state.1, state.0 + state.1);
//!         Some(state.0)
//!     })
//! });
//!
//! let evens = fib.filter(|x| x % 2 == 0).take(4);
//! assert_eq!(evens.to_vec(), vec![2, 8, 34, 144]);
//! assert_eq!(evens.reduce(|a, b, _| a + b, None), Some(188));
//! ```
//!
//! Stages can also be prepared ahead of any data, either as
//! [chain functions](operators) or with a [`PipelineBuilder`], and
//! [`AsyncSequence`] covers sources that produce their elements
//! asynchronously.

mod async_sequence;
mod into_sequence;
mod iter;
mod sequence;
mod source;

pub mod adapters;
pub mod builder;
pub mod error;
pub mod operators;
pub mod ops;
pub mod reducers;

pub use adapters::*;
pub use async_sequence::{async_sequence, AsyncSequence, AsyncSource, SharedStream};
pub use builder::PipelineBuilder;
pub use error::Error;
pub use into_sequence::IntoSequence;
pub use iter::*;
pub use operators::ChainFn;
pub use reducers::ReduceFn;
pub use sequence::Sequence;
pub use source::{Cursor, Deferred, SharedCursor, Source};
