//! Operator primitives working directly on anything iterable.
//!
//! Stages are small structs implementing [`Iterator`] that pull from their
//! upstream only when they are pulled from themselves. Reducers drain (or
//! partially drain) their input and return a value.

pub mod all;
pub mod any;
pub mod chain;
pub mod combine;
pub mod concat_map;
pub mod count;
pub mod filter;
pub mod first;
pub mod fold;
pub mod for_each;
pub mod map;
pub mod max;
pub mod min;
pub mod reduce_async;
pub mod scan;
pub mod skip;
pub mod take;

pub use all::*;
pub use any::*;
pub use chain::*;
pub use combine::*;
pub use concat_map::*;
pub use count::*;
pub use filter::*;
pub use first::*;
pub use fold::*;
pub use for_each::*;
pub use map::*;
pub use max::*;
pub use min::*;
pub use reduce_async::*;
pub use scan::*;
pub use skip::*;
pub use take::*;
