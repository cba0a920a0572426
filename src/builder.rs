//! Pipelines defined before their data exists.
//!
//! A [`PipelineBuilder`] is immutable. Every method returns a new builder one
//! stage longer and leaves the receiver alone, so builders sharing a prefix
//! never affect each other.
//!
//! # Examples
//!
//! ```
//! use gensequence::builder;
//!
//! let evens_doubled = builder::filter(|x: &i32| x % 2 == 0).map(|x| x * 2);
//!
//! assert_eq!(evens_doubled.build(vec![1, 2, 3, 4]).to_vec(), vec![4, 8]);
//! assert_eq!(evens_doubled.build(vec![6]).to_vec(), vec![12]);
//! ```
use std::fmt;

use crate::operators::{self, ChainFn};
use crate::sequence::Sequence;
use crate::source::Source;

pub struct PipelineBuilder<S, T = S> {
    chain: ChainFn<S, T>,
    stages: usize,
}

impl<S: 'static, T: 'static> PipelineBuilder<S, T> {
    pub fn new(chain: ChainFn<S, T>) -> Self {
        Self { chain, stages: 1 }
    }

    /// Number of stages applied by [`PipelineBuilder::build`].
    pub fn stages(&self) -> usize {
        self.stages
    }

    /// The stages composed into a single chain function.
    pub fn chain(&self) -> ChainFn<S, T> {
        self.chain.clone()
    }

    pub fn pipe<U: 'static>(&self, chain: ChainFn<T, U>) -> PipelineBuilder<S, U> {
        PipelineBuilder {
            chain: self.chain.clone().then(chain),
            stages: self.stages + 1,
        }
    }

    pub fn filter<F>(&self, f: F) -> PipelineBuilder<S, T>
    where
        F: Fn(&T) -> bool + 'static,
    {
        self.pipe(operators::filter(f))
    }

    pub fn skip(&self, how_many: usize) -> PipelineBuilder<S, T> {
        self.pipe(operators::skip(how_many))
    }

    pub fn take(&self, how_many: usize) -> PipelineBuilder<S, T> {
        self.pipe(operators::take(how_many))
    }

    pub fn concat(&self, other: impl Into<Source<T>>) -> PipelineBuilder<S, T> {
        self.pipe(operators::concat(other))
    }

    pub fn concat_map<U, F, I>(&self, f: F) -> PipelineBuilder<S, U>
    where
        U: 'static,
        F: Fn(T) -> I + 'static,
        I: IntoIterator<Item = U> + 'static,
        I::IntoIter: 'static,
    {
        self.pipe(operators::concat_map(f))
    }

    pub fn combine<U, V, F>(&self, f: F, other: impl Into<Source<U>>) -> PipelineBuilder<S, V>
    where
        U: 'static,
        V: 'static,
        F: Fn(T, Option<U>) -> V + 'static,
    {
        self.pipe(operators::combine(f, other))
    }

    pub fn map<U, F>(&self, f: F) -> PipelineBuilder<S, U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        self.pipe(operators::map(f))
    }

    pub fn scan<F>(&self, f: F, initial: impl Into<Option<T>>) -> PipelineBuilder<S, T>
    where
        T: Clone,
        F: Fn(T, T, usize) -> T + 'static,
    {
        self.pipe(operators::scan(f, initial))
    }

    pub fn scan_from<U, F>(&self, f: F, initial: U) -> PipelineBuilder<S, U>
    where
        U: Clone + 'static,
        F: Fn(U, T, usize) -> U + 'static,
    {
        self.pipe(operators::scan_from(f, initial))
    }

    /// Wraps `source` in a [`Sequence`] and applies every stage to it, in
    /// order. The builder can be built again against other sources.
    pub fn build(&self, source: impl Into<Source<S>>) -> Sequence<T> {
        tracing::trace!(stages = self.stages, "building pipeline");
        Sequence::new(source).pipe(self.chain.clone())
    }
}

impl<S, T> Clone for PipelineBuilder<S, T> {
    fn clone(&self) -> Self {
        Self {
            chain: self.chain.clone(),
            stages: self.stages,
        }
    }
}

impl<S, T> fmt::Debug for PipelineBuilder<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineBuilder")
            .field("stages", &self.stages)
            .finish()
    }
}

pub fn pipe<S: 'static, T: 'static>(chain: ChainFn<S, T>) -> PipelineBuilder<S, T> {
    PipelineBuilder::new(chain)
}

pub fn filter<T, F>(f: F) -> PipelineBuilder<T>
where
    T: 'static,
    F: Fn(&T) -> bool + 'static,
{
    pipe(operators::filter(f))
}

pub fn skip<T: 'static>(how_many: usize) -> PipelineBuilder<T> {
    pipe(operators::skip(how_many))
}

pub fn take<T: 'static>(how_many: usize) -> PipelineBuilder<T> {
    pipe(operators::take(how_many))
}

pub fn concat<T: 'static>(other: impl Into<Source<T>>) -> PipelineBuilder<T> {
    pipe(operators::concat(other))
}

pub fn concat_map<T, U, F, I>(f: F) -> PipelineBuilder<T, U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> I + 'static,
    I: IntoIterator<Item = U> + 'static,
    I::IntoIter: 'static,
{
    pipe(operators::concat_map(f))
}

pub fn combine<T, U, V, F>(f: F, other: impl Into<Source<U>>) -> PipelineBuilder<T, V>
where
    T: 'static,
    U: 'static,
    V: 'static,
    F: Fn(T, Option<U>) -> V + 'static,
{
    pipe(operators::combine(f, other))
}

pub fn map<T, U, F>(f: F) -> PipelineBuilder<T, U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + 'static,
{
    pipe(operators::map(f))
}

pub fn scan<T, F>(f: F, initial: impl Into<Option<T>>) -> PipelineBuilder<T>
where
    T: Clone + 'static,
    F: Fn(T, T, usize) -> T + 'static,
{
    pipe(operators::scan(f, initial))
}

pub fn scan_from<T, U, F>(f: F, initial: U) -> PipelineBuilder<T, U>
where
    T: 'static,
    U: Clone + 'static,
    F: Fn(U, T, usize) -> U + 'static,
{
    pipe(operators::scan_from(f, initial))
}
