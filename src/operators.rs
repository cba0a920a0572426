//! Chain functions: operator stages with their configuration bound ahead of
//! time, ready to be applied to any traversal.
//!
//! A [`ChainFn`] does nothing until it is applied, and it can be applied any
//! number of times. This is what [`Sequence`](crate::Sequence) builds its
//! fluent methods on and what a [`PipelineBuilder`](crate::PipelineBuilder)
//! stores.
//!
//! # Examples
//!
//! ```
//! use gensequence::operators::{filter, map};
//! use gensequence::{pipe, sequence};
//!
//! let odd_squares = pipe!(filter(|x: &i32| x % 2 == 1), map(|x: i32| x * x));
//!
//! assert_eq!(sequence(vec![1, 2, 3, 4, 5]).pipe(odd_squares).to_vec(), vec![1, 9, 25]);
//! ```
use std::fmt;
use std::iter;
use std::rc::Rc;

use crate::ops;
use crate::source::{Cursor, Source};

/// A stage transforming a traversal over `T` into a traversal over `U`.
pub struct ChainFn<T, U = T> {
    f: Rc<dyn Fn(Cursor<T>) -> Cursor<U>>,
}

impl<T: 'static, U: 'static> ChainFn<T, U> {
    pub fn new<F, I>(f: F) -> Self
    where
        F: Fn(Cursor<T>) -> I + 'static,
        I: IntoIterator<Item = U>,
        I::IntoIter: 'static,
    {
        Self {
            f: Rc::new(move |cursor| Box::new(f(cursor).into_iter()) as Cursor<U>),
        }
    }

    pub fn apply(&self, cursor: Cursor<T>) -> Cursor<U> {
        (self.f)(cursor)
    }

    /// Runs `next` on whatever this stage produces.
    pub fn then<V: 'static>(self, next: ChainFn<U, V>) -> ChainFn<T, V> {
        let first = self.f;
        ChainFn {
            f: Rc::new(move |cursor| next.apply(first(cursor))),
        }
    }
}

impl<T, U> Clone for ChainFn<T, U> {
    fn clone(&self) -> Self {
        Self {
            f: Rc::clone(&self.f),
        }
    }
}

impl<T, U> fmt::Debug for ChainFn<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChainFn")
    }
}

/// A stage passing every element through untouched.
pub fn identity<T: 'static>() -> ChainFn<T> {
    ChainFn {
        f: Rc::new(|cursor| cursor),
    }
}

/// Composes stages left to right. Missing (`None`) stages are skipped, and an
/// empty list composes to [`identity`].
pub fn pipe<T, I>(fns: I) -> ChainFn<T>
where
    T: 'static,
    I: IntoIterator<Item = Option<ChainFn<T>>>,
{
    let fns: Vec<ChainFn<T>> = fns.into_iter().flatten().collect();
    ChainFn {
        f: Rc::new(move |cursor| fns.iter().fold(cursor, |cursor, f| f.apply(cursor))),
    }
}

/// Composes chain functions of possibly different types, left to right.
///
/// `pipe!()` is the identity stage and `pipe!(f)` is `f` itself.
#[macro_export]
macro_rules! pipe {
    () => { $crate::operators::identity() };
    ($a:expr $(,)?) => { $a };
    ($a:expr, $b:expr $(, $rest:expr)* $(,)?) => {
        $crate::pipe!($crate::operators::ChainFn::then($a, $b) $(, $rest)*)
    };
}

pub fn filter<T, F>(f: F) -> ChainFn<T>
where
    T: 'static,
    F: Fn(&T) -> bool + 'static,
{
    let f = Rc::new(f);
    ChainFn::new(move |cursor| {
        let f = Rc::clone(&f);
        ops::filter(move |t: &T| f(t), cursor)
    })
}

/// Keeps only the first element, or nothing when the input is empty.
pub fn first<T: 'static>() -> ChainFn<T> {
    take(1)
}

/// Keeps only the first element matching `f`.
pub fn first_where<T, F>(f: F) -> ChainFn<T>
where
    T: 'static,
    F: Fn(&T) -> bool + 'static,
{
    filter(f).then(take(1))
}

pub fn skip<T: 'static>(how_many: usize) -> ChainFn<T> {
    ChainFn::new(move |cursor| ops::skip(how_many, cursor))
}

pub fn take<T: 'static>(how_many: usize) -> ChainFn<T> {
    ChainFn::new(move |cursor| ops::take(how_many, cursor))
}

/// Appends `other` once the input runs out. `other` is only realized when it
/// is reached.
pub fn concat<T: 'static>(other: impl Into<Source<T>>) -> ChainFn<T> {
    let other = other.into();
    ChainFn::new(move |cursor| ops::concat(cursor, other.deferred()))
}

pub fn concat_map<T, U, F, I>(f: F) -> ChainFn<T, U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> I + 'static,
    I: IntoIterator<Item = U> + 'static,
    I::IntoIter: 'static,
{
    let f = Rc::new(f);
    ChainFn::new(move |cursor| {
        let f = Rc::clone(&f);
        ops::concat_map(move |t| f(t), cursor)
    })
}

pub fn combine<T, U, V, F>(f: F, other: impl Into<Source<U>>) -> ChainFn<T, V>
where
    T: 'static,
    U: 'static,
    V: 'static,
    F: Fn(T, Option<U>) -> V + 'static,
{
    let f = Rc::new(f);
    let other = other.into();
    ChainFn::new(move |cursor| {
        let f = Rc::clone(&f);
        ops::combine(move |t, u| f(t, u), cursor, other.deferred())
    })
}

pub fn map<T, U, F>(f: F) -> ChainFn<T, U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + 'static,
{
    let f = Rc::new(f);
    ChainFn::new(move |cursor| {
        let f = Rc::clone(&f);
        ops::map(move |t| f(t), cursor)
    })
}

/// Calls `f` on every element as it passes through, unchanged.
pub fn tap<T, F>(f: F) -> ChainFn<T>
where
    T: 'static,
    F: Fn(&T) + 'static,
{
    let f = Rc::new(f);
    ChainFn::new(move |cursor| {
        let f = Rc::clone(&f);
        cursor.inspect(move |t| f(t))
    })
}

pub fn scan<T, F>(f: F, initial: impl Into<Option<T>>) -> ChainFn<T>
where
    T: Clone + 'static,
    F: Fn(T, T, usize) -> T + 'static,
{
    let f = Rc::new(f);
    let initial = initial.into();
    ChainFn::new(move |cursor| {
        let f = Rc::clone(&f);
        ops::scan(move |acc, t, idx| f(acc, t, idx), initial.clone(), cursor)
    })
}

pub fn scan_from<T, U, F>(f: F, initial: U) -> ChainFn<T, U>
where
    T: 'static,
    U: Clone + 'static,
    F: Fn(U, T, usize) -> U + 'static,
{
    let f = Rc::new(f);
    ChainFn::new(move |cursor| {
        let f = Rc::clone(&f);
        ops::scan_from(move |acc, t, idx| f(acc, t, idx), initial.clone(), cursor)
    })
}

/// Reduces the input to its final accumulator, produced as the only element.
/// Without an initial value an empty input produces nothing. The fold runs on
/// the first pull.
pub fn reduce<T, F>(f: F, initial: impl Into<Option<T>>) -> ChainFn<T>
where
    T: Clone + 'static,
    F: Fn(T, T, usize) -> T + 'static,
{
    let f = Rc::new(f);
    let initial = initial.into();
    ChainFn::new(move |cursor| {
        let f = Rc::clone(&f);
        let initial = initial.clone();
        iter::once_with(move || ops::reduce(|acc, t, idx| f(acc, t, idx), initial, cursor)).flatten()
    })
}

/// Like [`reduce`], with an accumulator of another type. Always produces
/// exactly one element.
pub fn fold<T, U, F>(f: F, initial: U) -> ChainFn<T, U>
where
    T: 'static,
    U: Clone + 'static,
    F: Fn(U, T, usize) -> U + 'static,
{
    let f = Rc::new(f);
    ChainFn::new(move |cursor| {
        let f = Rc::clone(&f);
        let initial = initial.clone();
        iter::once_with(move || ops::fold(|acc, t, idx| f(acc, t, idx), initial, cursor))
    })
}

/// Folds the whole input into a container and continues with the container's
/// elements. The fold runs when the stage is first applied.
pub fn reduce_to_sequence<T, U, C, F>(f: F, initial: C) -> ChainFn<T, U>
where
    T: 'static,
    U: 'static,
    C: IntoIterator<Item = U> + Clone + 'static,
    C::IntoIter: 'static,
    F: Fn(C, T, usize) -> C + 'static,
{
    let f = Rc::new(f);
    ChainFn::new(move |cursor| ops::fold(|acc, t, idx| f(acc, t, idx), initial.clone(), cursor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn run<T: 'static, U: 'static>(chain: &ChainFn<T, U>, input: Vec<T>) -> Vec<U> {
        chain.apply(Box::new(input.into_iter())).collect()
    }

    #[test]
    fn chain_functions_can_be_applied_repeatedly() {
        let double = map(|x: i32| x * 2);

        assert_eq!(run(&double, vec![1, 2, 3]), vec![2, 4, 6]);
        assert_eq!(run(&double, vec![4]), vec![8]);
    }

    #[test]
    fn pipe_of_nothing_is_identity() {
        assert_eq!(run(&pipe(Vec::new()), vec![1, 2, 3]), vec![1, 2, 3]);
        assert_eq!(run(&pipe!(), vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn pipe_of_one_behaves_as_it() {
        assert_eq!(run(&pipe([Some(take(2))]), vec![1, 2, 3]), vec![1, 2]);
        assert_eq!(run(&pipe!(take(2)), vec![1, 2, 3]), vec![1, 2]);
    }

    #[test]
    fn pipe_skips_missing_stages() {
        let only_odd = false;
        let chain = pipe([
            Some(map(|x: i32| x + 1)),
            only_odd.then(|| filter(|x: &i32| x % 2 == 1)),
            Some(skip(1)),
        ]);

        assert_eq!(run(&chain, vec![1, 2, 3]), vec![3, 4]);
    }

    #[test]
    fn pipe_macro_changes_types() {
        let chain = pipe!(
            map(|x: u32| x + 9),
            map(|x: u32| char::from_digit(x, 16).unwrap_or('?')),
            map(|c: char| c.to_string()),
        );

        assert_eq!(run(&chain, vec![1, 2, 6]), vec!["a", "b", "f"]);
    }

    #[test]
    fn concat_realizes_its_tail_lazily() {
        let realized = Rc::new(Cell::new(false));
        let tail = Source::factory({
            let realized = Rc::clone(&realized);
            move || {
                realized.set(true);
                vec![9]
            }
        });
        let chain = concat(tail);

        let mut cursor = chain.apply(Box::new(vec![1].into_iter()));
        assert_eq!(cursor.next(), Some(1));
        assert!(!realized.get());
        assert_eq!(cursor.next(), Some(9));
        assert!(realized.get());
    }

    #[test]
    fn combine_with_a_longer_input() {
        let chain = combine(|a: i32, b: Option<&str>| format!("{}{}", b.unwrap_or(""), a), vec!["a", "b"]);

        assert_eq!(run(&chain, vec![1, 2, 3]), vec!["a1", "b2", "3"]);
    }

    #[test]
    fn reduce_to_sequence_collects_into_a_container() {
        let chain = reduce_to_sequence(
            |mut acc: Vec<i32>, v: i32, _| {
                if !acc.contains(&v) {
                    acc.push(v);
                }
                acc
            },
            Vec::new(),
        );

        assert_eq!(run(&chain, vec![1, 2, 1, 3, 2]), vec![1, 2, 3]);
    }

    #[test]
    fn tap_passes_elements_through() {
        let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
        let chain = tap({
            let seen = Rc::clone(&seen);
            move |x: &i32| seen.borrow_mut().push(*x)
        });

        let mut cursor = chain.apply(Box::new(vec![1, 2, 3].into_iter()));
        assert_eq!(cursor.next(), Some(1));
        assert_eq!(*seen.borrow(), vec![1]);
        assert_eq!(cursor.collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn first_stages() {
        assert_eq!(run(&first(), vec![4, 5, 6]), vec![4]);
        assert_eq!(run(&first(), Vec::<i32>::new()), Vec::<i32>::new());
        assert_eq!(run(&first_where(|x: &i32| *x > 4), vec![4, 5, 6]), vec![5]);
        assert_eq!(run(&first_where(|x: &i32| *x > 9), vec![4, 5, 6]), Vec::<i32>::new());
    }

    #[test]
    fn first_where_stops_pulling_after_a_match() {
        let pulled = Rc::new(Cell::new(0));
        let source = {
            let pulled = Rc::clone(&pulled);
            (1..).inspect(move |_| pulled.set(pulled.get() + 1))
        };

        let result: Vec<_> = first_where(|x: &i32| x % 3 == 0).apply(Box::new(source)).collect();

        assert_eq!(result, vec![3]);
        assert_eq!(pulled.get(), 3);
    }

    #[test]
    fn reduce_stage_produces_the_final_accumulator() {
        let sum = reduce(|a: i32, b, _| a + b, None);
        let seeded = reduce(|a: i32, b, _| a + b, 10);

        assert_eq!(run(&sum, vec![1, 2, 3, 4, 5]), vec![15]);
        assert_eq!(run(&sum, vec![]), Vec::<i32>::new());
        assert_eq!(run(&seeded, vec![1, 2]), vec![13]);
        assert_eq!(run(&seeded, vec![]), vec![10]);
    }

    #[test]
    fn reduce_stage_waits_for_the_first_pull() {
        let pulled = Rc::new(Cell::new(0));
        let source = {
            let pulled = Rc::clone(&pulled);
            vec![1, 2, 3].into_iter().inspect(move |_| pulled.set(pulled.get() + 1))
        };

        let mut cursor = reduce(|a: i32, b, _| a + b, None).apply(Box::new(source));
        assert_eq!(pulled.get(), 0);
        assert_eq!(cursor.next(), Some(6));
        assert_eq!(pulled.get(), 3);
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn fold_stage_always_produces_one_element() {
        let lengths = fold(|acc: usize, s: &'static str, _| acc + s.len(), 0);

        assert_eq!(run(&lengths, vec!["ab", "cde"]), vec![5]);
        assert_eq!(run(&lengths, vec![]), vec![0]);
    }
}
