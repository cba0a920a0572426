//! Reduce functions: terminal operations with their configuration bound
//! ahead of time.
//!
//! A [`ReduceFn`] consumes a whole traversal and produces a single result. It
//! can be evaluated against any number of traversals, either directly with
//! [`ReduceFn::apply`] or through [`Sequence::evaluate`](crate::Sequence::evaluate).
//!
//! # Examples
//!
//! ```
//! use gensequence::{reducers, sequence};
//!
//! let total = reducers::reduce(|a: i32, b, _| a + b, None);
//!
//! assert_eq!(sequence(vec![1, 2, 3]).evaluate(&total), Some(6));
//! assert_eq!(sequence(Vec::<i32>::new()).evaluate(&total), None);
//! ```
use std::fmt;
use std::rc::Rc;

use crate::ops;
use crate::source::Cursor;

/// A terminal operation turning a traversal over `T` into an `R`.
pub struct ReduceFn<T, R> {
    f: Rc<dyn Fn(Cursor<T>) -> R>,
}

impl<T: 'static, R: 'static> ReduceFn<T, R> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Cursor<T>) -> R + 'static,
    {
        Self { f: Rc::new(f) }
    }

    pub fn apply(&self, cursor: Cursor<T>) -> R {
        (self.f)(cursor)
    }
}

impl<T, R> Clone for ReduceFn<T, R> {
    fn clone(&self) -> Self {
        Self {
            f: Rc::clone(&self.f),
        }
    }
}

impl<T, R> fmt::Debug for ReduceFn<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ReduceFn")
    }
}

pub fn all<T, F>(f: F) -> ReduceFn<T, bool>
where
    T: 'static,
    F: Fn(&T) -> bool + 'static,
{
    ReduceFn::new(move |cursor| ops::all(&f, cursor))
}

pub fn any<T, F>(f: F) -> ReduceFn<T, bool>
where
    T: 'static,
    F: Fn(&T) -> bool + 'static,
{
    ReduceFn::new(move |cursor| ops::any(&f, cursor))
}

pub fn count<T: 'static>() -> ReduceFn<T, usize> {
    ReduceFn::new(ops::count)
}

/// First element matching `f`, or `default` when nothing does.
pub fn first<T, F>(f: F, default: impl Into<Option<T>>) -> ReduceFn<T, Option<T>>
where
    T: Clone + 'static,
    F: Fn(&T) -> bool + 'static,
{
    let default = default.into();
    ReduceFn::new(move |cursor| ops::first(&f, default.clone(), cursor))
}

pub fn for_each<T, F>(f: F) -> ReduceFn<T, ()>
where
    T: 'static,
    F: Fn(T, usize) + 'static,
{
    ReduceFn::new(move |cursor| ops::for_each(&f, cursor))
}

pub fn max<T: PartialOrd + 'static>() -> ReduceFn<T, Option<T>> {
    ReduceFn::new(ops::max)
}

pub fn max_by<T, F, K>(selector: F) -> ReduceFn<T, Option<T>>
where
    T: 'static,
    F: Fn(&T) -> K + 'static,
    K: PartialOrd,
{
    ReduceFn::new(move |cursor| ops::max_by(&selector, cursor))
}

pub fn min<T: PartialOrd + 'static>() -> ReduceFn<T, Option<T>> {
    ReduceFn::new(ops::min)
}

pub fn min_by<T, F, K>(selector: F) -> ReduceFn<T, Option<T>>
where
    T: 'static,
    F: Fn(&T) -> K + 'static,
    K: PartialOrd,
{
    ReduceFn::new(move |cursor| ops::min_by(&selector, cursor))
}

/// Left fold where the accumulator has the element type. Without an initial
/// value the first element seeds it, and an empty input gives `None`.
pub fn reduce<T, F>(f: F, initial: impl Into<Option<T>>) -> ReduceFn<T, Option<T>>
where
    T: Clone + 'static,
    F: Fn(T, T, usize) -> T + 'static,
{
    let initial = initial.into();
    ReduceFn::new(move |cursor| ops::reduce(&f, initial.clone(), cursor))
}

pub fn fold<T, U, F>(f: F, initial: U) -> ReduceFn<T, U>
where
    T: 'static,
    U: Clone + 'static,
    F: Fn(U, T, usize) -> U + 'static,
{
    ReduceFn::new(move |cursor| ops::fold(&f, initial.clone(), cursor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    fn cursor<T: 'static>(values: Vec<T>) -> Cursor<T> {
        Box::new(values.into_iter())
    }

    #[test]
    fn reduce_fns_can_be_applied_repeatedly() {
        let sum = reduce(|a: i32, b, _| a + b, 0);

        assert_eq!(sum.apply(cursor(vec![1, 2, 3])), Some(6));
        assert_eq!(sum.clone().apply(cursor(vec![4])), Some(4));
    }

    #[test]
    fn reduce_without_initial_value() {
        let sum = reduce(|a: i32, b, _| a + b, None);

        assert_eq!(sum.apply(cursor(vec![1, 2, 3, 4, 5])), Some(15));
        assert_eq!(sum.apply(cursor(vec![])), None);
    }

    #[test]
    fn fold_into_another_type() {
        let joined = fold(|acc: String, v: i32, idx| format!("{acc}{idx}:{v} "), String::new());

        assert_eq!(joined.apply(cursor(vec![7, 8])), "0:7 1:8 ");
        assert_eq!(joined.apply(cursor(vec![])), "");
    }

    #[test]
    fn all_and_any_short_circuit() {
        let pulled = Rc::new(Cell::new(0));
        let counted = |values: Vec<i32>| -> Cursor<i32> {
            let pulled = Rc::clone(&pulled);
            Box::new(values.into_iter().inspect(move |_| pulled.set(pulled.get() + 1)))
        };

        assert!(any(|x: &i32| *x == 3).apply(counted(vec![1, 2, 3, 4])));
        assert_eq!(pulled.get(), 3);

        pulled.set(0);
        assert!(!all(|x: &i32| *x < 2).apply(counted(vec![1, 2, 3, 4])));
        assert_eq!(pulled.get(), 2);

        assert!(all(|x: &i32| *x > 100).apply(cursor(vec![])));
        assert!(!any(|x: &i32| *x > 100).apply(cursor(vec![])));
    }

    #[test]
    fn count_drains_the_input() {
        assert_eq!(count().apply(cursor(vec!['a', 'b', 'c'])), 3);
        assert_eq!(count::<char>().apply(cursor(vec![])), 0);
    }

    #[test]
    fn first_with_and_without_default() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];

        assert_eq!(first(|a: &f64| *a > 3.5, None).apply(cursor(values.clone())), Some(4.0));
        assert_eq!(first(|a: &f64| *a > 100.0, None).apply(cursor(values.clone())), None);
        assert_eq!(first(|a: &f64| *a > 100.0, -1.0).apply(cursor(values)), Some(-1.0));
    }

    #[test]
    fn for_each_sees_every_element_with_its_index() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let record = for_each({
            let seen = Rc::clone(&seen);
            move |v, idx| seen.borrow_mut().push((idx, v))
        });

        record.apply(cursor(vec!["a", "b"]));

        assert_eq!(*seen.borrow(), vec![(0, "a"), (1, "b")]);
    }

    #[test]
    fn max_and_min() {
        let words = vec!["pear", "fig", "banana"];

        assert_eq!(max().apply(cursor(vec![3, 9, 1])), Some(9));
        assert_eq!(min().apply(cursor(vec![3, 9, 1])), Some(1));
        assert_eq!(max_by(|w: &&str| w.len()).apply(cursor(words.clone())), Some("banana"));
        assert_eq!(min_by(|w: &&str| w.len()).apply(cursor(words)), Some("fig"));
        assert_eq!(max::<i32>().apply(cursor(vec![])), None);
    }

    #[test]
    fn max_keeps_a_leading_nan() {
        let best = max().apply(cursor(vec![f64::NAN, 1.0, 2.0])).unwrap_or(0.0);

        assert!(best.is_nan());
    }
}
