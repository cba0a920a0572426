use std::cell::RefCell;
use std::fmt;
use std::iter::FromIterator;
use std::rc::Rc;

use crate::operators::{self, ChainFn};
use crate::ops;
use crate::reducers::ReduceFn;
use crate::source::{Cursor, Source};

/// A lazy sequence of elements. **This should be your first step**
///
/// Operator methods never do any work: they return a new `Sequence` whose
/// source re-derives this one and layers a single extra stage on top.
/// Terminal methods (`to_vec`, `reduce`, `count`, ...) realize the source
/// from scratch each time they are called, so a sequence built over a
/// repeatable source can be consumed any number of times, while one built
/// over a single-use cursor is empty after its first traversal.
pub struct Sequence<T> {
    source: Source<T>,
    cursor: RefCell<Option<Cursor<T>>>,
}

impl<T: 'static> Sequence<T> {
    pub fn new(source: impl Into<Source<T>>) -> Self {
        Self {
            source: source.into(),
            cursor: RefCell::new(None),
        }
    }

    pub fn source(&self) -> &Source<T> {
        &self.source
    }

    /// Pulls the next element from a cursor owned by this sequence.
    ///
    /// The cursor is created on the first call and kept afterwards. It is
    /// independent of the traversals started by every other method.
    ///
    /// # Examples
    ///
    /// ```
    /// use gensequence::*;
    ///
    /// let seq = sequence(vec![1, 2]);
    ///
    /// assert_eq!(seq.next(), Some(1));
    /// assert_eq!(seq.to_vec(), vec![1, 2]);
    /// assert_eq!(seq.next(), Some(2));
    /// assert_eq!(seq.next(), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> Option<T> {
        let mut cursor = self.cursor.borrow_mut();
        cursor.get_or_insert_with(|| self.source.realize()).next()
    }

    /// Applies a chain function as one more stage.
    pub fn pipe<U: 'static>(&self, chain: ChainFn<T, U>) -> Sequence<U> {
        let source = self.source.clone();
        Sequence::new(Source::Factory(Rc::new(move || {
            chain.apply(source.realize())
        })))
    }

    /// Keeps the elements for which `f` returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gensequence::*;
    ///
    /// let result = sequence(0..10)
    ///     .filter(|x| x % 2 == 0)
    ///     .to_vec();
    ///
    /// assert_eq!(vec![0, 2, 4, 6, 8], result);
    /// ```
    pub fn filter<F>(&self, f: F) -> Sequence<T>
    where
        F: Fn(&T) -> bool + 'static,
    {
        self.pipe(operators::filter(f))
    }

    pub fn skip(&self, how_many: usize) -> Sequence<T> {
        self.pipe(operators::skip(how_many))
    }

    /// Yields at most `how_many` elements, without pulling any further ones
    /// from upstream.
    ///
    /// # Examples
    ///
    /// ```
    /// use gensequence::*;
    ///
    /// let result = sequence(0..)
    ///     .take(3)
    ///     .to_vec();
    ///
    /// assert_eq!(vec![0, 1, 2], result);
    /// ```
    pub fn take(&self, how_many: usize) -> Sequence<T> {
        self.pipe(operators::take(how_many))
    }

    /// Chains `other` after this sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use gensequence::*;
    ///
    /// let result = sequence([1, 2, 3, 4])
    ///     .concat(sequence([5, 6, 7, 8]))
    ///     .to_vec();
    ///
    /// assert_eq!(result, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    /// ```
    pub fn concat(&self, other: impl Into<Source<T>>) -> Sequence<T> {
        self.pipe(operators::concat(other))
    }

    pub fn concat_map<U, F, I>(&self, f: F) -> Sequence<U>
    where
        U: 'static,
        F: Fn(T) -> I + 'static,
        I: IntoIterator<Item = U> + 'static,
        I::IntoIter: 'static,
    {
        self.pipe(operators::concat_map(f))
    }

    /// Pairs every element with the next element of `other`, passing `None`
    /// once `other` runs out. The result is exactly as long as this sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use gensequence::*;
    ///
    /// let result = sequence(['a', 'b', 'c'])
    ///     .combine(|a, b: Option<i32>| format!("{}{}", a, b.unwrap_or(0)), vec![1, 2])
    ///     .to_vec();
    ///
    /// assert_eq!(result, vec!["a1", "b2", "c0"]);
    /// ```
    pub fn combine<U, V, F>(&self, f: F, other: impl Into<Source<U>>) -> Sequence<V>
    where
        U: 'static,
        V: 'static,
        F: Fn(T, Option<U>) -> V + 'static,
    {
        self.pipe(operators::combine(f, other))
    }

    /// Transforms each element by applying `f` to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use gensequence::*;
    ///
    /// let result = sequence([1, 2, 3, 4])
    ///     .map(|x| x * 2)
    ///     .to_vec();
    ///
    /// assert_eq!(vec![2, 4, 6, 8], result);
    /// ```
    pub fn map<U, F>(&self, f: F) -> Sequence<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        self.pipe(operators::map(f))
    }

    /// Emits the running accumulation of the elements.
    ///
    /// Without an initial value the first element is emitted as is and seeds
    /// the accumulator.
    ///
    /// # Examples
    ///
    /// ```
    /// use gensequence::*;
    ///
    /// let result = sequence([1, 2, 1, 3, 2, 1, 3])
    ///     .scan(|acc, v, _| acc + v, None)
    ///     .to_vec();
    ///
    /// assert_eq!(result, vec![1, 3, 4, 7, 9, 10, 13]);
    /// ```
    pub fn scan<F>(&self, f: F, initial: impl Into<Option<T>>) -> Sequence<T>
    where
        T: Clone,
        F: Fn(T, T, usize) -> T + 'static,
    {
        self.pipe(operators::scan(f, initial))
    }

    pub fn scan_from<U, F>(&self, f: F, initial: U) -> Sequence<U>
    where
        U: Clone + 'static,
        F: Fn(U, T, usize) -> U + 'static,
    {
        self.pipe(operators::scan_from(f, initial))
    }

    /// Runs a prepared terminal operation over a fresh traversal.
    pub fn evaluate<R: 'static>(&self, reducer: &ReduceFn<T, R>) -> R {
        reducer.apply(self.source.realize())
    }

    pub fn all<F>(&self, f: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        ops::all(f, self.source.realize())
    }

    pub fn any<F>(&self, f: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        ops::any(f, self.source.realize())
    }

    pub fn count(&self) -> usize {
        ops::count(self.source.realize())
    }

    pub fn first(&self) -> Option<T> {
        ops::first(|_| true, None, self.source.realize())
    }

    pub fn first_where<F>(&self, f: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        ops::first(f, None, self.source.realize())
    }

    /// The first element matching `f`, or `default` when there is none.
    pub fn first_or<F>(&self, f: F, default: T) -> T
    where
        F: FnMut(&T) -> bool,
    {
        match ops::first(f, None, self.source.realize()) {
            Some(item) => item,
            None => default,
        }
    }

    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(T, usize),
    {
        ops::for_each(f, self.source.realize())
    }

    pub fn max(&self) -> Option<T>
    where
        T: PartialOrd,
    {
        ops::max(self.source.realize())
    }

    /// The element with the largest key. Keys are compared with `>`, so see
    /// [`ops::max_by`] for how incomparable keys behave.
    pub fn max_by<F, K>(&self, selector: F) -> Option<T>
    where
        F: FnMut(&T) -> K,
        K: PartialOrd,
    {
        ops::max_by(selector, self.source.realize())
    }

    pub fn min(&self) -> Option<T>
    where
        T: PartialOrd,
    {
        ops::min(self.source.realize())
    }

    pub fn min_by<F, K>(&self, selector: F) -> Option<T>
    where
        F: FnMut(&T) -> K,
        K: PartialOrd,
    {
        ops::min_by(selector, self.source.realize())
    }

    /// Accumulates the elements. Without an initial value the first element
    /// is the seed, and an empty sequence reduces to `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gensequence::*;
    ///
    /// let seq = sequence([1, 2, 3, 4, 5]);
    ///
    /// assert_eq!(seq.reduce(|acc, x, _| acc + x, None), Some(15));
    /// assert_eq!(seq.reduce(|acc, x, _| acc + x, 10), Some(25));
    /// assert_eq!(seq.take(0).reduce(|acc, x, _| acc + x, None), None);
    /// ```
    pub fn reduce<F>(&self, f: F, initial: impl Into<Option<T>>) -> Option<T>
    where
        F: FnMut(T, T, usize) -> T,
    {
        ops::reduce(f, initial, self.source.realize())
    }

    /// Accumulates the elements into a value of another type.
    pub fn fold<U, F>(&self, f: F, initial: U) -> U
    where
        F: FnMut(U, T, usize) -> U,
    {
        ops::fold(f, initial, self.source.realize())
    }

    /// Like [`Sequence::fold`] into an iterable container, but continues
    /// lazily as a sequence over the container's elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use gensequence::*;
    /// use std::collections::BTreeSet;
    ///
    /// let result = sequence([3, 1, 2, 3, 1])
    ///     .reduce_to_sequence(|mut acc: BTreeSet<i32>, x, _| { acc.insert(x); acc }, BTreeSet::new())
    ///     .to_vec();
    ///
    /// assert_eq!(result, vec![1, 2, 3]);
    /// ```
    pub fn reduce_to_sequence<U, C, F>(&self, f: F, initial: C) -> Sequence<U>
    where
        U: 'static,
        C: IntoIterator<Item = U> + Clone + 'static,
        C::IntoIter: 'static,
        F: Fn(C, T, usize) -> C + 'static,
    {
        self.pipe(operators::reduce_to_sequence(f, initial))
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.source.realize().collect()
    }

    /// Starts a fresh traversal.
    pub fn to_iter(&self) -> Cursor<T> {
        self.source.realize()
    }

    pub fn collect<C>(&self) -> C
    where
        C: FromIterator<T>,
    {
        self.source.realize().collect()
    }
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            cursor: RefCell::new(None),
        }
    }
}

impl<T> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence").field("source", &self.source).finish()
    }
}

impl<'a, T: 'static> IntoIterator for &'a Sequence<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.source.realize()
    }
}

impl<T> From<Sequence<T>> for Source<T> {
    fn from(seq: Sequence<T>) -> Self {
        seq.source
    }
}

impl<T> From<&Sequence<T>> for Source<T> {
    fn from(seq: &Sequence<T>) -> Self {
        seq.source.clone()
    }
}

impl<T: 'static> From<Source<T>> for Sequence<T> {
    fn from(source: Source<T>) -> Self {
        Sequence::new(source)
    }
}
