use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A single traversal over the elements of a sequence.
pub type Cursor<T> = Box<dyn Iterator<Item = T>>;

/// A single-use cursor that can be shared between several sequences.
///
/// Every clone advances the same underlying iterator, so whatever one holder
/// consumes is gone for all the others.
pub struct SharedCursor<T> {
    inner: Rc<RefCell<Cursor<T>>>,
}

impl<T> SharedCursor<T> {
    pub fn new<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self {
            inner: Rc::new(RefCell::new(Box::new(iter.into_iter()))),
        }
    }
}

impl<T> Clone for SharedCursor<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Iterator for SharedCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.borrow_mut().next()
    }
}

/// Where the elements of a sequence come from.
///
/// A `Factory` builds a brand new cursor every time it is realized, which is
/// what makes a sequence repeatable. A `Fixed` source hands out the same
/// single-use cursor on every realization, so it can be drained exactly once.
pub enum Source<T> {
    Fixed(SharedCursor<T>),
    Factory(Rc<dyn Fn() -> Cursor<T>>),
}

impl<T: 'static> Source<T> {
    /// Wraps an iterator that can only be traversed once.
    pub fn fixed<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Source::Fixed(SharedCursor::new(iter))
    }

    /// Wraps a function producing a fresh iterable on every call.
    pub fn factory<F, I>(f: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Source::Factory(Rc::new(move || Box::new(f().into_iter()) as Cursor<T>))
    }

    /// Wraps a collection that can be cloned and iterated again, such as a
    /// `Vec`, an array or a range.
    pub fn iterable<I>(i: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + 'static,
        I::IntoIter: 'static,
    {
        Source::factory(move || i.clone())
    }

    /// Starts a traversal.
    pub fn realize(&self) -> Cursor<T> {
        match self {
            Source::Fixed(cursor) => {
                tracing::trace!("reusing shared cursor");
                Box::new(cursor.clone())
            }
            Source::Factory(f) => {
                tracing::trace!("realizing factory source");
                f()
            }
        }
    }

    /// A cursor that only realizes this source on its first pull.
    pub fn deferred(&self) -> Deferred<T> {
        Deferred {
            source: self.clone(),
            cursor: None,
        }
    }

    pub fn is_repeatable(&self) -> bool {
        matches!(self, Source::Factory(_))
    }
}

/// Cursor over a [`Source`] which is realized lazily, on the first pull.
pub struct Deferred<T> {
    source: Source<T>,
    cursor: Option<Cursor<T>>,
}

impl<T: 'static> Iterator for Deferred<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let source = &self.source;
        self.cursor.get_or_insert_with(|| source.realize()).next()
    }
}

impl<T> Clone for Source<T> {
    fn clone(&self) -> Self {
        match self {
            Source::Fixed(cursor) => Source::Fixed(cursor.clone()),
            Source::Factory(f) => Source::Factory(Rc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for Source<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Fixed(_) => f.write_str("Source::Fixed"),
            Source::Factory(_) => f.write_str("Source::Factory"),
        }
    }
}

impl<T: Clone + 'static> From<Vec<T>> for Source<T> {
    fn from(v: Vec<T>) -> Self {
        Source::iterable(v)
    }
}
