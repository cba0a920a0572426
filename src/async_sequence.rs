use std::cell::RefCell;
use std::fmt;
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::rc::Rc;

use futures::future::FutureExt;
use futures::stream::{self, LocalBoxStream, Stream, StreamExt};
use futures::task::{Context, Poll};

use crate::ops::ReduceAsync;

/// A single-use stream that can be shared between several async sequences.
pub struct SharedStream<T> {
    inner: Rc<RefCell<LocalBoxStream<'static, T>>>,
}

impl<T> Clone for SharedStream<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Stream for SharedStream<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.borrow_mut().as_mut().poll_next(cx)
    }
}

/// Asynchronous counterpart of [`Source`](crate::Source).
pub enum AsyncSource<T> {
    Fixed(SharedStream<T>),
    Factory(Rc<dyn Fn() -> LocalBoxStream<'static, T>>),
}

impl<T: 'static> AsyncSource<T> {
    pub fn realize(&self) -> LocalBoxStream<'static, T> {
        match self {
            AsyncSource::Fixed(stream) => {
                tracing::trace!("reusing shared stream");
                stream.clone().boxed_local()
            }
            AsyncSource::Factory(f) => {
                tracing::trace!("realizing async factory source");
                f()
            }
        }
    }
}

impl<T> Clone for AsyncSource<T> {
    fn clone(&self) -> Self {
        match self {
            AsyncSource::Fixed(stream) => AsyncSource::Fixed(stream.clone()),
            AsyncSource::Factory(f) => AsyncSource::Factory(Rc::clone(f)),
        }
    }
}

/// A lazy sequence over an asynchronous source.
///
/// Polling the sequence as a [`Stream`] advances a cursor it owns, created on
/// the first poll. [`AsyncSequence::stream`] and the reducers each start a
/// fresh traversal instead.
pub struct AsyncSequence<T> {
    source: AsyncSource<T>,
    cursor: Option<LocalBoxStream<'static, T>>,
}

impl<T: 'static> AsyncSequence<T> {
    pub fn new(source: AsyncSource<T>) -> Self {
        Self {
            source,
            cursor: None,
        }
    }

    /// Wraps a stream which can only be consumed once.
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = T> + 'static,
    {
        Self::new(AsyncSource::Fixed(SharedStream {
            inner: Rc::new(RefCell::new(stream.boxed_local())),
        }))
    }

    /// Wraps a function producing a new stream for every traversal.
    pub fn from_fn<F, S>(f: F) -> Self
    where
        F: Fn() -> S + 'static,
        S: Stream<Item = T> + 'static,
    {
        Self::new(AsyncSource::Factory(Rc::new(move || f().boxed_local())))
    }

    /// Wraps a repeatable collection of ready values.
    pub fn from_iterable<I>(i: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + 'static,
        I::IntoIter: 'static,
    {
        Self::from_fn(move || stream::iter(i.clone()))
    }

    /// Wraps a repeatable collection of deferred values. Each one is awaited,
    /// in order, before it is produced.
    pub fn from_futures<I, Fut>(i: I) -> Self
    where
        I: IntoIterator<Item = Fut> + Clone + 'static,
        I::IntoIter: 'static,
        Fut: Future<Output = T> + 'static,
    {
        Self::from_fn(move || stream::iter(i.clone()).then(|fut| fut))
    }

    /// Starts a fresh traversal.
    pub fn stream(&self) -> LocalBoxStream<'static, T> {
        self.source.realize()
    }

    /// Asynchronously accumulates the elements, awaiting each reducer result
    /// before the next element is pulled.
    ///
    /// Without an initial value the first element seeds the accumulator, and
    /// an empty sequence resolves to `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gensequence::*;
    ///
    /// # futures::executor::block_on(async {
    /// let result = AsyncSequence::from_iterable(vec![1, 2, 3, 4, 5])
    ///     .reduce_async(|acc, x, _| async move { acc + x }, None)
    ///     .await;
    ///
    /// assert_eq!(result, Some(15));
    /// # });
    /// ```
    pub fn reduce_async<F, Fut>(
        &self,
        f: F,
        initial: impl Into<Option<T>>,
    ) -> ReduceAsync<LocalBoxStream<'static, T>, F, Fut>
    where
        F: FnMut(T, T, usize) -> Fut,
        Fut: Future<Output = T>,
    {
        ReduceAsync::new(self.stream(), f, initial.into())
    }

    /// Asynchronously accumulates the elements into a value of another type.
    /// The initial value may itself be deferred.
    ///
    /// # Examples
    ///
    /// ```
    /// use gensequence::*;
    ///
    /// # futures::executor::block_on(async {
    /// let result = AsyncSequence::from_iterable(vec![1, 2, 3])
    ///     .fold_async(|acc: String, x, _| async move { format!("{acc}{x}") }, async { String::from(">") })
    ///     .await;
    ///
    /// assert_eq!(result, ">123");
    /// # });
    /// ```
    pub fn fold_async<U, F, Fut, Init>(&self, mut f: F, initial: Init) -> impl Future<Output = U>
    where
        F: FnMut(U, T, usize) -> Fut,
        Fut: Future<Output = U>,
        Init: IntoFuture<Output = U>,
    {
        let stream = self.stream();
        initial.into_future().then(move |initial| {
            stream
                .enumerate()
                .fold(initial, move |accumulator, (idx, item)| f(accumulator, item, idx))
        })
    }
}

impl<T: 'static> Stream for AsyncSequence<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        let source = &this.source;
        this.cursor
            .get_or_insert_with(|| source.realize())
            .as_mut()
            .poll_next(cx)
    }
}

impl<T> Clone for AsyncSequence<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            cursor: None,
        }
    }
}

impl<T> fmt::Debug for AsyncSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.source {
            AsyncSource::Fixed(_) => "Fixed",
            AsyncSource::Factory(_) => "Factory",
        };
        f.debug_struct("AsyncSequence").field("source", &kind).finish()
    }
}

/// Wraps a repeatable collection of values into an `AsyncSequence`.
pub fn async_sequence<I>(i: I) -> AsyncSequence<I::Item>
where
    I: IntoIterator + Clone + 'static,
    I::Item: 'static,
    I::IntoIter: 'static,
{
    AsyncSequence::from_iterable(i)
}
