use futures::ready;
use futures::stream::Stream;
use futures::task::{Context, Poll};
use pin_project::pin_project;
use std::future::Future;
use std::mem;
use std::pin::Pin;

enum State<T> {
    Unseeded,
    Seeded(T),
    Reducing,
    Done,
}

/// Asynchronous left fold over a stream, where the accumulator has the
/// element type.
///
/// Each step waits for the next element, then for the future returned by the
/// reducer before pulling again, so elements are combined strictly in stream
/// order. Without an initial value the first element seeds the accumulator.
#[pin_project]
pub struct ReduceAsync<S, F, Fut>
where
    S: Stream,
{
    #[pin]
    stream: S,
    f: F,

    #[pin]
    pending: Option<Fut>,
    state: State<S::Item>,
    index: usize,
}

impl<S, F, Fut> ReduceAsync<S, F, Fut>
where
    S: Stream,
{
    pub(crate) fn new(stream: S, f: F, initial: Option<S::Item>) -> Self {
        Self {
            stream,
            f,
            pending: None,
            state: initial.map_or(State::Unseeded, State::Seeded),
            index: 0,
        }
    }
}

impl<S, F, Fut> Future for ReduceAsync<S, F, Fut>
where
    S: Stream,
    F: FnMut(S::Item, S::Item, usize) -> Fut,
    Fut: Future<Output = S::Item>,
{
    type Output = Option<S::Item>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.as_mut().project();

        loop {
            if let State::Done = this.state {
                return Poll::Pending;
            }

            if let Some(pending) = this.pending.as_mut().as_pin_mut() {
                let value = ready!(pending.poll(cx));
                this.pending.set(None);
                tracing::trace!(index = *this.index, "async reduce step resolved");
                *this.state = State::Seeded(value);
                *this.index += 1;
                continue;
            }

            let item = ready!(this.stream.as_mut().poll_next(cx));
            match (mem::replace(this.state, State::Reducing), item) {
                (State::Seeded(accumulator), Some(item)) => {
                    let next = (this.f)(accumulator, item, *this.index);
                    this.pending.set(Some(next));
                }
                (State::Unseeded, Some(item)) => {
                    *this.state = State::Seeded(item);
                    *this.index = 1;
                }
                (State::Seeded(accumulator), None) => {
                    *this.state = State::Done;
                    return Poll::Ready(Some(accumulator));
                }
                _ => {
                    *this.state = State::Done;
                    return Poll::Ready(None);
                }
            }
        }
    }
}
