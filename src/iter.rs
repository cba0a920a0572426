use crate::sequence::Sequence;
use crate::source::Source;

/// Wraps a repeatable collection (a `Vec`, an array, a range, a map, ...)
/// into a `Sequence`. Every traversal starts over from a fresh clone.
pub fn sequence<I>(i: I) -> Sequence<I::Item>
where
    I: IntoIterator + Clone + 'static,
    I::Item: 'static,
    I::IntoIter: 'static,
{
    Sequence::new(Source::iterable(i))
}

/// Wraps a function producing a new iterable on every call. The resulting
/// sequence is repeatable as long as `f` keeps producing the same elements.
pub fn sequence_from_fn<F, I>(f: F) -> Sequence<I::Item>
where
    F: Fn() -> I + 'static,
    I: IntoIterator,
    I::Item: 'static,
    I::IntoIter: 'static,
{
    Sequence::new(Source::factory(f))
}

/// Wraps a single-use iterator. The first terminal operation drains it and
/// every later one observes an empty sequence.
pub fn sequence_from_cursor<I>(i: I) -> Sequence<I::Item>
where
    I: IntoIterator,
    I::Item: 'static,
    I::IntoIter: 'static,
{
    Sequence::new(Source::fixed(i))
}
