use crate::iter::sequence;
use crate::sequence::Sequence;

pub trait IntoSequence: IntoIterator {
    fn into_sequence(self) -> Sequence<Self::Item>
    where
        Self: Sized;
}

impl<T> IntoSequence for T
where
    T: IntoIterator + Clone + 'static,
    T::Item: 'static,
    T::IntoIter: 'static,
{
    fn into_sequence(self) -> Sequence<T::Item> {
        sequence(self)
    }
}
