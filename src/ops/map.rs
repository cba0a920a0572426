pub struct Map<I, F> {
    iter: I,
    f: F,
}

impl<I, F> Map<I, F> {
    pub(crate) fn new(iter: I, f: F) -> Self {
        Self { iter, f }
    }
}

impl<I, F, U> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(&mut self.f)
    }
}

/// Transforms each element by applying `f` to it.
pub fn map<I, F, U>(f: F, i: I) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    Map::new(i.into_iter(), f)
}
