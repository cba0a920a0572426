pub struct Combine<I, J, F> {
    iter: I,
    other: J,
    f: F,
}

impl<I, J, F> Combine<I, J, F> {
    pub(crate) fn new(iter: I, other: J, f: F) -> Self {
        Self { iter, other, f }
    }
}

impl<I, J, F, V> Iterator for Combine<I, J, F>
where
    I: Iterator,
    J: Iterator,
    F: FnMut(I::Item, Option<J::Item>) -> V,
{
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let paired = self.other.next();
        Some((self.f)(item, paired))
    }
}

/// Pairs each element of `i` with the next unconsumed element of `j`.
///
/// Runs for exactly as long as `i` does: once `j` runs dry `f` receives
/// `None`, and whatever `j` has left over once `i` finishes is never pulled.
pub fn combine<I, J, F, V>(f: F, i: I, j: J) -> Combine<I::IntoIter, J::IntoIter, F>
where
    I: IntoIterator,
    J: IntoIterator,
    F: FnMut(I::Item, Option<J::Item>) -> V,
{
    Combine::new(i.into_iter(), j.into_iter(), f)
}
