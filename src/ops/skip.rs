pub struct Skip<I> {
    iter: I,
    how_many: usize,
}

impl<I> Skip<I> {
    pub(crate) fn new(iter: I, how_many: usize) -> Self {
        Self { iter, how_many }
    }
}

impl<I: Iterator> Iterator for Skip<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while self.how_many > 0 {
            self.how_many -= 1;
            self.iter.next()?;
        }
        self.iter.next()
    }
}

/// Yields everything after the first `how_many` elements.
pub fn skip<I: IntoIterator>(how_many: usize, i: I) -> Skip<I::IntoIter> {
    Skip::new(i.into_iter(), how_many)
}
