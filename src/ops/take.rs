pub struct Take<I> {
    iter: I,
    how_many: usize,
    how_many_provided: usize,
}

impl<I> Take<I> {
    pub(crate) fn new(iter: I, how_many: usize) -> Self {
        Self {
            iter,
            how_many,
            how_many_provided: 0,
        }
    }
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.how_many_provided < self.how_many {
            self.how_many_provided += 1;
            self.iter.next()
        } else {
            None
        }
    }
}

/// Yields at most `how_many` leading elements. Never pulls more than
/// `how_many` elements from upstream.
pub fn take<I: IntoIterator>(how_many: usize, i: I) -> Take<I::IntoIter> {
    Take::new(i.into_iter(), how_many)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn take_until_a_limit() {
        assert_eq!(take(2, 0..100).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(take(0, 0..100).count(), 0);
    }

    #[test]
    fn take_does_not_over_consume() {
        let pulled = Cell::new(0);
        let source = (0..).inspect(|_| pulled.set(pulled.get() + 1));

        assert_eq!(take(3, source).count(), 3);
        assert_eq!(pulled.get(), 3);
    }
}
