pub struct Filter<I, F> {
    iter: I,
    f: F,
}

impl<I, F> Filter<I, F> {
    pub(crate) fn new(iter: I, f: F) -> Self {
        Self { iter, f }
    }
}

impl<I, F> Iterator for Filter<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.iter.by_ref() {
            if (self.f)(&item) {
                return Some(item);
            }
        }
        None
    }
}

/// Yields only the elements for which `f` returns true.
/// `f` is called once per element, only as elements are pulled.
pub fn filter<I, F>(f: F, i: I) -> Filter<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    Filter::new(i.into_iter(), f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn filter_keeps_matching_elements() {
        let result: Vec<_> = filter(|x| x % 2 == 1, [1, 2, 3, 4, 5]).collect();

        assert_eq!(result, vec![1, 3, 5]);
    }

    #[test]
    fn filter_is_lazy() {
        let calls = Cell::new(0);
        let mut filtered = filter(
            |_: &i32| {
                calls.set(calls.get() + 1);
                true
            },
            [1, 2, 3],
        );

        assert_eq!(calls.get(), 0);
        filtered.next();
        assert_eq!(calls.get(), 1);
    }
}
