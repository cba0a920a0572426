pub struct ConcatMap<I, F, U>
where
    U: IntoIterator,
{
    iter: I,
    f: F,
    current: Option<U::IntoIter>,
}

impl<I, F, U> ConcatMap<I, F, U>
where
    U: IntoIterator,
{
    pub(crate) fn new(iter: I, f: F) -> Self {
        Self {
            iter,
            f,
            current: None,
        }
    }
}

impl<I, F, U> Iterator for ConcatMap<I, F, U>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
    U: IntoIterator,
{
    type Item = U::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = self.current.as_mut() {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                self.current = None;
            }
            let item = self.iter.next()?;
            self.current = Some((self.f)(item).into_iter());
        }
    }
}

/// Flattens one level: every element of `f(t)` is yielded before the next
/// `t` is pulled.
pub fn concat_map<I, F, U>(f: F, i: I) -> ConcatMap<I::IntoIter, F, U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
    U: IntoIterator,
{
    ConcatMap::new(i.into_iter(), f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat_map_preserves_order() {
        let result: Vec<_> = concat_map(|a| [a, a, a], [1, 2, 3]).collect();

        assert_eq!(result, vec![1, 1, 1, 2, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn concat_map_skips_empty_expansions() {
        let result: Vec<_> = concat_map(|a: usize| vec![a; a], [0, 1, 0, 2]).collect();

        assert_eq!(result, vec![1, 2, 2]);
    }
}
