pub struct Chain<I, J> {
    first: I,
    second: J,
    first_exhausted: bool,
}

impl<I, J> Chain<I, J> {
    pub(crate) fn new(first: I, second: J) -> Self {
        Self {
            first,
            second,
            first_exhausted: false,
        }
    }
}

impl<I, J> Iterator for Chain<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.first_exhausted {
            match self.first.next() {
                None => self.first_exhausted = true,
                otherwise => return otherwise,
            }
        }
        self.second.next()
    }
}

/// Yields all of `i` followed by all of `j`.
pub fn concat<I, J>(i: I, j: J) -> Chain<I::IntoIter, J::IntoIter>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
{
    Chain::new(i.into_iter(), j.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SharedCursor;

    #[test]
    fn chain_works() {
        let result: Vec<_> = concat([1, 2, 3, 4], [5, 6, 7, 8]).collect();

        assert_eq!(result, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn concat_of_a_shared_cursor_does_not_rewind() {
        let cursor = SharedCursor::new(vec![1, 2, 3]);

        let result: Vec<_> = concat(cursor.clone(), cursor).collect();

        assert_eq!(result, vec![1, 2, 3]);
    }
}
