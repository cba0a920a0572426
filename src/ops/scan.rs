use std::mem;

enum State<T> {
    Unseeded,
    Seeded(T),
}

/// Running accumulation where the accumulator has the element type.
pub struct Scan<I: Iterator, F> {
    iter: I,
    f: F,
    state: State<I::Item>,
    index: usize,
}

impl<I: Iterator, F> Scan<I, F> {
    pub(crate) fn new(iter: I, f: F, initial: Option<I::Item>) -> Self {
        Self {
            iter,
            f,
            state: initial.map_or(State::Unseeded, State::Seeded),
            index: 0,
        }
    }
}

impl<I, F> Iterator for Scan<I, F>
where
    I: Iterator,
    F: FnMut(I::Item, I::Item, usize) -> I::Item,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let next_value = match mem::replace(&mut self.state, State::Unseeded) {
            State::Seeded(accumulator) => {
                let value = (self.f)(accumulator, item, self.index);
                self.index += 1;
                value
            }
            // The first element is emitted as is and becomes the seed
            State::Unseeded => {
                self.index = 1;
                item
            }
        };
        self.state = State::Seeded(next_value.clone());
        Some(next_value)
    }
}

/// Running accumulation into an accumulator of any type.
pub struct ScanFrom<I, F, U> {
    iter: I,
    f: F,
    accumulator: U,
    index: usize,
}

impl<I, F, U> ScanFrom<I, F, U> {
    pub(crate) fn new(iter: I, f: F, initial: U) -> Self {
        Self {
            iter,
            f,
            accumulator: initial,
            index: 0,
        }
    }
}

impl<I, F, U> Iterator for ScanFrom<I, F, U>
where
    I: Iterator,
    F: FnMut(U, I::Item, usize) -> U,
    U: Clone,
{
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let value = (self.f)(self.accumulator.clone(), item, self.index);
        self.index += 1;
        self.accumulator = value.clone();
        Some(value)
    }
}

/// Running accumulation over `i`.
///
/// Without an initial value the first element is emitted unchanged and seeds
/// the accumulator, so indexes passed to `f` start at 1. With one, the first
/// emitted value is `f(initial, first, 0)`.
pub fn scan<I, F>(f: F, initial: impl Into<Option<I::Item>>, i: I) -> Scan<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item, usize) -> I::Item,
    I::Item: Clone,
{
    Scan::new(i.into_iter(), f, initial.into())
}

/// Like [`scan`], but the accumulator can be of a different type than the
/// elements and an initial value is always required.
pub fn scan_from<I, F, U>(f: F, initial: U, i: I) -> ScanFrom<I::IntoIter, F, U>
where
    I: IntoIterator,
    F: FnMut(U, I::Item, usize) -> U,
    U: Clone,
{
    ScanFrom::new(i.into_iter(), f, initial)
}

/// Builds a stateful mapping function keeping a running accumulator, so a
/// scan can be expressed through `map`.
pub fn scan_map<T, F>(mut f: F, initial: impl Into<Option<T>>) -> impl FnMut(T) -> T
where
    F: FnMut(T, T) -> T,
    T: Clone,
{
    let mut accumulator = initial.into();
    move |value| {
        let next_value = match accumulator.take() {
            Some(accumulator) => f(accumulator, value),
            None => value,
        };
        accumulator = Some(next_value.clone());
        next_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_running_sum() {
        let result: Vec<_> = scan(|acc, v, _| acc + v, None, [1, 2, 1, 3, 2, 1, 3]).collect();

        assert_eq!(result, vec![1, 3, 4, 7, 9, 10, 13]);
    }

    #[test]
    fn scan_indexes() {
        let unseeded: Vec<_> = scan(|_, _, idx| idx, None, [7usize, 7, 7]).collect();
        let seeded: Vec<_> = scan(|_, _, idx| idx, 100, [7usize, 7, 7]).collect();

        assert_eq!(unseeded, vec![7, 1, 2]);
        assert_eq!(seeded, vec![0, 1, 2]);
    }

    #[test]
    fn scan_with_no_values() {
        assert_eq!(scan(|acc: i32, v, _| acc + v, None, Vec::new()).count(), 0);
        assert_eq!(scan(|acc: i32, v, _| acc + v, 5, Vec::new()).count(), 0);
    }

    #[test]
    fn scan_with_an_initial_value_emits_it_folded_in() {
        let result: Vec<_> = scan(|acc, v, _| acc * 10 + v, 9, [1, 2]).collect();

        assert_eq!(result, vec![91, 912]);
    }

    #[test]
    fn scan_from_changes_the_accumulator_type() {
        let result: Vec<_> =
            scan_from(|acc: String, v: char, _| format!("{acc}{v}"), String::new(), "abc".chars()).collect();

        assert_eq!(result, vec!["a", "ab", "abc"]);
    }

    #[test]
    fn scan_map_running_sum() {
        let result: Vec<_> = [1, 2, 1, 3, 2, 1, 3].into_iter().map(scan_map(|a: i32, b: i32| a + b, None)).collect();

        assert_eq!(result, vec![1, 3, 4, 7, 9, 10, 13]);
    }
}
