/// Left fold with an accumulator of any type. Indexes start at 0.
pub fn fold<I, F, U>(mut f: F, initial: U, i: I) -> U
where
    I: IntoIterator,
    F: FnMut(U, I::Item, usize) -> U,
{
    let mut accumulator = initial;
    for (idx, item) in i.into_iter().enumerate() {
        accumulator = f(accumulator, item, idx);
    }
    accumulator
}

/// Left fold where the accumulator has the element type.
///
/// Without an initial value the first element seeds the accumulator and
/// folding continues at index 1. An empty input with no initial value
/// resolves to `None`.
pub fn reduce<I, F>(mut f: F, initial: impl Into<Option<I::Item>>, i: I) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item, usize) -> I::Item,
{
    let mut iter = i.into_iter();
    let (mut accumulator, mut idx) = match initial.into() {
        Some(initial) => (initial, 0),
        None => (iter.next()?, 1),
    };
    for item in iter {
        accumulator = f(accumulator, item, idx);
        idx += 1;
    }
    Some(accumulator)
}
