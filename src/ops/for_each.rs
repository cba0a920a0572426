/// Calls `f` with each element and its index.
pub fn for_each<I, F>(mut f: F, i: I)
where
    I: IntoIterator,
    F: FnMut(I::Item, usize),
{
    for (idx, item) in i.into_iter().enumerate() {
        f(item, idx);
    }
}
