/// Returns the first element matching `f`, or `default` when nothing does.
pub fn first<I, F>(mut f: F, default: impl Into<Option<I::Item>>, i: I) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    for item in i {
        if f(&item) {
            return Some(item);
        }
    }
    default.into()
}
