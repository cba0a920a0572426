use super::fold::reduce;

/// Smallest element according to `selector`, compared with `<`.
///
/// Shares the quirk of [`max_by`](super::max_by): an incomparable current
/// best is never replaced.
pub fn min_by<I, F, K>(mut selector: F, i: I) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: PartialOrd,
{
    reduce(
        |best, candidate, _| {
            if selector(&candidate) < selector(&best) {
                candidate
            } else {
                best
            }
        },
        None,
        i,
    )
}

/// Smallest element, compared with `<`.
pub fn min<I>(i: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    reduce(|best, candidate, _| if candidate < best { candidate } else { best }, None, i)
}
