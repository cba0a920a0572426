use super::fold::reduce;

/// Largest element according to `selector`, compared with `>`.
///
/// The first element is the starting best. Because the comparison is a plain
/// `PartialOrd` one, an incomparable key (such as `f64::NAN`) never replaces
/// the current best, and once it is the current best nothing replaces it.
pub fn max_by<I, F, K>(mut selector: F, i: I) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: PartialOrd,
{
    reduce(
        |best, candidate, _| {
            if selector(&candidate) > selector(&best) {
                candidate
            } else {
                best
            }
        },
        None,
        i,
    )
}

/// Largest element, compared with `>`. See [`max_by`].
pub fn max<I>(i: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    reduce(|best, candidate, _| if candidate > best { candidate } else { best }, None, i)
}
