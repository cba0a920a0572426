/// Drains `i`, returning the number of elements observed.
pub fn count<I: IntoIterator>(i: I) -> usize {
    let mut count = 0;
    for _ in i {
        count += 1;
    }

    count
}
