/// True if `f` holds for every element. Stops pulling at the first failure.
pub fn all<I, F>(mut f: F, i: I) -> bool
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    for item in i {
        if !f(&item) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_works() {
        assert!(all(|x| *x >= 0, [0, 1, 2, 3]));
        assert!(!all(|x| *x != 1, [0, 1, 2, 3]));
        assert!(all(|x: &i32| *x > 3, []));
    }

    #[test]
    fn all_short_circuits() {
        let mut count = 0;
        let result = all(
            |a| {
                count += 1;
                *a != 3
            },
            [1, 2, 3, 4],
        );

        assert!(!result);
        assert_eq!(count, 3);
    }
}
