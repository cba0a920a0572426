/// True if `f` holds for some element. Stops pulling at the first success.
pub fn any<I, F>(mut f: F, i: I) -> bool
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    for item in i {
        if f(&item) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_works() {
        assert!(any(|x| *x > 3, [1, 2, 3, 4]));
        assert!(!any(|x| *x > 3, [1, 2, 3]));
        assert!(!any(|x: &i32| *x > 3, []));
    }

    #[test]
    fn any_short_circuits() {
        let mut count = 0;
        let result = any(
            |a| {
                count += 1;
                *a == 3
            },
            [1, 2, 3, 4],
        );

        assert!(result);
        assert_eq!(count, 3);
    }
}
