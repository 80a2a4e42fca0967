use crate::optics::{One, Optic, part};

/// Focuses the first component of a pair.
///
/// # Example
///
/// ```
/// use reach::optics::{map_over, view};
/// use reach::containers::first;
///
/// let pair = (3, "three");
/// assert_eq!(view(&first())(&pair), 3);
/// assert_eq!(map_over(&first(), |x: i32| x * x)(pair), (9, "three"));
/// ```
#[must_use]
pub fn first<A, B>() -> impl Optic<(A, B), A, Shape = One> + Clone {
    part(
        "first",
        |pair: &(A, B)| &pair.0,
        |(left, right): (A, B), change: &dyn Fn(A) -> A| (change(left), right),
    )
}

/// Focuses the second component of a pair.
#[must_use]
pub fn second<A, B>() -> impl Optic<(A, B), B, Shape = One> + Clone {
    part(
        "second",
        |pair: &(A, B)| &pair.1,
        |(left, right): (A, B), change: &dyn Fn(B) -> B| (left, change(right)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{compose, description, get, map_over, set};

    #[test]
    fn test_first_and_second_are_independent() {
        let pair = ("left".to_string(), 2);
        let updated = set(&first(), "new".to_string())(pair.clone());
        assert_eq!(updated.1, pair.1);
        assert_eq!(map_over(&second(), |x: i32| x + 1)(pair).0, "left");
    }

    #[test]
    fn test_nested_pairs() {
        let optic = compose(second::<u8, (u8, u8)>(), first());
        assert_eq!(get(&optic)(&(1, (2, 3))), 2);
        assert_eq!(description(&optic), ["second", "first"]);
    }
}
