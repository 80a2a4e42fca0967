//! Pre-built optics over the standard sum types.
//!
//! | Optic                    | Structure      | Element | Tag                    |
//! |--------------------------|----------------|---------|------------------------|
//! | [`on_some`]              | `Option<T>`    | `T`     | `"some"`               |
//! | [`on_none`]              | `Option<T>`    | `()`    | `"none"`               |
//! | [`on_ok`]                | `Result<T, E>` | `T`     | `"ok"`                 |
//! | [`on_err`]               | `Result<T, E>` | `E`     | `"err"`                |
//! | [`value_else_on_none`]   | `Option<T>`    | `T`     | `"value else on none"` |
//!
//! # Example
//!
//! ```
//! use reach::optics::{map_over, view, on_err};
//!
//! let failed: Result<u16, String> = Err("timeout".to_string());
//!
//! assert_eq!(view(&on_err())(&failed), Some("timeout".to_string()));
//! assert_eq!(
//!     map_over(&on_err(), |error: String| error.to_uppercase())(failed),
//!     Err("TIMEOUT".to_string())
//! );
//! ```

use super::maybe::maybe;
use super::optic::Optic;
use super::relation::Relation;
use super::shape::{Fallback, Shape, ZeroOrOne};

/// Focuses the value of a `Some`.
#[must_use]
pub fn on_some<T>() -> impl Optic<Option<T>, T, Shape = ZeroOrOne> + Clone {
    maybe(
        "some",
        Option::as_ref,
        |option: Option<T>, change: &dyn Fn(T) -> T| option.map(change),
    )
}

/// Focuses the absence of a value.
///
/// The element is `()`, so this optic is only useful with
/// [`has`](crate::optics::has); mapping through it never changes anything.
#[must_use]
pub fn on_none<T>() -> impl Optic<Option<T>, (), Shape = ZeroOrOne> + Clone {
    maybe(
        "none",
        |option: &Option<T>| if option.is_none() { Some(&()) } else { None },
        |option: Option<T>, _change: &dyn Fn(())| option,
    )
}

/// Focuses the value of an `Ok`.
#[must_use]
pub fn on_ok<T, E>() -> impl Optic<Result<T, E>, T, Shape = ZeroOrOne> + Clone {
    maybe(
        "ok",
        |result: &Result<T, E>| result.as_ref().ok(),
        |result: Result<T, E>, change: &dyn Fn(T) -> T| result.map(change),
    )
}

/// Focuses the error of an `Err`.
#[must_use]
pub fn on_err<T, E>() -> impl Optic<Result<T, E>, E, Shape = ZeroOrOne> + Clone {
    maybe(
        "err",
        |result: &Result<T, E>| result.as_ref().err(),
        |result: Result<T, E>, change: &dyn Fn(E) -> E| result.map_err(change),
    )
}

/// Reads an optional value as if it were always present.
///
/// Created by [`value_else_on_none`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueElseOnNone<T> {
    fallback: T,
}

impl<T> Optic<Option<T>, T> for ValueElseOnNone<T> {
    type Shape = Fallback;

    fn reach<V, R, M>(
        &self,
        deeper: Relation<R, M>,
    ) -> Relation<impl Fn(&Option<T>) -> <Self::Shape as Shape>::View<V>, impl Fn(Option<T>) -> Option<T>>
    where
        R: Fn(&T) -> V,
        M: Fn(T) -> T,
    {
        deeper.wrap(
            "value else on none",
            |read| move |option: &Option<T>| read(option.as_ref().unwrap_or(&self.fallback)),
            |change| move |option: Option<T>| option.map(&change),
        )
    }
}

/// Views an `Option<T>` as a `T`, substituting `fallback` when it is `None`.
///
/// Composition can continue past it as if the value were always there. The
/// substitution is view-only: mapping changes a present value and leaves a
/// `None` as `None`, so the fallback is never written into the structure.
/// Because that breaks the set-get law for `None`, the optic only has the
/// base [`Shape`] capability and cannot be used where a part is required.
///
/// # Example
///
/// ```
/// use reach::optics::{compose, map_over, view, value_else_on_none};
/// use reach::containers::first;
///
/// let volume = compose(first::<Option<u8>, &str>(), value_else_on_none(50));
///
/// assert_eq!(view(&volume)(&(None, "speaker")), 50);
/// assert_eq!(view(&volume)(&(Some(80), "speaker")), 80);
/// assert_eq!(map_over(&volume, |level| level / 2)((None, "speaker")), (None, "speaker"));
/// ```
#[must_use]
pub const fn value_else_on_none<T>(fallback: T) -> ValueElseOnNone<T> {
    ValueElseOnNone { fallback }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{description, has, map_over, view};
    use rstest::rstest;

    #[rstest]
    #[case(Some(4), Some(4))]
    #[case(None, None)]
    fn test_on_some_view(#[case] structure: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(view(&on_some())(&structure), expected);
    }

    #[rstest]
    #[case(Some(4), Some(5))]
    #[case(None, None)]
    fn test_on_some_map(#[case] structure: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(map_over(&on_some(), |x: i32| x + 1)(structure), expected);
    }

    #[rstest]
    #[case(Some(1), false)]
    #[case(None, true)]
    fn test_on_none_has(#[case] structure: Option<i32>, #[case] expected: bool) {
        assert_eq!(has(&on_none())(&structure), expected);
    }

    #[test]
    fn test_on_none_map_is_identity() {
        assert_eq!(map_over(&on_none(), |()| ())(Some(3)), Some(3));
        assert_eq!(map_over(&on_none::<i32>(), |()| ())(None), None);
    }

    #[test]
    fn test_on_ok_and_on_err_are_exclusive() {
        let success: Result<i32, String> = Ok(1);
        let failure: Result<i32, String> = Err("bad".to_string());

        assert_eq!(view(&on_ok())(&success), Some(1));
        assert_eq!(view(&on_ok())(&failure), None);
        assert_eq!(view(&on_err())(&success), None);
        assert_eq!(view(&on_err())(&failure), Some("bad".to_string()));
    }

    #[test]
    fn test_on_ok_map_leaves_err() {
        let failure: Result<i32, String> = Err("bad".to_string());
        assert_eq!(map_over(&on_ok(), |x: i32| x * 2)(failure.clone()), failure);
    }

    #[test]
    fn test_value_else_on_none_substitutes_fallback() {
        let optic = value_else_on_none(7);
        assert_eq!(view(&optic)(&None), 7);
        assert_eq!(view(&optic)(&Some(3)), 3);
    }

    #[test]
    fn test_value_else_on_none_map_does_not_write_fallback() {
        let optic = value_else_on_none(7);
        assert_eq!(map_over(&optic, |x: i32| x + 1)(None), None);
        assert_eq!(map_over(&optic, |x: i32| x + 1)(Some(3)), Some(4));
    }

    #[rstest]
    #[case(description(&on_some::<u8>()), "some")]
    #[case(description(&on_none::<u8>()), "none")]
    #[case(description(&on_ok::<u8, u8>()), "ok")]
    #[case(description(&on_err::<u8, u8>()), "err")]
    #[case(description(&value_else_on_none(0_u8)), "value else on none")]
    fn test_tags(#[case] trail: crate::optics::Description, #[case] tag: &str) {
        assert_eq!(trail, [tag]);
    }
}
