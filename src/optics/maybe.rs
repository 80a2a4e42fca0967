//! Maybe optics: an element that may or may not be present.
//!
//! A maybe reads its element as an `Option` and rebuilds the structure by
//! applying a change to the element when it is present. When the element is
//! absent the structure comes back unchanged; that is the defined result,
//! not a failure.
//!
//! # Laws
//!
//! 1. **Identity when present**: If `view(maybe)(&source) == Some(value)`, then
//!    ```text
//!    map_over(maybe, |_| value)(source) == source
//!    ```
//!
//! 2. **Set-then-view**: Reading after a write sees the written value exactly
//!    when an element was there to write.
//!    ```text
//!    view(maybe)(&map_over(maybe, |_| x)(source)) == view(maybe)(&source).map(|_| x)
//!    ```
//!
//! # Examples
//!
//! ```
//! use reach::optics::{maybe, view, map_over};
//!
//! let head = maybe(
//!     "head",
//!     |values: &Vec<i32>| values.first(),
//!     |mut values: Vec<i32>, change: &dyn Fn(i32) -> i32| {
//!         if let Some(first) = values.first_mut() {
//!             *first = change(*first);
//!         }
//!         values
//!     },
//! );
//!
//! assert_eq!(view(&head)(&vec![4, 5]), Some(4));
//! assert_eq!(view(&head)(&vec![]), None);
//! assert_eq!(map_over(&head, |x| x * 2)(vec![4, 5]), vec![8, 5]);
//! assert_eq!(map_over(&head, |x| x * 2)(vec![]), Vec::<i32>::new());
//! ```

use std::marker::PhantomData;

use super::optic::Optic;
use super::relation::Relation;
use super::shape::{Shape, ZeroOrOne};

/// A maybe built from an optional access function and a map function.
///
/// Created by [`maybe`].
///
/// # Type Parameters
///
/// - `S`: The structure type
/// - `A`: The element type
/// - `G`: The access function type
/// - `Mp`: The map function type
pub struct FunctionMaybe<S, A, G, Mp> {
    tag: String,
    access: G,
    map: Mp,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G, Mp> FunctionMaybe<S, A, G, Mp>
where
    G: Fn(&S) -> Option<&A>,
    Mp: Fn(S, &dyn Fn(A) -> A) -> S,
{
    /// Creates a new `FunctionMaybe`.
    ///
    /// # Arguments
    ///
    /// * `tag` - The description tag of this layer
    /// * `access` - Borrows the element from the structure if it is present
    /// * `map` - Rebuilds the structure with the change applied to the element,
    ///   or returns it untouched when the element is absent
    #[must_use]
    pub fn new(tag: impl Into<String>, access: G, map: Mp) -> Self {
        Self {
            tag: tag.into(),
            access,
            map,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, Mp> Optic<S, A> for FunctionMaybe<S, A, G, Mp>
where
    G: Fn(&S) -> Option<&A>,
    Mp: Fn(S, &dyn Fn(A) -> A) -> S,
{
    type Shape = ZeroOrOne;

    fn reach<V, R, M>(
        &self,
        deeper: Relation<R, M>,
    ) -> Relation<impl Fn(&S) -> <Self::Shape as Shape>::View<V>, impl Fn(S) -> S>
    where
        R: Fn(&A) -> V,
        M: Fn(A) -> A,
    {
        deeper.wrap(
            &self.tag,
            |read| move |structure: &S| (self.access)(structure).map(&read),
            |change| move |structure: S| (self.map)(structure, &change),
        )
    }
}

impl<S, A, G: Clone, Mp: Clone> Clone for FunctionMaybe<S, A, G, Mp> {
    fn clone(&self) -> Self {
        Self {
            tag: self.tag.clone(),
            access: self.access.clone(),
            map: self.map.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, Mp> std::fmt::Debug for FunctionMaybe<S, A, G, Mp> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionMaybe")
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

/// Creates a maybe from an optional access function and a map function.
///
/// `access` and `map` must agree on which element they target, and `map`
/// must return the structure untouched when that element is absent.
#[must_use]
pub fn maybe<S, A, G, Mp>(tag: impl Into<String>, access: G, map: Mp) -> FunctionMaybe<S, A, G, Mp>
where
    G: Fn(&S) -> Option<&A>,
    Mp: Fn(S, &dyn Fn(A) -> A) -> S,
{
    FunctionMaybe::new(tag, access, map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{description, has, map_over, view};

    #[derive(Clone, PartialEq, Debug)]
    enum Figure {
        Circle(f64),
        Square(f64),
    }

    fn circle() -> impl Optic<Figure, f64, Shape = ZeroOrOne> + Clone {
        maybe(
            "circle",
            |figure: &Figure| match figure {
                Figure::Circle(radius) => Some(radius),
                Figure::Square(_) => None,
            },
            |figure: Figure, change: &dyn Fn(f64) -> f64| match figure {
                Figure::Circle(radius) => Figure::Circle(change(radius)),
                other @ Figure::Square(_) => other,
            },
        )
    }

    #[test]
    fn test_view_present_variant() {
        assert_eq!(view(&circle())(&Figure::Circle(2.0)), Some(2.0));
    }

    #[test]
    fn test_view_absent_variant() {
        assert_eq!(view(&circle())(&Figure::Square(2.0)), None);
    }

    #[test]
    fn test_map_absent_variant_is_identity() {
        let square = Figure::Square(3.0);
        assert_eq!(map_over(&circle(), |radius| radius * 2.0)(square.clone()), square);
    }

    #[test]
    fn test_map_present_variant() {
        assert_eq!(
            map_over(&circle(), |radius| radius * 2.0)(Figure::Circle(1.5)),
            Figure::Circle(3.0)
        );
    }

    #[test]
    fn test_has() {
        assert!(has(&circle())(&Figure::Circle(1.0)));
        assert!(!has(&circle())(&Figure::Square(1.0)));
    }

    #[test]
    fn test_description() {
        assert_eq!(description(&circle()), ["circle"]);
    }
}
