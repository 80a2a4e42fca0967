//! Elements optics: zero or more elements reached uniformly.
//!
//! An elements optic is the traversal of this library, and the most general
//! constructor: parts and maybes are the special cases that reach exactly one
//! and at most one element. Viewing through it collects one view per element,
//! in traversal order; mapping applies the change to every element in place.
//!
//! # Laws
//!
//! 1. **Identity**: Mapping with the identity function yields the original.
//!    ```text
//!    map_over(elements, |x| x)(source) == source
//!    ```
//!
//! 2. **Composition**: Two maps equal one map of the composed change.
//!    ```text
//!    map_over(elements, g)(map_over(elements, f)(source)) == map_over(elements, |x| g(f(x)))(source)
//!    ```
//!
//! 3. **Set-Set**: The last write wins.
//!    ```text
//!    map_over(elements, |_| b)(map_over(elements, |_| a)(source)) == map_over(elements, |_| b)(source)
//!    ```
//!
//! # Examples
//!
//! ```
//! use std::collections::VecDeque;
//! use reach::optics::{elements, view, map_over};
//!
//! let queued = elements(
//!     "queued",
//!     |queue: &VecDeque<u32>, visit: &mut dyn FnMut(&u32)| queue.iter().for_each(visit),
//!     |queue: VecDeque<u32>, change: &dyn Fn(u32) -> u32| queue.into_iter().map(change).collect(),
//! );
//!
//! let queue = VecDeque::from(vec![1, 2, 3]);
//! assert_eq!(view(&queued)(&queue), vec![1, 2, 3]);
//! assert_eq!(map_over(&queued, |job| job + 100)(queue), VecDeque::from(vec![101, 102, 103]));
//! ```

use std::marker::PhantomData;

use super::optic::Optic;
use super::relation::Relation;
use super::shape::{Many, Shape};

/// An elements optic built from a visiting function and a map function.
///
/// Created by [`elements`].
///
/// # Type Parameters
///
/// - `S`: The structure type
/// - `A`: The element type
/// - `Vs`: The visiting function type
/// - `Mp`: The map function type
pub struct FunctionElements<S, A, Vs, Mp> {
    tag: String,
    visit: Vs,
    map: Mp,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, Vs, Mp> FunctionElements<S, A, Vs, Mp>
where
    Vs: Fn(&S, &mut dyn FnMut(&A)),
    Mp: Fn(S, &dyn Fn(A) -> A) -> S,
{
    /// Creates a new `FunctionElements`.
    ///
    /// # Arguments
    ///
    /// * `tag` - The description tag of this layer
    /// * `visit` - Calls the visitor once for every element, in order
    /// * `map` - Rebuilds the structure with the change applied to every element
    #[must_use]
    pub fn new(tag: impl Into<String>, visit: Vs, map: Mp) -> Self {
        Self {
            tag: tag.into(),
            visit,
            map,
            _marker: PhantomData,
        }
    }
}

impl<S, A, Vs, Mp> Optic<S, A> for FunctionElements<S, A, Vs, Mp>
where
    Vs: Fn(&S, &mut dyn FnMut(&A)),
    Mp: Fn(S, &dyn Fn(A) -> A) -> S,
{
    type Shape = Many;

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
            |read| {
                move |structure: &S| {
                    let mut views = Vec::new();
                    (self.visit)(structure, &mut |element: &A| views.push(read(element)));
                    views
                }
            },
            |change| move |structure: S| (self.map)(structure, &change),
        )
    }
}

impl<S, A, Vs: Clone, Mp: Clone> Clone for FunctionElements<S, A, Vs, Mp> {
    fn clone(&self) -> Self {
        Self {
            tag: self.tag.clone(),
            visit: self.visit.clone(),
            map: self.map.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, Vs, Mp> std::fmt::Debug for FunctionElements<S, A, Vs, Mp> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionElements")
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

/// Creates an elements optic from a visiting function and a map function.
///
/// `visit` and `map` must agree on which elements they reach and in which
/// order.
#[must_use]
pub fn elements<S, A, Vs, Mp>(
    tag: impl Into<String>,
    visit: Vs,
    map: Mp,
) -> FunctionElements<S, A, Vs, Mp>
where
    Vs: Fn(&S, &mut dyn FnMut(&A)),
    Mp: Fn(S, &dyn Fn(A) -> A) -> S,
{
    FunctionElements::new(tag, visit, map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{description, map_over, to_list, view};

    fn evens() -> impl Optic<Vec<i32>, i32, Shape = Many> + Clone {
        elements(
            "evens",
            |values: &Vec<i32>, visit: &mut dyn FnMut(&i32)| {
                values.iter().step_by(2).for_each(visit);
            },
            |values: Vec<i32>, change: &dyn Fn(i32) -> i32| {
                values
                    .into_iter()
                    .enumerate()
                    .map(|(index, value)| if index % 2 == 0 { change(value) } else { value })
                    .collect()
            },
        )
    }

    #[test]
    fn test_view_collects_in_order() {
        assert_eq!(view(&evens())(&vec![1, 2, 3, 4, 5]), vec![1, 3, 5]);
    }

    #[test]
    fn test_view_of_empty_structure() {
        assert_eq!(view(&evens())(&Vec::new()), Vec::<i32>::new());
    }

    #[test]
    fn test_map_reaches_only_visited_elements() {
        assert_eq!(map_over(&evens(), |x| -x)(vec![1, 2, 3, 4]), vec![-1, 2, -3, 4]);
    }

    #[test]
    fn test_to_list_matches_view() {
        let values = vec![7, 8, 9];
        assert_eq!(to_list(&evens())(&values), view(&evens())(&values));
    }

    #[test]
    fn test_description() {
        assert_eq!(description(&evens()), ["evens"]);
    }
}
