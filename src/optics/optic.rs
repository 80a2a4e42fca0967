//! The optic trait and optic composition.
//!
//! An optic turns the [`Relation`] of an element into the relation of the
//! structure that contains it. Composing two optics is nothing more than
//! feeding the inner optic's result into the outer optic, so a chain of any
//! length threads view and map through every level while each layer only
//! knows its own immediate element type.
//!
//! Composition always reads from the root inward: in `compose(outer, inner)`
//! the structure of `outer` is the root and the element of `outer` is the
//! structure of `inner`. An inner optic over any other type does not compose:
//!
//! ```compile_fail
//! use reach::optics::compose;
//! use reach::containers::{each, first};
//!
//! let _ = compose(first::<String, u8>(), each::<u8>());
//! ```
//!
//! # Laws
//!
//! 1. **Associativity**: `compose(a, compose(b, c))` behaves like
//!    `compose(compose(a, b), c)`, descriptions included.
//! 2. **Identity**: `compose(identity(), optic)` and `compose(optic, identity())`
//!    behave like `optic`.
//!
//! # Example
//!
//! ```
//! use reach::optics::{Optic, view, map_over};
//! use reach::containers::{each, second};
//!
//! let optic = second::<&str, Vec<i32>>().then(each());
//! let pair = ("scores", vec![1, 2, 3]);
//!
//! assert_eq!(view(&optic)(&pair), vec![1, 2, 3]);
//! assert_eq!(map_over(&optic, |score| score * 10)(pair), ("scores", vec![10, 20, 30]));
//! ```

use std::marker::PhantomData;

use super::relation::Relation;
use super::shape::{AtMostOne, One, Shape, Then, ZeroOrOne};

/// A composable description of how a structure `S` contains elements `A`.
///
/// # Type Parameters
///
/// - `S`: The structure type
/// - `A`: The element type
pub trait Optic<S, A> {
    /// How many elements this optic reaches.
    type Shape: Shape;

    /// Turns the relation of an element into the relation of the structure.
    ///
    /// Implementations wire the functions of `deeper` into new functions and
    /// must not call them. [`Relation::wrap`] does the wiring.
    fn reach<V, R, M>(
        &self,
        deeper: Relation<R, M>,
    ) -> Relation<impl Fn(&S) -> <Self::Shape as Shape>::View<V>, impl Fn(S) -> S>
    where
        R: Fn(&A) -> V,
        M: Fn(A) -> A;

    /// Composes this optic with an optic focusing inside its element.
    ///
    /// # Example
    ///
    /// ```
    /// use reach::optics::{Optic, view, on_some};
    /// use reach::containers::first;
    ///
    /// let optic = first::<Option<char>, u8>().then(on_some());
    /// assert_eq!(view(&optic)(&(Some('x'), 0)), Some('x'));
    /// assert_eq!(view(&optic)(&(None, 0)), None);
    /// ```
    fn then<B, Inner>(self, inner: Inner) -> Composed<Self, Inner, A>
    where
        Self: Sized,
        Inner: Optic<A, B>,
    {
        Composed::new(self, inner)
    }

    /// Collapses the nested options of a chain of maybes into one option.
    ///
    /// See [`flat`].
    fn flat(self) -> Flat<Self>
    where
        Self: Sized,
        Self::Shape: AtMostOne,
    {
        Flat::new(self)
    }
}

/// Two optics composed, the outer reaching into the structure and the inner
/// reaching into the outer's element.
///
/// # Type Parameters
///
/// - `Outer`: The optic applied to the root structure
/// - `Inner`: The optic applied to the outer optic's element
/// - `B`: The intermediate type (element of `Outer`, structure of `Inner`)
pub struct Composed<Outer, Inner, B> {
    outer: Outer,
    inner: Inner,
    _marker: PhantomData<fn() -> B>,
}

impl<Outer, Inner, B> Composed<Outer, Inner, B> {
    /// Creates a new composed optic.
    #[must_use]
    pub const fn new(outer: Outer, inner: Inner) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, B, A, Outer, Inner> Optic<S, A> for Composed<Outer, Inner, B>
where
    Outer: Optic<S, B>,
    Inner: Optic<B, A>,
{
    type Shape = Then<Outer::Shape, Inner::Shape>;

    fn reach<V, R, M>(
        &self,
        deeper: Relation<R, M>,
    ) -> Relation<impl Fn(&S) -> <Self::Shape as Shape>::View<V>, impl Fn(S) -> S>
    where
        R: Fn(&A) -> V,
        M: Fn(A) -> A,
    {
        self.outer.reach(self.inner.reach(deeper))
    }
}

impl<Outer: Clone, Inner: Clone, B> Clone for Composed<Outer, Inner, B> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<Outer: Copy, Inner: Copy, B> Copy for Composed<Outer, Inner, B> {}

impl<Outer: std::fmt::Debug, Inner: std::fmt::Debug, B> std::fmt::Debug
    for Composed<Outer, Inner, B>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Composed")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

/// Composes `outer` with `inner`, reaching one level deeper.
///
/// Equivalent to `outer.then(inner)`.
#[must_use]
pub const fn compose<S, B, A, Outer, Inner>(outer: Outer, inner: Inner) -> Composed<Outer, Inner, B>
where
    Outer: Optic<S, B>,
    Inner: Optic<B, A>,
{
    Composed::new(outer, inner)
}

/// Composes optics from the root structure inward.
///
/// `compose!(a, b, c)` is `compose(a, compose(b, c))`: `a` is applied to the
/// root, `b` to the element of `a`, and `c` to the element of `b`.
///
/// # Syntax
///
/// - `compose!(a)` - Returns `a` unchanged
/// - `compose!(a, b)` - Returns `compose(a, b)`
/// - `compose!(a, b, c, ...)` - Composes any number of optics
///
/// # Example
///
/// ```
/// use reach::compose;
/// use reach::optics::{description, view};
/// use reach::containers::{each, element_at, first};
///
/// let optic = compose!(first::<Vec<Vec<u8>>, ()>(), element_at(1), each());
/// let structure = (vec![vec![1], vec![2, 3]], ());
///
/// assert_eq!(view(&optic)(&structure), Some(vec![2, 3]));
/// assert_eq!(description(&optic), ["first", "element 1", "each"]);
/// ```
#[macro_export]
macro_rules! compose {
    ($optic:expr $(,)?) => {
        $optic
    };

    ($outer:expr, $($inner:expr),+ $(,)?) => {
        $crate::optics::compose($outer, $crate::compose!($($inner),+))
    };
}

/// The identity optic: the structure is its own single element.
///
/// Composing with it on either side changes nothing, not even the
/// description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<A> Optic<A, A> for Identity {
    type Shape = One;

    fn reach<V, R, M>(
        &self,
        deeper: Relation<R, M>,
    ) -> Relation<impl Fn(&A) -> <Self::Shape as Shape>::View<V>, impl Fn(A) -> A>
    where
        R: Fn(&A) -> V,
        M: Fn(A) -> A,
    {
        deeper
    }
}

/// Returns the identity optic.
#[must_use]
pub const fn identity() -> Identity {
    Identity
}

/// An adapter collapsing the nested options of chained maybes.
///
/// Chaining two maybes views as `Option<Option<T>>`. Wrapping the chain in
/// `Flat` views it as `Option<T>` instead. Mapping is unchanged and no tag is
/// recorded.
#[derive(Debug, Clone, Copy)]
pub struct Flat<O> {
    optic: O,
}

impl<O> Flat<O> {
    /// Creates a new `Flat` around `optic`.
    #[must_use]
    pub const fn new(optic: O) -> Self {
        Self { optic }
    }
}

impl<S, A, O> Optic<S, A> for Flat<O>
where
    O: Optic<S, A>,
    O::Shape: AtMostOne,
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
        self.optic.reach(deeper).adapt(
            |read| move |structure: &S| <O::Shape as AtMostOne>::to_option(read(structure)),
            |map| map,
        )
    }
}

/// Collapses nested optional results of a chain of maybes into one option.
///
/// # Example
///
/// ```
/// use reach::optics::{compose, flat, view, on_some, on_ok};
///
/// let nested = compose(on_some::<Result<i32, String>>(), on_ok());
/// let flattened = flat(nested.clone());
///
/// let structure: Option<Result<i32, String>> = Some(Err("no".to_string()));
/// assert_eq!(view(&nested)(&structure), Some(None));
/// assert_eq!(view(&flattened)(&structure), None);
/// assert_eq!(view(&flattened)(&Some(Ok(1))), Some(1));
/// ```
#[must_use]
pub const fn flat<O>(optic: O) -> Flat<O> {
    Flat::new(optic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{description, map_over, part, view};

    #[derive(Clone, Debug, PartialEq)]
    struct Inner {
        value: i32,
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Outer {
        inner: Inner,
    }

    fn inner_part() -> impl Optic<Outer, Inner, Shape = One> + Clone {
        part(
            "inner",
            |outer: &Outer| &outer.inner,
            |mut outer: Outer, change: &dyn Fn(Inner) -> Inner| {
                outer.inner = change(outer.inner);
                outer
            },
        )
    }

    fn value_part() -> impl Optic<Inner, i32, Shape = One> + Clone {
        part(
            "value",
            |inner: &Inner| &inner.value,
            |mut inner: Inner, change: &dyn Fn(i32) -> i32| {
                inner.value = change(inner.value);
                inner
            },
        )
    }

    #[test]
    fn test_then_reaches_nested_field() {
        let optic = inner_part().then(value_part());
        let data = Outer {
            inner: Inner { value: 42 },
        };

        assert_eq!(view(&optic)(&data), 42);
        assert_eq!(map_over(&optic, |value| value + 1)(data).inner.value, 43);
    }

    #[test]
    fn test_compose_macro_matches_method() {
        let by_macro = compose!(inner_part(), value_part());
        let by_method = inner_part().then(value_part());
        assert_eq!(description(&by_macro), description(&by_method));
    }

    #[test]
    fn test_identity_adds_no_tag() {
        let optic = compose!(identity(), inner_part(), identity());
        assert_eq!(description(&optic), ["inner"]);
    }

    #[test]
    fn test_identity_alone_views_structure() {
        assert_eq!(view(&identity())(&5), 5);
        assert_eq!(map_over(&identity(), |value: i32| value * 2)(5), 10);
    }
}
