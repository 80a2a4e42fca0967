//! Type-level cardinality of optics.
//!
//! Every optic declares how many elements it reaches through its
//! [`Shape`](Shape). The shape fixes what [`view`](crate::optics::view)
//! returns and which operations accept the optic:
//!
//! ```text
//! Shape        every optic             view: whatever View<V> is, to_list
//!  └ AtMostOne  parts and maybes       has, preview
//!     └ ExactlyOne  parts              get
//! ```
//!
//! | Marker      | `View<V>`  | Capability   |
//! |-------------|------------|--------------|
//! | [`One`]     | `V`        | `ExactlyOne` |
//! | [`ZeroOrOne`] | `Option<V>` | `AtMostOne` |
//! | [`Many`]    | `Vec<V>`   | `Shape`      |
//! | [`Fallback`] | `V`       | `Shape`      |
//! | [`Then`]    | outer view of inner view | the weaker of both |
//!
//! A part can therefore go anywhere an elements optic can, and a maybe
//! anywhere an elements optic can, but an elements optic is rejected at
//! compile time by operations that need at most one element:
//!
//! ```compile_fail
//! use reach::optics::get;
//! use reach::containers::each;
//!
//! let _ = get(&each::<i32>())(&vec![1, 2]);
//! ```
//!
//! ```compile_fail
//! use reach::optics::has;
//! use reach::containers::each;
//!
//! let _ = has(&each::<i32>())(&vec![1, 2]);
//! ```
//!
//! A maybe is not a part either, and neither is a fallback:
//!
//! ```compile_fail
//! use reach::optics::{get, on_some};
//!
//! let _ = get(&on_some::<i32>())(&Some(1));
//! ```
//!
//! ```compile_fail
//! use reach::optics::{get, value_else_on_none};
//!
//! let _ = get(&value_else_on_none(0))(&None::<i32>);
//! ```

use std::marker::PhantomData;

/// The cardinality of an optic, shared by every optic.
///
/// Any optic reaches zero or more elements, so every shape can list them.
pub trait Shape {
    /// The result of viewing through an optic of this shape when each
    /// element is read as a `V`.
    type View<V>;

    /// Lists every element view in traversal order.
    fn to_vec<V>(view: Self::View<V>) -> Vec<V>;
}

/// Shapes that reach at most one element.
pub trait AtMostOne: Shape {
    /// Collapses the view into a single optional value.
    ///
    /// Nested options produced by chaining several maybes are flattened.
    fn to_option<V>(view: Self::View<V>) -> Option<V>;
}

/// Shapes that always reach exactly one element.
pub trait ExactlyOne: AtMostOne {
    /// Extracts the single element view.
    fn to_value<V>(view: Self::View<V>) -> V;
}

/// Exactly one element: parts.
#[derive(Debug)]
pub enum One {}

/// Zero or one element: maybes.
#[derive(Debug)]
pub enum ZeroOrOne {}

/// Zero or more elements: elements.
#[derive(Debug)]
pub enum Many {}

/// One element that is substituted when missing.
///
/// Views like [`One`] but does not promise that mapping reaches the element,
/// so it only has the base [`Shape`] capability.
#[derive(Debug)]
pub enum Fallback {}

/// An outer shape followed by an inner shape.
#[derive(Debug)]
pub struct Then<Outer, Inner> {
    _marker: PhantomData<fn() -> (Outer, Inner)>,
}

impl Shape for One {
    type View<V> = V;

    fn to_vec<V>(view: V) -> Vec<V> {
        vec![view]
    }
}

impl AtMostOne for One {
    fn to_option<V>(view: V) -> Option<V> {
        Some(view)
    }
}

impl ExactlyOne for One {
    fn to_value<V>(view: V) -> V {
        view
    }
}

impl Shape for ZeroOrOne {
    type View<V> = Option<V>;

    fn to_vec<V>(view: Option<V>) -> Vec<V> {
        view.into_iter().collect()
    }
}

impl AtMostOne for ZeroOrOne {
    fn to_option<V>(view: Option<V>) -> Option<V> {
        view
    }
}

impl Shape for Many {
    type View<V> = Vec<V>;

    fn to_vec<V>(view: Vec<V>) -> Vec<V> {
        view
    }
}

impl Shape for Fallback {
    type View<V> = V;

    fn to_vec<V>(view: V) -> Vec<V> {
        vec![view]
    }
}

impl<Outer: Shape, Inner: Shape> Shape for Then<Outer, Inner> {
    type View<V> = Outer::View<Inner::View<V>>;

    fn to_vec<V>(view: Self::View<V>) -> Vec<V> {
        Outer::to_vec(view)
            .into_iter()
            .flat_map(Inner::to_vec)
            .collect()
    }
}

impl<Outer: AtMostOne, Inner: AtMostOne> AtMostOne for Then<Outer, Inner> {
    fn to_option<V>(view: Self::View<V>) -> Option<V> {
        Outer::to_option(view).and_then(Inner::to_option)
    }
}

impl<Outer: ExactlyOne, Inner: ExactlyOne> ExactlyOne for Then<Outer, Inner> {
    fn to_value<V>(view: Self::View<V>) -> V {
        Inner::to_value(Outer::to_value(view))
    }
}
