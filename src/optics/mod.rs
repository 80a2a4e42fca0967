//! Optics for reading and updating nested immutable data.
//!
//! An optic describes where some content sits inside a structure. Given an
//! optic, [`view`] reads that content and [`map_over`] rebuilds the structure
//! with the content changed, without the caller taking the structure apart
//! by hand.
//!
//! # Optic Shapes
//!
//! ```text
//! Part     <: Elements     exactly one element   (lens)
//! Maybe    <: Elements     zero or one element   (prism / optional)
//! Elements                 zero or more elements (traversal)
//! ```
//!
//! The shape of an optic is part of its type (see [`Shape`]). Composition
//! combines shapes, so `view` of a part composed with a maybe yields an
//! `Option`, and an elements optic composed with a part yields a `Vec`.
//!
//! # Available Constructors
//!
//! - [`part`] / [`part!`](crate::part!): Focus on one always-present element
//! - [`maybe`]: Focus on an element that may be absent
//! - [`elements`]: Focus on every element of a container
//! - [`on_some`], [`on_none`], [`on_ok`], [`on_err`]: Branches of `Option` and `Result`
//! - [`value_else_on_none`]: Read an `Option` with a fallback
//! - [`flat`]: Collapse the nested options of chained maybes
//! - [`identity`]: The unit of composition
//!
//! # Example
//!
//! ```
//! use reach::compose;
//! use reach::optics::{description, map_over, view, on_some};
//! use reach::containers::each;
//! use reach::part;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Track { title: String, rating: Option<u8> }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Album { tracks: Vec<Track> }
//!
//! let ratings = compose!(part!(Album, tracks), each(), part!(Track, rating), on_some());
//!
//! let album = Album {
//!     tracks: vec![
//!         Track { title: "Intro".to_string(), rating: None },
//!         Track { title: "Theme".to_string(), rating: Some(4) },
//!     ],
//! };
//!
//! assert_eq!(view(&ratings)(&album), vec![None, Some(4)]);
//!
//! let bumped = map_over(&ratings, |rating| rating + 1)(album);
//! assert_eq!(bumped.tracks[0].rating, None);
//! assert_eq!(bumped.tracks[1].rating, Some(5));
//!
//! assert_eq!(description(&ratings), ["tracks", "each", "rating", "some"]);
//! ```
//!
//! # Elements Laws
//!
//! Every optic must satisfy:
//!
//! 1. **Identity**: `map_over(optic, |x| x)(source) == source`
//! 2. **Composition**: `map_over(optic, g)(map_over(optic, f)(source)) == map_over(optic, |x| g(f(x)))(source)`
//! 3. **Set-Set**: `map_over(optic, |_| b)(map_over(optic, |_| a)(source)) == map_over(optic, |_| b)(source)`
//!
//! # Part Laws
//!
//! 1. **Get-Set**: `map_over(part, |_| view(part)(&source))(source) == source`
//! 2. **Set-Get**: `view(part)(&map_over(part, |_| x)(source)) == x`
//!
//! # Maybe Laws
//!
//! 1. **Identity when present**: if `view(maybe)(&source) == Some(v)` then
//!    `map_over(maybe, |_| v)(source) == source`
//! 2. **Set-then-view**: `view(maybe)(&map_over(maybe, |_| x)(source)) == view(maybe)(&source).map(|_| x)`
//!
//! Constructors do not check these laws; they hold when the access and map
//! functions handed to a constructor agree on the element they target.

mod combinators;
mod description;
mod elements;
mod maybe;
mod operations;
mod optic;
mod part;
mod relation;
mod shape;

// Re-export the relation and description types
pub use description::Description;
pub use description::KEY_SEPARATOR;
pub use relation::Relation;

// Re-export shapes
pub use shape::AtMostOne;
pub use shape::ExactlyOne;
pub use shape::Fallback;
pub use shape::Many;
pub use shape::One;
pub use shape::Shape;
pub use shape::Then;
pub use shape::ZeroOrOne;

// Re-export the optic trait and composition
pub use optic::Composed;
pub use optic::Flat;
pub use optic::Identity;
pub use optic::Optic;
pub use optic::compose;
pub use optic::flat;
pub use optic::identity;

// Re-export constructors
pub use elements::FunctionElements;
pub use elements::elements;
pub use maybe::FunctionMaybe;
pub use maybe::maybe;
pub use part::FunctionPart;
pub use part::part;

// Re-export combinators
pub use combinators::ValueElseOnNone;
pub use combinators::on_err;
pub use combinators::on_none;
pub use combinators::on_ok;
pub use combinators::on_some;
pub use combinators::value_else_on_none;

// Re-export operations
pub use operations::description;
pub use operations::get;
pub use operations::has;
pub use operations::map_over;
pub use operations::map_over_lazy;
pub use operations::preview;
pub use operations::set;
pub use operations::to_list;
pub use operations::view;
pub use operations::view_with;

static_assertions::assert_impl_all!(Description: Send, Sync, Clone);
static_assertions::assert_impl_all!(Identity: Send, Sync, Copy);
static_assertions::assert_impl_all!(ValueElseOnNone<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Composed<Identity, Identity, u8>: Send, Sync, Copy);
