//! Derive macros for reach optics.
//!
//! This crate generates part and maybe constructors for user types, so that
//! every field or variant can be reached without writing access and map
//! functions by hand.
//!
//! # Available Derive Macros
//!
//! - [`Parts`]: Generates a part constructor for each struct field
//! - [`Variants`]: Generates a maybe constructor for each enum variant
//!
//! # Example: Parts
//!
//! ```rust,ignore
//! use reach::Parts;
//! use reach::optics::view;
//!
//! #[derive(Clone, Parts)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_part() -> impl Optic<Point, i32, Shape = One>
//! // - Point::y_part() -> impl Optic<Point, i32, Shape = One>
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(view(&Point::x_part())(&point), 10);
//! ```
//!
//! # Example: Variants
//!
//! ```rust,ignore
//! use reach::Variants;
//! use reach::optics::view;
//!
//! #[derive(Clone, Variants)]
//! enum Reply {
//!     Accepted(u64),
//!     Rejected(String),
//!     TimedOut,
//! }
//!
//! // Generated methods:
//! // - Reply::on_accepted() -> impl Optic<Reply, u64, Shape = ZeroOrOne>
//! // - Reply::on_rejected() -> impl Optic<Reply, String, Shape = ZeroOrOne>
//! // - Reply::on_timed_out() -> impl Optic<Reply, (), Shape = ZeroOrOne>
//!
//! assert_eq!(view(&Reply::on_accepted())(&Reply::Accepted(7)), Some(7));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod parts;
mod variants;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro generating a part for every field of a struct.
///
/// This macro generates a method for each field that returns a part
/// focusing on that field, tagged with the field name. The method name
/// follows the pattern `{field_name}_part()`.
///
/// # Requirements
///
/// - The struct must have named fields (not a tuple or unit struct)
///
/// # Generated Code
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_part() -> impl Optic<StructName, T, Shape = One> + Clone { ... }
/// }
/// ```
///
/// # Example
///
/// ```rust,ignore
/// use reach::Parts;
/// use reach::optics::{description, set, view};
///
/// #[derive(Clone, Debug, PartialEq, Parts)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let person = Person { name: "Alice".to_string(), age: 30 };
///
/// assert_eq!(view(&Person::name_part())(&person), "Alice");
/// assert_eq!(set(&Person::age_part(), 31)(person).age, 31);
/// assert_eq!(description(&Person::name_part()), ["name"]);
/// ```
///
/// # Generics
///
/// Generic structs are supported; call the method on the concrete type:
///
/// ```rust,ignore
/// #[derive(Clone, Parts)]
/// struct Labelled<T> {
///     label: String,
///     value: T,
/// }
///
/// let part = Labelled::<i32>::value_part();
/// ```
#[proc_macro_derive(Parts)]
pub fn derive_parts(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(parts::expand(&input))
}

/// Derive macro generating a maybe for every variant of an enum.
///
/// The method name is `on_{variant_name_snake_case}()` and the description
/// tag is the snake-case variant name.
///
/// # Variant Types
///
/// - **Single-field tuple variants** (e.g., `Accepted(u64)`): focus the field
/// - **Unit variants** (e.g., `TimedOut`): focus `()`, useful with `has`
/// - **Multi-field tuple and struct variants**: no method is generated,
///   since their fields are not stored as one value a maybe could borrow
///
/// # Example
///
/// ```rust,ignore
/// use reach::Variants;
/// use reach::optics::{has, map_over};
///
/// #[derive(Clone, Debug, PartialEq, Variants)]
/// enum Reply {
///     Accepted(u64),
///     TimedOut,
/// }
///
/// let doubled = map_over(&Reply::on_accepted(), |id| id * 2)(Reply::Accepted(4));
/// assert_eq!(doubled, Reply::Accepted(8));
/// assert!(has(&Reply::on_timed_out())(&Reply::TimedOut));
/// ```
#[proc_macro_derive(Variants)]
pub fn derive_variants(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(variants::expand(&input))
}
