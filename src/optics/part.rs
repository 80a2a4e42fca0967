//! Part optics: exactly one element that is always present.
//!
//! A part is the lens of this library. It reads its element by reference and
//! rebuilds the structure by applying a change to that element.
//!
//! # Laws
//!
//! 1. **Get-Set**: Writing back what was read yields the original.
//!    ```text
//!    map_over(part, |_| view(part)(&source))(source) == source
//!    ```
//!
//! 2. **Set-Get**: Reading after a write yields the written value.
//!    ```text
//!    view(part)(&map_over(part, |_| value)(source)) == value
//!    ```
//!
//! # Examples
//!
//! ```
//! use reach::optics::{view, map_over};
//! use reach::part;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_part = part!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(view(&x_part)(&point), 10);
//!
//! let updated = map_over(&x_part, |x| x * 3)(point);
//! assert_eq!(updated, Point { x: 30, y: 20 });
//! ```

use std::marker::PhantomData;

use super::optic::Optic;
use super::relation::Relation;
use super::shape::{One, Shape};

/// A part built from an access function and a map function.
///
/// Created by [`part`] or the [`part!`](crate::part!) macro.
///
/// # Type Parameters
///
/// - `S`: The structure type
/// - `A`: The element type
/// - `G`: The access function type
/// - `Mp`: The map function type
pub struct FunctionPart<S, A, G, Mp> {
    tag: String,
    access: G,
    map: Mp,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G, Mp> FunctionPart<S, A, G, Mp>
where
    G: Fn(&S) -> &A,
    Mp: Fn(S, &dyn Fn(A) -> A) -> S,
{
    /// Creates a new `FunctionPart`.
    ///
    /// # Arguments
    ///
    /// * `tag` - The description tag of this layer
    /// * `access` - Borrows the element from the structure
    /// * `map` - Rebuilds the structure with the change applied to the element
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

impl<S, A, G, Mp> Optic<S, A> for FunctionPart<S, A, G, Mp>
where
    G: Fn(&S) -> &A,
    Mp: Fn(S, &dyn Fn(A) -> A) -> S,
{
    type Shape = One;

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
            |read| move |structure: &S| read((self.access)(structure)),
            |change| move |structure: S| (self.map)(structure, &change),
        )
    }
}

impl<S, A, G: Clone, Mp: Clone> Clone for FunctionPart<S, A, G, Mp> {
    fn clone(&self) -> Self {
        Self {
            tag: self.tag.clone(),
            access: self.access.clone(),
            map: self.map.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, Mp> std::fmt::Debug for FunctionPart<S, A, G, Mp> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionPart")
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

/// Creates a part from an access function and a map function.
///
/// `map` receives the structure and the change to apply to its element; it
/// must change exactly the element `access` borrows.
///
/// # Example
///
/// ```
/// use reach::optics::{part, view, map_over};
///
/// let celsius = part(
///     "celsius",
///     |reading: &(String, f64)| &reading.1,
///     |(sensor, value): (String, f64), change: &dyn Fn(f64) -> f64| (sensor, change(value)),
/// );
///
/// let reading = ("kitchen".to_string(), 21.5);
/// assert_eq!(view(&celsius)(&reading), 21.5);
/// assert_eq!(map_over(&celsius, |value| value + 1.0)(reading).1, 22.5);
/// ```
#[must_use]
pub fn part<S, A, G, Mp>(tag: impl Into<String>, access: G, map: Mp) -> FunctionPart<S, A, G, Mp>
where
    G: Fn(&S) -> &A,
    Mp: Fn(S, &dyn Fn(A) -> A) -> S,
{
    FunctionPart::new(tag, access, map)
}

/// Creates a part for a struct field, tagged with the field name.
///
/// # Syntax
///
/// ```text
/// part!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use reach::optics::{description, view, set};
/// use reach::part;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Person { name: String, age: u32 }
///
/// let name = part!(Person, name);
/// let person = Person { name: "Alice".to_string(), age: 30 };
///
/// assert_eq!(view(&name)(&person), "Alice");
/// assert_eq!(set(&name, "Bob".to_string())(person).name, "Bob");
/// assert_eq!(description(&name), ["name"]);
/// ```
#[macro_export]
macro_rules! part {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::part(
            stringify!($field),
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, change: &dyn Fn(_) -> _| {
                source.$field = change(source.$field);
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::part(
            stringify!($field),
            |source: &$struct_type<$($generic),+>| &source.$field,
            |mut source: $struct_type<$($generic),+>, change: &dyn Fn(_) -> _| {
                source.$field = change(source.$field);
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::part(
            stringify!($field),
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, change: &dyn Fn(_) -> _| {
                source.$field = change(source.$field);
                source
            },
        )
    };
}

/// Generates a `<field>_part()` constructor for each listed field of a struct.
///
/// The declarative counterpart of `#[derive(Parts)]`, for crates built
/// without the `derive` feature. Every listed field needs its type, since a
/// declarative macro cannot see the struct definition.
///
/// # Syntax
///
/// ```text
/// parts!(StructType { field: Type, other: Type });
/// ```
///
/// # Example
///
/// ```
/// use reach::optics::{description, view};
/// use reach::parts;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Server { host: String, port: u16 }
///
/// parts!(Server { host: String, port: u16 });
///
/// let server = Server { host: "localhost".to_string(), port: 8080 };
/// assert_eq!(view(&Server::port_part())(&server), 8080);
/// assert_eq!(description(&Server::host_part()), ["host"]);
/// ```
#[macro_export]
macro_rules! parts {
    ($struct_type:ident { $($field:ident : $field_type:ty),+ $(,)? }) => {
        $crate::paste::paste! {
            impl $struct_type {
                $(
                    #[doc = concat!("Returns a part focusing the `", stringify!($field), "` field.")]
                    #[must_use]
                    #[allow(dead_code)]
                    pub fn [<$field _part>]() -> impl $crate::optics::Optic<
                        Self,
                        $field_type,
                        Shape = $crate::optics::One,
                    > + Clone {
                        $crate::part!($struct_type, $field)
                    }
                )+
            }
        }
    };
}
