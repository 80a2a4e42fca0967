//! Ready-made optics over standard library containers.
//!
//! Every optic here is built from the public constructors in
//! [`optics`](crate::optics), except [`value_at`], whose element (an
//! `Option` of the stored value) does not exist inside the map and is
//! therefore produced by a direct [`Optic`](crate::optics::Optic) impl.
//!
//! | Optic                  | Structure            | Element     | Shape   | Tag             |
//! |------------------------|----------------------|-------------|---------|-----------------|
//! | [`first`]              | `(A, B)`             | `A`         | part    | `"first"`       |
//! | [`second`]             | `(A, B)`             | `B`         | part    | `"second"`      |
//! | [`each`]               | `Vec<T>`             | `T`         | elements| `"each"`        |
//! | [`element_at`]         | `Vec<T>`             | `T`         | maybe   | `"element {i}"` |
//! | [`array_each`]         | `[T; N]`             | `T`         | elements| `"each"`        |
//! | [`array_element_at`]   | `[T; N]`             | `T`         | maybe   | `"element {i}"` |
//! | [`value_at`]           | `HashMap`/`BTreeMap` | `Option<V>` | part    | `"value {key:?}"` |
//! | [`values`]             | `HashMap`/`BTreeMap` | `V`         | elements| `"values"`      |

mod array;
mod map;
mod tuple;
mod vec;

pub use array::array_each;
pub use array::array_element_at;
pub use map::Keyed;
pub use map::ValueAt;
pub use map::value_at;
pub use map::values;
pub use tuple::first;
pub use tuple::second;
pub use vec::each;
pub use vec::element_at;
