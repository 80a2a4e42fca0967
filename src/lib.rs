//! # reach
//!
//! Composable optics for reading and updating content nested inside
//! immutable data.
//!
//! ## Overview
//!
//! An optic names a place inside a structure. Optics compose, so a path such
//! as "the `name` of every `item` under `stuff` in `info`" is built from one
//! small optic per step, and the same value then drives both reading and
//! updating:
//!
//! - **Parts**: exactly one element (lens)
//! - **Maybes**: zero or one element (prism / optional)
//! - **Elements**: zero or more elements (traversal)
//!
//! Which operations accept an optic is decided at compile time from its
//! shape: `get` needs a part, `has` and `preview` need at most one element,
//! and `view`, `map_over` and `description` take anything.
//!
//! ## Feature Flags
//!
//! - `derive`: `#[derive(Parts)]` and `#[derive(Variants)]` (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for [`Description`](optics::Description)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use reach::prelude::*;
//! use reach::{compose, part};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Item { name: String, price: u32 }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Order { items: Vec<Item> }
//!
//! let names = compose!(part!(Order, items), each(), part!(Item, name));
//!
//! let order = Order {
//!     items: vec![
//!         Item { name: "tea".to_string(), price: 4 },
//!         Item { name: "cake".to_string(), price: 6 },
//!     ],
//! };
//!
//! assert_eq!(view(&names)(&order), vec!["tea".to_string(), "cake".to_string()]);
//! assert_eq!(description(&names).key(), "items.each.name");
//!
//! let shouted = map_over(&names, |name| name.to_uppercase())(order);
//! assert_eq!(shouted.items[1].name, "CAKE");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the optic trait, the constructors, the operations and the
/// container helpers.
///
/// # Usage
///
/// ```rust
/// use reach::prelude::*;
/// ```
pub mod prelude {
    pub use crate::containers::*;
    pub use crate::optics::*;

    #[cfg(feature = "derive")]
    pub use reach_derive::{Parts, Variants};
}

pub mod containers;
pub mod optics;

#[cfg(feature = "derive")]
pub use reach_derive::{Parts, Variants};

#[doc(hidden)]
pub use paste;
