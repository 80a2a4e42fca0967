//! Descriptions: the ordered tag trail of a composed optic.
//!
//! Every tagged optic layer contributes one string. The trail is built while
//! composition unwinds, with each outer layer prepending its tag, so the
//! finished description reads from the root structure inward.
//!
//! Descriptions depend only on which optics were composed and in which order,
//! never on the data the optic is later used with. That makes them usable as
//! stable keys, for example to remember which field path a user edited.
//!
//! # Examples
//!
//! ```
//! use reach::optics::{compose, description};
//! use reach::containers::{each, first};
//!
//! let optic = compose(first::<Vec<i32>, String>(), each());
//! let trail = description(&optic);
//!
//! assert_eq!(trail, ["first", "each"]);
//! assert_eq!(trail.key(), "first.each");
//! ```

use std::fmt;

use smallvec::SmallVec;

/// Separator placed between tags by [`Description::key`].
pub const KEY_SEPARATOR: &str = ".";

/// An ordered sequence of tags, one per optic layer, outermost first.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Description {
    tags: SmallVec<[String; 4]>,
}

impl Description {
    /// Creates an empty description.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this description with `tag` placed in front of every existing tag.
    #[must_use]
    pub(crate) fn prepend(mut self, tag: &str) -> Self {
        self.tags.insert(0, tag.to_owned());
        self
    }

    /// Returns the number of tagged layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns `true` if no tagged layer has been applied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Returns the tags, outermost first.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Iterates over the tags, outermost first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Joins the tags with [`KEY_SEPARATOR`] into a single string key.
    ///
    /// ```
    /// use reach::optics::{compose, description};
    /// use reach::containers::{element_at, second};
    ///
    /// let optic = compose(second::<u8, Vec<u8>>(), element_at(3));
    /// assert_eq!(description(&optic).key(), "second.element 3");
    /// ```
    #[must_use]
    pub fn key(&self) -> String {
        self.tags.join(KEY_SEPARATOR)
    }
}

impl fmt::Display for Description {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, tag) in self.tags.iter().enumerate() {
            if index > 0 {
                formatter.write_str(KEY_SEPARATOR)?;
            }
            formatter.write_str(tag)?;
        }
        Ok(())
    }
}

impl<const N: usize> PartialEq<[&str; N]> for Description {
    fn eq(&self, other: &[&str; N]) -> bool {
        self.tags.len() == N && self.tags.iter().zip(other).all(|(tag, other)| tag == other)
    }
}

impl From<Description> for Vec<String> {
    fn from(description: Description) -> Self {
        description.tags.into_vec()
    }
}

impl<'a> IntoIterator for &'a Description {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}
