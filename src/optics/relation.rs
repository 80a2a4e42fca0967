//! The relation record threaded through optic composition.
//!
//! A [`Relation`] describes access to some element from the point of view of
//! a structure: how to read it (`view`), how to rebuild the structure with it
//! changed (`map`), and which layers were crossed to get there
//! (`description`). Every optic consumes the relation of its element and
//! returns the relation of its structure, one level shallower.
//!
//! Relations exist only while a single operation such as
//! [`view`](crate::optics::view) or [`map_over`](crate::optics::map_over)
//! runs. Each operation starts from a seed in which the functions it does not
//! need are simply absent:
//!
//! | Seed                     | `view`     | `map`      |
//! |--------------------------|------------|------------|
//! | [`Relation::viewing`]    | the reader | absent     |
//! | [`Relation::mapping`]    | absent     | the change |
//! | [`Relation::describing`] | absent     | absent     |
//!
//! Layers only wrap the functions that are present and never call them while
//! wiring, so a description can be derived without touching any data.

use super::description::Description;

/// The `view`/`map`/`description` triple for one composition step.
///
/// # Type Parameters
///
/// - `V`: The reader, `Fn(&Structure) -> View`
/// - `M`: The rebuilder, `Fn(Structure) -> Structure`, with the caller's
///   change already applied at the innermost layer
pub struct Relation<V, M> {
    view: Option<V>,
    map: Option<M>,
    description: Description,
}

impl<A, R> Relation<R, fn(A) -> A> {
    /// Seeds a relation that can only read, starting with `read` at the focus.
    #[must_use]
    pub fn viewing(read: R) -> Self {
        Self {
            view: Some(read),
            map: None,
            description: Description::new(),
        }
    }
}

impl<A, M> Relation<fn(&A), M> {
    /// Seeds a relation that can only rebuild, applying `change` at the focus.
    #[must_use]
    pub fn mapping(change: M) -> Self {
        Self {
            view: None,
            map: Some(change),
            description: Description::new(),
        }
    }
}

impl<A> Relation<fn(&A), fn(A) -> A> {
    /// Seeds a relation that carries neither function, only the tag trail.
    #[must_use]
    pub fn describing() -> Self {
        Self {
            view: None,
            map: None,
            description: Description::new(),
        }
    }
}

impl<V, M> Relation<V, M> {
    /// Builds the next outer layer and records `tag` in front of the trail.
    ///
    /// `view` receives the deeper reader and returns the reader for the
    /// containing structure; `map` does the same for the rebuilder. Either is
    /// skipped when the deeper function is absent.
    ///
    /// This is the building block for optics over container kinds the
    /// library does not cover.
    ///
    /// # Example
    ///
    /// ```
    /// use reach::optics::{Optic, Relation, One, Shape, view, map_over};
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Celsius(f64);
    ///
    /// /// Reads and writes a temperature in Fahrenheit.
    /// struct Fahrenheit;
    ///
    /// impl Optic<Celsius, f64> for Fahrenheit {
    ///     type Shape = One;
    ///
    ///     fn reach<V, R, M>(
    ///         &self,
    ///         deeper: Relation<R, M>,
    ///     ) -> Relation<impl Fn(&Celsius) -> <Self::Shape as Shape>::View<V>, impl Fn(Celsius) -> Celsius>
    ///     where
    ///         R: Fn(&f64) -> V,
    ///         M: Fn(f64) -> f64,
    ///     {
    ///         deeper.wrap(
    ///             "fahrenheit",
    ///             |read| move |celsius: &Celsius| read(&(celsius.0 * 9.0 / 5.0 + 32.0)),
    ///             |change| move |celsius: Celsius| {
    ///                 Celsius((change(celsius.0 * 9.0 / 5.0 + 32.0) - 32.0) * 5.0 / 9.0)
    ///             },
    ///         )
    ///     }
    /// }
    ///
    /// assert_eq!(view(&Fahrenheit)(&Celsius(100.0)), 212.0);
    /// assert_eq!(map_over(&Fahrenheit, |_| 32.0)(Celsius(100.0)), Celsius(0.0));
    /// ```
    #[must_use]
    pub fn wrap<OuterView, OuterMap>(
        self,
        tag: &str,
        view: impl FnOnce(V) -> OuterView,
        map: impl FnOnce(M) -> OuterMap,
    ) -> Relation<OuterView, OuterMap> {
        Relation {
            view: self.view.map(view),
            map: self.map.map(map),
            description: self.description.prepend(tag),
        }
    }

    /// Builds the next outer layer without recording a tag.
    ///
    /// Used by adapters that change how a result is shaped but do not cross
    /// into a new container, such as [`flat`](crate::optics::flat).
    #[must_use]
    pub fn adapt<OuterView, OuterMap>(
        self,
        view: impl FnOnce(V) -> OuterView,
        map: impl FnOnce(M) -> OuterMap,
    ) -> Relation<OuterView, OuterMap> {
        Relation {
            view: self.view.map(view),
            map: self.map.map(map),
            description: self.description,
        }
    }

    /// Returns the tag trail accumulated so far.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    pub(crate) fn into_view(self) -> Option<V> {
        self.view
    }

    pub(crate) fn into_map(self) -> Option<M> {
        self.map
    }

    pub(crate) fn into_description(self) -> Description {
        self.description
    }
}

impl<V, M> std::fmt::Debug for Relation<V, M> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Relation")
            .field("view", &self.view.is_some())
            .field("map", &self.map.is_some())
            .field("description", &self.description)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewing_seed_has_only_view() {
        let relation = Relation::<_, fn(i32) -> i32>::viewing(|value: &i32| *value);
        assert!(relation.view.is_some());
        assert!(relation.map.is_none());
        assert!(relation.description().is_empty());
    }

    #[test]
    fn test_mapping_seed_has_only_map() {
        let relation = Relation::<fn(&i32), _>::mapping(|value: i32| value + 1);
        assert!(relation.view.is_none());
        assert!(relation.map.is_some());
    }

    #[test]
    fn test_describing_seed_has_no_functions() {
        let relation = Relation::<fn(&i32), fn(i32) -> i32>::describing();
        assert!(relation.into_view().is_none());
    }

    #[test]
    fn test_wrap_skips_absent_functions() {
        let relation = Relation::<fn(&i32), fn(i32) -> i32>::describing().wrap(
            "outer",
            |_| -> fn(&(i32,)) -> i32 { unreachable!("view is absent") },
            |_| -> fn((i32,)) -> (i32,) { unreachable!("map is absent") },
        );
        assert_eq!(relation.description(), &["outer"]);
        assert!(relation.into_map().is_none());
    }

    #[test]
    fn test_wrap_prepends_tag_and_wires_functions() {
        let relation = Relation::<_, fn(i32) -> i32>::viewing(|value: &i32| *value * 10)
            .wrap("inner", |read| move |pair: &(i32, i32)| read(&pair.1), |map| map)
            .wrap("outer", |read| move |nested: &[(i32, i32); 1]| read(&nested[0]), |map| map);

        assert_eq!(relation.description(), &["outer", "inner"]);
        let read = relation.into_view();
        assert_eq!(read.map(|read| read(&[(1, 2)])), Some(20));
    }

    #[test]
    fn test_adapt_keeps_description() {
        let relation = Relation::<_, fn(i32) -> i32>::viewing(|value: &i32| *value)
            .wrap("tag", |read| read, |map| map)
            .adapt(|read| move |value: &i32| read(value) + 1, |map| map);
        assert_eq!(relation.description().len(), 1);
    }
}
