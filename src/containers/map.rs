use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use crate::optics::{Many, One, Optic, Relation, Shape, elements};

/// Key-value containers that [`value_at`] and [`values`] can reach into.
///
/// Implemented for [`HashMap`] (with any hasher) and [`BTreeMap`].
pub trait Keyed: Sized {
    /// The key type.
    type Key;

    /// The stored value type.
    type Value;

    /// Borrows the value stored under `key`.
    fn lookup(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Replaces the entry under `key`: `Some` inserts, `None` removes.
    fn replace(&mut self, key: Self::Key, value: Option<Self::Value>);

    /// Calls `visit` for every stored value in the container's iteration order.
    fn visit_values(&self, visit: &mut dyn FnMut(&Self::Value));

    /// Rebuilds the container with `change` applied to every stored value.
    ///
    /// The iteration order of the result matches the order of `self`.
    #[must_use]
    fn map_values(self, change: &dyn Fn(Self::Value) -> Self::Value) -> Self;
}

impl<K, V, H> Keyed for HashMap<K, V, H>
where
    K: Eq + Hash,
    V: Clone,
    H: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn replace(&mut self, key: K, value: Option<V>) {
        match value {
            Some(value) => {
                self.insert(key, value);
            }
            None => {
                self.remove(&key);
            }
        }
    }

    fn visit_values(&self, visit: &mut dyn FnMut(&V)) {
        self.values().for_each(visit);
    }

    // In place, so the iteration order survives.
    fn map_values(mut self, change: &dyn Fn(V) -> V) -> Self {
        for value in self.values_mut() {
            *value = change(value.clone());
        }
        self
    }
}

impl<K, V> Keyed for BTreeMap<K, V>
where
    K: Ord,
{
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn replace(&mut self, key: K, value: Option<V>) {
        match value {
            Some(value) => {
                self.insert(key, value);
            }
            None => {
                self.remove(&key);
            }
        }
    }

    fn visit_values(&self, visit: &mut dyn FnMut(&V)) {
        self.values().for_each(visit);
    }

    fn map_values(self, change: &dyn Fn(V) -> V) -> Self {
        self.into_iter().map(|(key, value)| (key, change(value))).collect()
    }
}

/// A part focusing the optional value stored under one key.
///
/// Created by [`value_at`].
pub struct ValueAt<M: Keyed> {
    key: M::Key,
    tag: String,
    _marker: PhantomData<fn(M) -> M>,
}

impl<M> Optic<M, Option<M::Value>> for ValueAt<M>
where
    M: Keyed,
    M::Key: Clone,
    M::Value: Clone,
{
    type Shape = One;

    fn reach<V, R, Mp>(
        &self,
        deeper: Relation<R, Mp>,
    ) -> Relation<impl Fn(&M) -> <Self::Shape as Shape>::View<V>, impl Fn(M) -> M>
    where
        R: Fn(&Option<M::Value>) -> V,
        Mp: Fn(Option<M::Value>) -> Option<M::Value>,
    {
        deeper.wrap(
            &self.tag,
            |read| move |map: &M| read(&map.lookup(&self.key).cloned()),
            |change| {
                move |mut map: M| {
                    let current = map.lookup(&self.key).cloned();
                    map.replace(self.key.clone(), change(current));
                    map
                }
            },
        )
    }
}

impl<M> Clone for ValueAt<M>
where
    M: Keyed,
    M::Key: Clone,
{
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            tag: self.tag.clone(),
            _marker: PhantomData,
        }
    }
}

impl<M> Debug for ValueAt<M>
where
    M: Keyed,
    M::Key: Debug,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ValueAt")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Focuses the value under `key` as an `Option`.
///
/// Viewing yields `None` for a missing key. Mapping to `Some` inserts or
/// overwrites the entry and mapping to `None` removes it, so this is a part
/// rather than a maybe: the element, present or not, always exists.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use reach::optics::{description, map_over, view};
/// use reach::containers::value_at;
///
/// type Stock = HashMap<&'static str, i32>;
///
/// let stock: Stock = HashMap::from([("apple", 3)]);
///
/// assert_eq!(view(&value_at::<Stock>("apple"))(&stock), Some(3));
/// assert_eq!(view(&value_at::<Stock>("pear"))(&stock), None);
///
/// let restocked = map_over(&value_at::<Stock>("pear"), |_| Some(5))(stock.clone());
/// assert_eq!(restocked.get("pear"), Some(&5));
///
/// let sold_out = map_over(&value_at::<Stock>("apple"), |_| None)(stock);
/// assert!(sold_out.is_empty());
///
/// assert_eq!(description(&value_at::<Stock>("apple")), ["value \"apple\""]);
/// ```
#[must_use]
pub fn value_at<M>(key: M::Key) -> ValueAt<M>
where
    M: Keyed,
    M::Key: Debug,
{
    ValueAt {
        tag: format!("value {key:?}"),
        key,
        _marker: PhantomData,
    }
}

/// Focuses every value of a map, in the map's iteration order.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use reach::optics::{map_over, view};
/// use reach::containers::values;
///
/// let prices = BTreeMap::from([("tea", 4), ("cake", 6)]);
/// let prices_of_each = values::<BTreeMap<&str, i32>>();
///
/// assert_eq!(view(&prices_of_each)(&prices), vec![6, 4]);
///
/// let discounted = map_over(&prices_of_each, |price| price - 1)(prices);
/// assert_eq!(discounted, BTreeMap::from([("tea", 3), ("cake", 5)]));
/// ```
#[must_use]
pub fn values<M: Keyed>() -> impl Optic<M, M::Value, Shape = Many> + Clone {
    elements("values", M::visit_values, M::map_values)
}
