//! Operations that drive an optic against real data.
//!
//! Each operation seeds a [`Relation`] with only the functions it needs,
//! lets the optic wire it up from the focus outward, and hands back the
//! finished function for the root structure. None of them can fail: absent
//! elements show up as `None` or an empty list when viewing and leave the
//! structure untouched when mapping.
//!
//! | Operation         | Accepts        | Returns for a structure          |
//! |-------------------|----------------|----------------------------------|
//! | [`view`]          | any optic      | the shape's view                 |
//! | [`view_with`]     | any optic      | the shape's view of a reader     |
//! | [`to_list`]       | any optic      | `Vec` of every element           |
//! | [`preview`]       | at most one    | `Option` of the element          |
//! | [`get`]           | exactly one    | the element                      |
//! | [`has`]           | at most one    | whether the element is present   |
//! | [`map_over`]      | any optic      | the rebuilt structure            |
//! | [`set`]           | any optic      | the rebuilt structure            |
//! | [`map_over_lazy`] | any optic      | the original if nothing changed  |
//! | [`description`]   | any optic      | (no structure needed)            |

use super::description::Description;
use super::optic::Optic;
use super::relation::Relation;
use super::shape::{AtMostOne, ExactlyOne, Shape};

/// Returns a function reading through `optic`, cloning each element.
///
/// The result has the optic's view shape: a value for parts, an `Option` for
/// maybes, a `Vec` for elements, and those nested for compositions.
///
/// # Example
///
/// ```
/// use reach::optics::{view, compose, on_some};
/// use reach::containers::{each, first};
///
/// let structure = (vec![Some(1), None, Some(3)], "label");
/// let optic = compose(first::<Vec<Option<i32>>, &str>(), compose(each(), on_some()));
///
/// assert_eq!(view(&optic)(&structure), vec![Some(1), None, Some(3)]);
/// ```
pub fn view<S, A, O>(optic: &O) -> impl Fn(&S) -> <O::Shape as Shape>::View<A>
where
    O: Optic<S, A>,
    A: Clone,
{
    view_with(optic, A::clone)
}

/// Returns a function reading through `optic`, turning each element into a
/// view with `read`.
///
/// Useful when the element is expensive to clone or not `Clone` at all.
///
/// # Example
///
/// ```
/// use reach::optics::view_with;
/// use reach::containers::each;
///
/// let names = vec!["ada".to_string(), "grace".to_string()];
/// let lengths = view_with(&each(), |name: &String| name.len())(&names);
/// assert_eq!(lengths, vec![3, 5]);
/// ```
#[allow(clippy::missing_panics_doc)]
pub fn view_with<S, A, V, O, R>(optic: &O, read: R) -> impl Fn(&S) -> <O::Shape as Shape>::View<V>
where
    O: Optic<S, A>,
    R: Fn(&A) -> V,
{
    optic
        .reach(Relation::<R, fn(A) -> A>::viewing(read))
        .into_view()
        .expect("a viewing seed keeps its reader through every layer")
}

/// Returns a function listing every element reached by `optic`.
///
/// Works for every shape, flattening nested results.
pub fn to_list<S, A, O>(optic: &O) -> impl Fn(&S) -> Vec<A>
where
    O: Optic<S, A>,
    A: Clone,
{
    let read = view(optic);
    move |structure: &S| <O::Shape as Shape>::to_vec(read(structure))
}

/// Returns a function reading the single, possibly absent, element.
///
/// Unlike [`view`], nested options from chained maybes are flattened.
///
/// # Example
///
/// ```
/// use reach::optics::{compose, preview, on_some};
///
/// let optic = compose(on_some::<Option<u8>>(), on_some());
/// assert_eq!(preview(&optic)(&Some(Some(4))), Some(4));
/// assert_eq!(preview(&optic)(&Some(None)), None);
/// ```
pub fn preview<S, A, O>(optic: &O) -> impl Fn(&S) -> Option<A>
where
    O: Optic<S, A>,
    O::Shape: AtMostOne,
    A: Clone,
{
    let read = view(optic);
    move |structure: &S| <O::Shape as AtMostOne>::to_option(read(structure))
}

/// Returns a function reading the single element of a part, however deeply
/// composed.
pub fn get<S, A, O>(optic: &O) -> impl Fn(&S) -> A
where
    O: Optic<S, A>,
    O::Shape: ExactlyOne,
    A: Clone,
{
    let read = view(optic);
    move |structure: &S| <O::Shape as ExactlyOne>::to_value(read(structure))
}

/// Returns a function telling whether the element of `optic` is present.
///
/// The view is flattened with [`AtMostOne::to_option`] before the check, so
/// a chain of maybes has its element only when every layer is present:
/// `Some(None)` counts as absent.
///
/// # Example
///
/// ```
/// use reach::optics::{compose, has, on_none, on_ok, on_some};
///
/// assert!(has(&on_some::<i32>())(&Some(3)));
/// assert!(!has(&on_some::<i32>())(&None));
/// assert!(has(&on_none::<i32>())(&None));
///
/// let ok_value = compose(on_some::<Result<i32, ()>>(), on_ok());
/// assert!(has(&ok_value)(&Some(Ok(1))));
/// assert!(!has(&ok_value)(&Some(Err(()))));
/// ```
pub fn has<S, A, O>(optic: &O) -> impl Fn(&S) -> bool
where
    O: Optic<S, A>,
    O::Shape: AtMostOne,
{
    let read = view_with(optic, |_: &A| ());
    move |structure: &S| <O::Shape as AtMostOne>::to_option(read(structure)).is_some()
}

/// Returns a function rebuilding a structure with `change` applied to every
/// element `optic` reaches.
///
/// Parts change exactly their element, elements change every element, and
/// maybes change their element when it is present and otherwise return the
/// structure unchanged.
///
/// # Example
///
/// ```
/// use reach::optics::{map_over, compose};
/// use reach::containers::{each, second};
///
/// let optic = compose(second::<char, Vec<i32>>(), each());
/// assert_eq!(map_over(&optic, |x| x + 1)(('a', vec![1, 2])), ('a', vec![2, 3]));
/// ```
///
/// The change keeps the element type, and with it the structure type:
///
/// ```compile_fail
/// use reach::optics::map_over;
/// use reach::containers::each;
///
/// let _ = map_over(&each::<i32>(), |x: i32| x.to_string())(vec![1, 2]);
/// ```
#[allow(clippy::missing_panics_doc)]
pub fn map_over<S, A, O, F>(optic: &O, change: F) -> impl Fn(S) -> S
where
    O: Optic<S, A>,
    F: Fn(A) -> A,
{
    optic
        .reach(Relation::<fn(&A), F>::mapping(change))
        .into_map()
        .expect("a mapping seed keeps its change through every layer")
}

/// Returns a function replacing every element `optic` reaches with `value`.
pub fn set<S, A, O>(optic: &O, value: A) -> impl Fn(S) -> S
where
    O: Optic<S, A>,
    A: Clone,
{
    map_over(optic, move |_| value.clone())
}

/// Like [`map_over`], but hands back the original structure when the change
/// leaves the view through `optic` equal to what it was.
///
/// Only the view under `optic` is compared, so other parts of the structure
/// never cause a rebuilt copy to be returned. Shared parts such as `Rc` or
/// `Arc` fields therefore keep their pointer identity across no-op edits,
/// which consumers can use to skip work. Views must be pure.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use reach::optics::{map_over_lazy, part};
///
/// let shared = part(
///     "shared",
///     |holder: &Rc<i32>| &**holder,
///     |holder: Rc<i32>, change: &dyn Fn(i32) -> i32| Rc::new(change(*holder)),
/// );
///
/// let original = Rc::new(5);
/// let same = map_over_lazy(&shared, |x| x)(Rc::clone(&original));
/// assert!(Rc::ptr_eq(&original, &same));
///
/// let changed = map_over_lazy(&shared, |x| x + 1)(Rc::clone(&original));
/// assert_eq!(*changed, 6);
/// ```
pub fn map_over_lazy<S, A, O, F>(optic: &O, change: F) -> impl Fn(S) -> S
where
    O: Optic<S, A>,
    F: Fn(A) -> A,
    A: Clone,
    S: Clone,
    <O::Shape as Shape>::View<A>: PartialEq,
{
    let read = view(optic);
    let update = map_over(optic, change);
    move |structure: S| {
        let updated = update(structure.clone());
        if read(&updated) == read(&structure) {
            structure
        } else {
            updated
        }
    }
}

/// Returns the tag trail of `optic`, outermost first.
///
/// No data is needed and no access or map function is ever called.
///
/// # Example
///
/// ```
/// use reach::compose;
/// use reach::optics::{description, on_ok};
/// use reach::containers::{element_at, second};
///
/// let optic = compose!(on_ok::<(u8, Vec<u8>), ()>(), second(), element_at(2));
/// assert_eq!(description(&optic), ["ok", "second", "element 2"]);
/// ```
pub fn description<S, A, O>(optic: &O) -> Description
where
    O: Optic<S, A>,
{
    optic
        .reach(Relation::<fn(&A), fn(A) -> A>::describing())
        .into_description()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{compose, on_some};
    use crate::part;

    #[derive(Clone, Debug, PartialEq)]
    struct Record {
        count: u32,
        label: Option<String>,
    }

    fn record() -> Record {
        Record {
            count: 2,
            label: Some("two".to_string()),
        }
    }

    #[test]
    fn test_get_reads_part() {
        assert_eq!(get(&part!(Record, count))(&record()), 2);
    }

    #[test]
    fn test_preview_reads_maybe_chain() {
        let optic = compose(part!(Record, label), on_some());
        assert_eq!(preview(&optic)(&record()), Some("two".to_string()));
    }

    #[test]
    fn test_has_on_part_is_always_true() {
        assert!(has(&part!(Record, count))(&record()));
    }

    #[test]
    fn test_set_replaces_element() {
        let updated = set(&part!(Record, count), 9)(record());
        assert_eq!(updated.count, 9);
        assert_eq!(updated.label, record().label);
    }

    #[test]
    fn test_map_over_lazy_returns_changed_structure() {
        let updated = map_over_lazy(&part!(Record, count), |count| count + 1)(record());
        assert_eq!(updated.count, 3);
    }

    #[test]
    fn test_map_over_lazy_keeps_unchanged_structure() {
        let updated = map_over_lazy(&part!(Record, count), |count| count)(record());
        assert_eq!(updated, record());
    }

    #[test]
    fn test_description_of_untagged_optic_is_empty() {
        assert!(description::<i32, i32, _>(&crate::optics::identity()).is_empty());
    }
}
