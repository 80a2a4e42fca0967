use crate::optics::{Many, Optic, ZeroOrOne, elements, maybe};

/// Focuses every element of a vector, in index order.
///
/// # Example
///
/// ```
/// use reach::optics::{map_over, view};
/// use reach::containers::each;
///
/// assert_eq!(view(&each())(&vec!['a', 'b']), vec!['a', 'b']);
/// assert_eq!(map_over(&each(), |x: u8| x * 2)(vec![1, 2, 3]), vec![2, 4, 6]);
/// ```
#[must_use]
pub fn each<T>() -> impl Optic<Vec<T>, T, Shape = Many> + Clone {
    elements(
        "each",
        |values: &Vec<T>, visit: &mut dyn FnMut(&T)| values.iter().for_each(visit),
        |values: Vec<T>, change: &dyn Fn(T) -> T| values.into_iter().map(change).collect(),
    )
}

/// Focuses the element at `index`, absent when the vector is too short.
///
/// # Example
///
/// ```
/// use reach::optics::{map_over, preview};
/// use reach::containers::element_at;
///
/// assert_eq!(preview(&element_at(1))(&vec![10, 20]), Some(20));
/// assert_eq!(preview(&element_at(5))(&vec![10, 20]), None);
/// assert_eq!(map_over(&element_at(5), |x: i32| x + 1)(vec![10, 20]), vec![10, 20]);
/// ```
#[must_use]
pub fn element_at<T>(index: usize) -> impl Optic<Vec<T>, T, Shape = ZeroOrOne> + Clone {
    maybe(
        format!("element {index}"),
        move |values: &Vec<T>| values.get(index),
        move |mut values: Vec<T>, change: &dyn Fn(T) -> T| {
            if index < values.len() {
                let value = values.swap_remove(index);
                values.push(change(value));
                let last = values.len() - 1;
                values.swap(index, last);
            }
            values
        },
    )
}
