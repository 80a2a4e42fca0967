use crate::optics::{Many, Optic, ZeroOrOne, elements, maybe};

/// Focuses every element of a fixed-size array.
///
/// # Example
///
/// ```
/// use reach::optics::{map_over, to_list};
/// use reach::containers::array_each;
///
/// let rgb = [10_u8, 20, 30];
/// assert_eq!(to_list(&array_each())(&rgb), vec![10, 20, 30]);
/// assert_eq!(map_over(&array_each(), |c: u8| 255 - c)(rgb), [245, 235, 225]);
/// ```
#[must_use]
pub fn array_each<T, const N: usize>() -> impl Optic<[T; N], T, Shape = Many> + Clone {
    elements(
        "each",
        |array: &[T; N], visit: &mut dyn FnMut(&T)| array.iter().for_each(visit),
        |array: [T; N], change: &dyn Fn(T) -> T| array.map(change),
    )
}

/// Focuses the element at `index` of a fixed-size array, absent when
/// `index >= N`.
#[must_use]
pub fn array_element_at<T, const N: usize>(
    index: usize,
) -> impl Optic<[T; N], T, Shape = ZeroOrOne> + Clone {
    maybe(
        format!("element {index}"),
        move |array: &[T; N]| array.get(index),
        move |array: [T; N], change: &dyn Fn(T) -> T| {
            let mut position = 0;
            array.map(|value| {
                let current = position;
                position += 1;
                if current == index { change(value) } else { value }
            })
        },
    )
}
