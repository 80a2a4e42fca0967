//! A user-defined optic over a container kind the library does not cover.

use std::collections::VecDeque;

use reach::compose;
use reach::containers::element_at;
use reach::optics::{Many, Optic, Relation, Shape, description, map_over, view};

/// Reaches every element of a queue, front to back.
struct Queued;

impl<T> Optic<VecDeque<T>, T> for Queued {
    type Shape = Many;

    fn reach<V, R, M>(
        &self,
        deeper: Relation<R, M>,
    ) -> Relation<impl Fn(&VecDeque<T>) -> <Self::Shape as Shape>::View<V>, impl Fn(VecDeque<T>) -> VecDeque<T>>
    where
        R: Fn(&T) -> V,
        M: Fn(T) -> T,
    {
        deeper.wrap(
            "queued",
            |read| move |queue: &VecDeque<T>| queue.iter().map(&read).collect::<Vec<V>>(),
            |change| move |queue: VecDeque<T>| queue.into_iter().map(&change).collect::<VecDeque<T>>(),
        )
    }
}

fn main() {
    let heads = compose!(Queued, element_at(0));
    let queue = VecDeque::from(vec![vec![1, 2], vec![], vec![3]]);

    assert_eq!(view(&heads)(&queue), vec![Some(1), None, Some(3)]);
    assert_eq!(
        map_over(&heads, |head: i32| head * 10)(queue),
        VecDeque::from(vec![vec![10, 2], vec![], vec![30]])
    );
    assert_eq!(description(&heads), ["queued", "element 0"]);
}
