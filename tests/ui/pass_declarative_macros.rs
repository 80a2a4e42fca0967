//! `compose!`, `part!` and `parts!` used from outside the crate.

use reach::optics::{description, map_over, view};
use reach::{compose, part, parts};

#[derive(Clone, PartialEq, Debug)]
struct Inner {
    value: i32,
}

#[derive(Clone, PartialEq, Debug)]
struct Outer {
    inner: Inner,
    label: String,
}

parts!(Outer { inner: Inner, label: String });

fn main() {
    let value = compose!(Outer::inner_part(), part!(Inner, value));
    let structure = Outer {
        inner: Inner { value: 1 },
        label: "x".to_string(),
    };

    assert_eq!(view(&value)(&structure), 1);
    assert_eq!(map_over(&value, |value| value + 1)(structure).inner.value, 2);
    assert_eq!(description(&value).key(), "inner.value");
}
