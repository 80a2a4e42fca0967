//! Derived optics used from outside the crate.

use reach::optics::{Optic, has, view};
use reach::{Parts, Variants};

#[derive(Clone, PartialEq, Debug, Parts)]
struct Job {
    state: State,
}

#[derive(Clone, PartialEq, Debug, Variants)]
enum State {
    Queued,
    Running(u8),
}

fn main() {
    let job = Job { state: State::Running(40) };
    let progress = Job::state_part().then(State::on_running());

    assert_eq!(view(&progress)(&job), Some(40));
    assert!(!has(&State::on_queued())(&job.state));
}
