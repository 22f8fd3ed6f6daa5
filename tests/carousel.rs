// tests/carousel.rs
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use cricdex::anim::carousel::Phase;
use cricdex::anim::{Cancel, Carousel, Scoped};
use proptest::prelude::*;

const PERIOD: Duration = Duration::from_secs(5);

fn secs(s: f64) -> Duration {
    Duration::from_secs_f64(s)
}

fn running(len: usize) -> (Carousel, Instant) {
    let t0 = Instant::now();
    let mut c = Carousel::new(len, PERIOD);
    c.start(t0);
    (c, t0)
}

#[test]
fn starts_idle_at_zero() {
    let c = Carousel::new(5, PERIOD);
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.index(), 0);
    assert_eq!(c.time_until_next(Instant::now()), None);
}

#[test]
fn advances_once_per_period_and_wraps() {
    let (mut c, t0) = running(3);
    assert_eq!(c.tick(t0 + secs(4.9)), 0);
    assert_eq!(c.index(), 0);

    assert_eq!(c.tick(t0 + secs(5.0)), 1);
    assert_eq!(c.index(), 1);
    c.tick(t0 + secs(10.0));
    assert_eq!(c.index(), 2);
    c.tick(t0 + secs(15.0));
    assert_eq!(c.index(), 0);
}

#[test]
fn late_frame_catches_up() {
    let (mut c, t0) = running(5);
    assert_eq!(c.tick(t0 + secs(16.0)), 3);
    assert_eq!(c.index(), 3);
    assert_eq!(c.time_until_next(t0 + secs(16.0)), Some(secs(4.0)));
}

#[test]
fn manual_moves_do_not_reset_the_timer() {
    let (mut c, t0) = running(5);
    c.tick(t0 + secs(5.0));
    c.next();
    c.next();
    assert_eq!(c.index(), 3);
    // next automatic advance is still at t0+10
    assert_eq!(c.time_until_next(t0 + secs(6.0)), Some(secs(4.0)));
    c.tick(t0 + secs(10.0));
    assert_eq!(c.index(), 4);
}

#[test]
fn prev_at_zero_wraps_to_last() {
    let (mut c, _) = running(4);
    c.prev();
    assert_eq!(c.index(), 3);
    c.next();
    assert_eq!(c.index(), 0);
}

#[test]
fn jump_sets_index_in_range() {
    let (mut c, _) = running(5);
    c.jump(2);
    assert_eq!(c.index(), 2);
    c.jump(7);
    assert_eq!(c.index(), 2);
}

#[test]
fn shrinking_rotation_keeps_index_in_range() {
    let (mut c, _) = running(5);
    c.jump(4);
    c.set_len(3);
    assert_eq!(c.index(), 1);

    c.set_len(0);
    assert_eq!(c.index(), 0);
    c.next();
    c.prev();
    assert_eq!(c.index(), 0);
    assert!(c.current::<u32>(&[]).is_none());
}

#[test]
fn current_follows_index() {
    let (mut c, _) = running(3);
    let items = ["a", "b", "c"];
    assert_eq!(c.current(&items), Some(&"a"));
    c.prev();
    assert_eq!(c.current(&items), Some(&"c"));
}

#[test]
fn cancelled_carousel_ignores_everything() {
    let (mut c, t0) = running(5);
    c.tick(t0 + secs(5.0));
    c.cancel();
    assert_eq!(c.phase(), Phase::Cancelled);

    assert_eq!(c.tick(t0 + secs(60.0)), 0);
    c.next();
    c.prev();
    c.jump(3);
    c.set_len(2);
    c.start(t0);
    assert_eq!(c.index(), 1);
    assert_eq!(c.time_until_next(t0), None);
}

struct Probe(Rc<Cell<bool>>);

impl Cancel for Probe {
    fn cancel(&mut self) {
        self.0.set(true);
    }
}

#[test]
fn scoped_guard_cancels_on_drop() {
    let flag = Rc::new(Cell::new(false));
    {
        let _guard = Scoped::new(Probe(flag.clone()));
        assert!(!flag.get());
    }
    assert!(flag.get());
}

#[derive(Clone, Debug)]
enum Action {
    Next,
    Prev,
    Jump(usize),
    Tick(u64),
    Resize(usize),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Next),
        Just(Action::Prev),
        (0usize..20).prop_map(Action::Jump),
        (0u64..30_000).prop_map(Action::Tick),
        (1usize..8).prop_map(Action::Resize),
    ]
}

proptest! {
    #[test]
    fn index_always_in_range(len in 1usize..8, actions in prop::collection::vec(action(), 0..60)) {
        let t0 = Instant::now();
        let mut c = Carousel::new(len, PERIOD);
        c.start(t0);
        let mut elapsed = 0u64;

        for a in actions {
            match a {
                Action::Next => c.next(),
                Action::Prev => c.prev(),
                Action::Jump(k) => c.jump(k),
                Action::Tick(ms) => {
                    elapsed += ms;
                    c.tick(t0 + Duration::from_millis(elapsed));
                }
                Action::Resize(n) => c.set_len(n),
            }
            prop_assert!(c.index() < c.len());
        }
    }
}
