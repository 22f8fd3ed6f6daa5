// src/anim/mod.rs
//
// Timed state machines driven by the frame loop. Nothing here owns a thread
// or an OS timer: the owner calls `tick(now)` every frame and asks how long
// it may sleep before the next repaint.

pub mod carousel;
pub mod count_up;

use std::ops::{Deref, DerefMut};

pub use carousel::Carousel;
pub use count_up::CountUp;

/// A pending timer or frame callback that can be released early.
pub trait Cancel {
    /// Stop for good. No later call may change observable state.
    fn cancel(&mut self);
}

/// Owns a timed state machine for the lifetime of a view and cancels it on
/// drop, whichever way the view goes away.
#[derive(Debug)]
pub struct Scoped<T: Cancel> {
    inner: T,
}

impl<T: Cancel> Scoped<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: Cancel> Deref for Scoped<T> {
    type Target = T;
    fn deref(&self) -> &T { &self.inner }
}

impl<T: Cancel> DerefMut for Scoped<T> {
    fn deref_mut(&mut self) -> &mut T { &mut self.inner }
}

impl<T: Cancel> Drop for Scoped<T> {
    fn drop(&mut self) {
        self.inner.cancel();
    }
}
