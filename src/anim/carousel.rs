// src/anim/carousel.rs
//
// Featured-player rotation.
//
// Idle -> Running (start) -> Cancelled (cancel, terminal).
// While running, every `period` the index moves forward by one. Manual
// next/prev/jump act immediately and leave the timer phase alone.

use std::time::{Duration, Instant};

use super::Cancel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Cancelled,
}

#[derive(Clone, Debug)]
pub struct Carousel {
    len: usize,
    index: usize,
    period: Duration,
    next_due: Option<Instant>,
    phase: Phase,
}

impl Carousel {
    pub fn new(len: usize, period: Duration) -> Self {
        Self {
            len,
            index: 0,
            period: period.max(Duration::from_millis(1)),
            next_due: None,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase { self.phase }
    pub fn is_running(&self) -> bool { self.phase == Phase::Running }
    pub fn index(&self) -> usize { self.index }
    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Arm the timer. Only valid from Idle.
    pub fn start(&mut self, now: Instant) {
        if self.phase != Phase::Idle {
            return;
        }
        self.phase = Phase::Running;
        self.next_due = now.checked_add(self.period);
        logd!("Carousel: started (len={}, period={:?})", self.len, self.period);
    }

    /// Fire every period that elapsed up to `now`. Returns how many fired.
    pub fn tick(&mut self, now: Instant) -> u32 {
        let Some(due) = self.next_due else { return 0 };
        if self.phase != Phase::Running || now < due {
            return 0;
        }

        let late = now.duration_since(due).as_nanos();
        let fired = 1 + late / self.period.as_nanos();
        let fired = u32::try_from(fired).unwrap_or(u32::MAX);

        self.next_due = due
            .checked_add(self.period.saturating_mul(fired))
            .or_else(|| now.checked_add(self.period));

        if self.len > 0 {
            let step = (fired as usize) % self.len;
            self.index = (self.index + step) % self.len;
        }
        fired
    }

    /// Time left before the next automatic advance.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        match (self.phase, self.next_due) {
            (Phase::Running, Some(due)) => Some(due.saturating_duration_since(now)),
            _ => None,
        }
    }

    pub fn next(&mut self) {
        if self.phase == Phase::Cancelled || self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        if self.phase == Phase::Cancelled || self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Go straight to slide `k` (wrapped into range).
    pub fn jump(&mut self, k: usize) {
        if self.phase == Phase::Cancelled || self.len == 0 {
            return;
        }
        self.index = k % self.len;
    }

    /// Rotation length changed underneath us; keep the index in range.
    pub fn set_len(&mut self, len: usize) {
        if self.phase == Phase::Cancelled {
            return;
        }
        self.len = len;
        self.index = if len == 0 { 0 } else { self.index % len };
    }

    /// The entity under the current index, if the rotation is non-empty.
    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.index % items.len())
    }
}

impl Cancel for Carousel {
    fn cancel(&mut self) {
        if self.phase != Phase::Cancelled {
            logd!("Carousel: cancelled at index {}", self.index);
        }
        self.phase = Phase::Cancelled;
        self.next_due = None;
    }
}
