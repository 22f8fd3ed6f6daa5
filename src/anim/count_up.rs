// src/anim/count_up.rs
//
// Counts a displayed integer from 0 to `target` with a cubic ease-out, the
// first time its owner reports it visible. The start is latched: later
// visibility changes never restart it.

use std::time::{Duration, Instant};

use super::Cancel;

#[derive(Clone, Debug)]
pub struct CountUp {
    target: u64,
    duration: Duration,
    value: u64,
    started_at: Option<Instant>,
    has_started: bool,
    cancelled: bool,
}

impl CountUp {
    pub fn new(target: u64, duration: Duration) -> Self {
        Self {
            target,
            duration,
            value: 0,
            started_at: None,
            has_started: false,
            cancelled: false,
        }
    }

    /// `round(target * (1 - (1 - min(t/D, 1))^3))`
    pub fn value_at(target: u64, duration: Duration, elapsed: Duration) -> u64 {
        let progress = if duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
        };
        if progress >= 1.0 {
            return target;
        }
        let eased = 1.0 - (1.0 - progress).powi(3);
        (target as f64 * eased).round() as u64
    }

    pub fn target(&self) -> u64 { self.target }
    pub fn value(&self) -> u64 { self.value }
    pub fn has_started(&self) -> bool { self.has_started }

    /// Started, not finished, not cancelled: the owner should keep repainting.
    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && !self.cancelled && self.value < self.target
    }

    pub fn is_finished(&self) -> bool {
        self.has_started && self.value == self.target
    }

    /// Visibility report from the owner. Starts the animation on the first
    /// visible report only. Returns true if this call started it.
    pub fn on_visibility(&mut self, visible: bool, now: Instant) -> bool {
        if !visible || self.has_started || self.cancelled {
            return false;
        }
        self.has_started = true;
        self.started_at = Some(now);
        self.value = Self::value_at(self.target, self.duration, Duration::ZERO);
        true
    }

    /// Advance to `now` and return the displayed value.
    pub fn tick(&mut self, now: Instant) -> u64 {
        if self.cancelled {
            return self.value;
        }
        if let Some(start) = self.started_at {
            let elapsed = now.saturating_duration_since(start);
            // never step backwards if the caller's clock does
            self.value = self.value.max(Self::value_at(self.target, self.duration, elapsed));
            if self.value == self.target {
                self.started_at = None;
            }
        }
        self.value
    }
}

impl Cancel for CountUp {
    fn cancel(&mut self) {
        self.cancelled = true;
        self.started_at = None;
    }
}
