use crate::animation::ease::Ease;

/// A one-shot progress animation from `start` to `end` over a fixed duration.
///
/// A glide is pure data: it is sampled by wall-clock (or simulated)
/// milliseconds and never schedules itself. The session owns at most one
/// glide at a time; starting a new one replaces, and thereby cancels, the
/// old one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glide {
    start: f64,
    end: f64,
    started_at_ms: f64,
    duration_ms: f64,
    ease: Ease,
}

/// One sampled glide step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlideSample {
    /// Interpolated progress value.
    pub value: f64,
    /// True once the glide has reached its end value.
    pub done: bool,
}

impl Glide {
    /// Begin a glide at `started_at_ms`.
    ///
    /// A non-positive duration yields a glide that is already done at its
    /// first sample.
    pub fn new(start: f64, end: f64, started_at_ms: f64, duration_ms: f64, ease: Ease) -> Self {
        Self {
            start,
            end,
            started_at_ms,
            duration_ms,
            ease,
        }
    }

    /// Sample the glide at `now_ms`.
    ///
    /// Times before the start clamp to the start value, times past the end
    /// clamp to the end value with `done` set.
    pub fn sample(&self, now_ms: f64) -> GlideSample {
        let t = if self.duration_ms > 0.0 {
            ((now_ms - self.started_at_ms) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let eased = self.ease.apply(t);
        GlideSample {
            value: self.start + ((self.end - self.start) * eased),
            done: t >= 1.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
