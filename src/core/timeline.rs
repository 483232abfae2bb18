use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::core::Easing;
use crate::error::{MotionError, MotionResult};

/// Upper bound on frames in one run; about 4.6 hours at 60 steps per second.
pub const MAX_TOTAL_STEPS: u32 = 1_000_000;

/// Timing parameters shared by every counter run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub duration_ms: f64,
    pub steps_per_second: f64,
    pub easing: Easing,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2_000.0,
            steps_per_second: 60.0,
            easing: Easing::EaseOutQuart,
        }
    }
}

impl TimelineConfig {
    #[must_use]
    pub fn step_interval_ms(self) -> f64 {
        1_000.0 / self.steps_per_second
    }

    /// Number of frames in one run: `round(duration / (1000 / steps_per_second))`.
    ///
    /// Never returns less than one so a run always renders its final value.
    #[must_use]
    pub fn total_steps(self) -> u32 {
        let steps = (self.duration_ms / self.step_interval_ms()).round();
        if !steps.is_finite() || steps < 1.0 {
            1
        } else if steps > f64::from(u32::MAX) {
            u32::MAX
        } else {
            steps as u32
        }
    }

    pub fn validate(self) -> MotionResult<()> {
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(MotionError::InvalidConfig(
                "timeline duration must be finite and > 0".to_owned(),
            ));
        }
        if !self.steps_per_second.is_finite() || self.steps_per_second <= 0.0 {
            return Err(MotionError::InvalidConfig(
                "timeline steps per second must be finite and > 0".to_owned(),
            ));
        }
        if self.duration_ms / self.step_interval_ms() > f64::from(MAX_TOTAL_STEPS) {
            return Err(MotionError::InvalidConfig(format!(
                "timeline must not exceed {MAX_TOTAL_STEPS} steps"
            )));
        }
        Ok(())
    }
}

/// One eased sample of a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineStep {
    pub step: u32,
    pub total_steps: u32,
    pub progress: f64,
    pub eased: f64,
}

impl TimelineStep {
    #[must_use]
    pub fn is_last(self) -> bool {
        self.step >= self.total_steps
    }
}

/// Finite sequence of eased progress values, one per frame.
///
/// Steps run `1..=total_steps`; the scheduler that consumes them lives
/// elsewhere, so the math can be driven directly in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterTimeline {
    easing: Easing,
    total_steps: u32,
    completed: u32,
}

impl CounterTimeline {
    #[must_use]
    pub fn new(config: TimelineConfig) -> Self {
        Self {
            easing: config.easing,
            total_steps: config.total_steps(),
            completed: 0,
        }
    }

    #[must_use]
    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    #[must_use]
    pub fn completed_steps(&self) -> u32 {
        self.completed
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.completed >= self.total_steps
    }
}

impl Iterator for CounterTimeline {
    type Item = TimelineStep;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }
        self.completed += 1;
        let step = self.completed;
        let progress = f64::from(step) / f64::from(self.total_steps);
        Some(TimelineStep {
            step,
            total_steps: self.total_steps,
            progress,
            eased: self.easing.apply(progress),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total_steps - self.completed) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CounterTimeline {}

impl FusedIterator for CounterTimeline {}
