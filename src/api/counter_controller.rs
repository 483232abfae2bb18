use tracing::debug;

use crate::dom::Document;
use crate::error::MotionResult;
use crate::extensions::MotionEvent;
use crate::frame::FrameScheduler;

use super::{CounterTick, LandingEngine};

impl<D: Document, F: FrameScheduler> LandingEngine<D, F> {
    /// Starts every counter on the page. Only the first call has an effect.
    ///
    /// Returns `true` for the call that started the run.
    pub fn start_counters(&mut self) -> MotionResult<bool> {
        if !self.core.counters.start(&self.document)? {
            return Ok(false);
        }
        let counters_len = self.core.counters.animations().len();
        if self.core.counters.is_running() {
            self.scheduler.request_frame();
        }
        self.emit_motion_event(MotionEvent::CountersStarted { counters_len });
        Ok(true)
    }

    /// Host frame callback: advances each running counter by one step.
    ///
    /// Another frame is requested while any counter still has steps left, so
    /// each counter renders at most `total_steps` frames.
    pub fn on_animation_frame(&mut self) -> CounterTick {
        let tick = self.core.counters.step(&mut self.document);
        for &node in &tick.completed {
            self.emit_motion_event(MotionEvent::CounterFinished { node });
        }
        if tick.running > 0 {
            self.scheduler.request_frame();
        } else if !tick.completed.is_empty() {
            debug!("all counters finished");
        }
        tick
    }
}
