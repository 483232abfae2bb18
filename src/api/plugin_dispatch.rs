use crate::dom::Document;
use crate::extensions::{MotionContext, MotionEvent};
use crate::frame::FrameScheduler;

use super::LandingEngine;

impl<D: Document, F: FrameScheduler> LandingEngine<D, F> {
    #[must_use]
    pub fn motion_context(&self) -> MotionContext {
        MotionContext {
            observed_len: self.core.reveal.observed_len(),
            revealed_len: self.core.reveal.revealed_len(),
            counters_started: self.core.counters.is_started(),
            counters_running: self.core.counters.running_len(),
            scroll_percent: self.core.scroll_percent,
        }
    }

    pub(super) fn emit_motion_event(&mut self, event: MotionEvent) {
        if self.core.plugins.is_empty() {
            return;
        }
        let context = self.motion_context();
        for plugin in &mut self.core.plugins {
            plugin.on_event(event, context);
        }
    }
}
