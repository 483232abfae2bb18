use tracing::debug;

use crate::dom::Document;
use crate::error::MotionResult;
use crate::extensions::MotionEvent;
use crate::frame::FrameScheduler;
use crate::observe::IntersectionEntry;

use super::{LandingEngine, RevealBatch};

impl<D: Document, F: FrameScheduler> LandingEngine<D, F> {
    /// Applies one intersection batch delivered by the host observer.
    ///
    /// However many stats-region elements enter in the batch, the counters
    /// get a single start request.
    pub fn on_intersections(&mut self, entries: &[IntersectionEntry]) -> MotionResult<RevealBatch> {
        let batch = self.core.reveal.handle_batch(&mut self.document, entries);
        for &node in &batch.revealed {
            let in_stats_region = self
                .core
                .reveal
                .element(node)
                .is_some_and(|element| element.in_stats_region);
            self.emit_motion_event(MotionEvent::ElementRevealed {
                node,
                in_stats_region,
            });
        }
        if batch.stats_entered {
            debug!(revealed = batch.revealed.len(), "stats region entered");
            self.start_counters()?;
        }
        Ok(batch)
    }
}
