use crate::dom::Document;
use crate::frame::FrameScheduler;

use super::{CounterEngine, LandingConfig, RevealWatcher, engine_core::EngineCore};

/// Main orchestration facade consumed by host pages.
///
/// `LandingEngine` owns the document handle and the frame scheduler and routes
/// host callbacks (intersection batches, animation frames, scroll and click
/// events) to the reveal watcher, the counter engine and the page effects.
/// Every callback runs to completion on the host's event thread.
pub struct LandingEngine<D: Document, F: FrameScheduler> {
    pub(super) document: D,
    pub(super) scheduler: F,
    pub(super) core: EngineCore,
}

impl<D: Document, F: FrameScheduler> LandingEngine<D, F> {
    #[must_use]
    pub fn config(&self) -> &LandingConfig {
        &self.core.config
    }

    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    #[must_use]
    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    #[must_use]
    pub fn counters(&self) -> &CounterEngine {
        &self.core.counters
    }

    #[must_use]
    pub fn reveal(&self) -> &RevealWatcher {
        &self.core.reveal
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.core.mounted
    }

    /// Last progress value written by `on_scroll`.
    #[must_use]
    pub fn scroll_percent(&self) -> f64 {
        self.core.scroll_percent
    }

    #[must_use]
    pub fn into_parts(self) -> (D, F) {
        (self.document, self.scheduler)
    }
}
