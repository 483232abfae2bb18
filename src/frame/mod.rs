//! Frame scheduling capability.
//!
//! The engine never runs its own loop. It asks the host for a frame, and the
//! host calls `LandingEngine::on_animation_frame` once that frame fires.

/// Host service that invokes the engine once before the next repaint.
pub trait FrameScheduler {
    /// Requests one frame. Repeated requests before the frame fires coalesce.
    fn request_frame(&mut self);
}

/// Scheduler driven by hand: tests and headless hosts pump frames explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualFrameScheduler {
    pending: bool,
    requests: usize,
}

impl ManualFrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Total `request_frame` calls, coalesced or not.
    #[must_use]
    pub fn requests(&self) -> usize {
        self.requests
    }

    /// Consumes the pending request. Returns `true` when a frame should run.
    pub fn take_pending(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn request_frame(&mut self) {
        self.pending = true;
        self.requests += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameScheduler, ManualFrameScheduler};

    #[test]
    fn requests_coalesce_until_taken() {
        let mut scheduler = ManualFrameScheduler::new();
        scheduler.request_frame();
        scheduler.request_frame();
        assert_eq!(scheduler.requests(), 2);
        assert!(scheduler.take_pending());
        assert!(!scheduler.take_pending());
    }
}
