use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Function;
use tracing::warn;
use web_sys::Window;

use crate::frame::FrameScheduler;

/// `requestAnimationFrame`-backed scheduler.
///
/// The callback is installed after the engine exists, since the callback
/// itself drives the engine. Requests made while a frame is pending coalesce.
pub struct WebFrameScheduler {
    window: Window,
    callback: Rc<RefCell<Option<Function>>>,
    pending: Rc<Cell<bool>>,
}

impl WebFrameScheduler {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
            pending: Rc::new(Cell::new(false)),
        }
    }

    pub(super) fn callback_slot(&self) -> Rc<RefCell<Option<Function>>> {
        Rc::clone(&self.callback)
    }

    pub(super) fn pending_flag(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.pending)
    }
}

impl FrameScheduler for WebFrameScheduler {
    fn request_frame(&mut self) {
        if self.pending.get() {
            return;
        }
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            warn!("frame requested before the frame callback was installed");
            return;
        };
        match self.window.request_animation_frame(callback) {
            Ok(_) => self.pending.set(true),
            Err(err) => warn!(error = ?err, "requestAnimationFrame failed"),
        }
    }
}
