use tracing::{trace, warn};

use crate::dom::Document;
use crate::effects::ScrollPosition;
use crate::error::MotionResult;
use crate::extensions::MotionEvent;
use crate::frame::FrameScheduler;

use super::LandingEngine;

impl<D: Document, F: FrameScheduler> LandingEngine<D, F> {
    /// Scroll handler: updates the progress bar width and the navbar colors.
    ///
    /// Returns the progress percentage written to the bar.
    pub fn on_scroll(&mut self, position: ScrollPosition) -> MotionResult<f64> {
        let percent = position.progress_percent();
        self.core.scroll_percent = percent;

        let scroll = &self.core.config.scroll;
        match self.document.query_first(&scroll.progress_selector)? {
            Some(bar) => {
                if let Err(err) = self.document.set_style(bar, "width", &format!("{percent}%")) {
                    warn!(node = %bar, error = %err, "failed to update scroll progress");
                }
            }
            None => trace!("no scroll progress bar on page"),
        }

        if let Some(navbar) = self.document.query_first(&scroll.navbar.selector)? {
            let palette = scroll.navbar.palette_for(position.scroll_top);
            for (property, value) in [
                ("background", &palette.background),
                ("border-bottom-color", &palette.border_bottom_color),
            ] {
                if let Err(err) = self.document.set_style(navbar, property, value) {
                    warn!(node = %navbar, property, error = %err, "failed to update navbar");
                }
            }
        }

        self.emit_motion_event(MotionEvent::ScrollProgressed { percent });
        Ok(percent)
    }
}
