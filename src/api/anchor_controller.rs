use tracing::{trace, warn};

use crate::dom::{Document, NodeId, ScrollIntoView};
use crate::error::MotionResult;
use crate::frame::FrameScheduler;

use super::LandingEngine;

/// Result of an in-page anchor click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnchorOutcome {
    /// The host must cancel the browser's own jump.
    pub prevent_default: bool,
    pub scrolled_to: Option<NodeId>,
}

impl<D: Document, F: FrameScheduler> LandingEngine<D, F> {
    /// In-page anchors that get smooth scrolling.
    pub fn anchors(&self) -> MotionResult<Vec<NodeId>> {
        self.document.query_all(&self.core.config.anchor_selector)
    }

    /// Click handler for an in-page anchor.
    ///
    /// The default jump is always cancelled. The element named by `href` is
    /// scrolled smoothly to the top of the viewport when it exists; an href
    /// that is not a usable selector (a bare `#`, say) scrolls nowhere.
    pub fn on_anchor_click(&mut self, anchor: NodeId) -> MotionResult<AnchorOutcome> {
        let mut outcome = AnchorOutcome {
            prevent_default: true,
            scrolled_to: None,
        };
        let Some(href) = self.document.attribute(anchor, "href") else {
            return Ok(outcome);
        };
        let target = match self.document.query_first(&href) {
            Ok(target) => target,
            Err(err) => {
                trace!(%anchor, %href, error = %err, "anchor href is not a selector");
                None
            }
        };
        let Some(target) = target else {
            return Ok(outcome);
        };
        match self.document.scroll_into_view(target, ScrollIntoView::default()) {
            Ok(()) => outcome.scrolled_to = Some(target),
            Err(err) => warn!(%anchor, %target, error = %err, "smooth scroll failed"),
        }
        Ok(outcome)
    }
}
