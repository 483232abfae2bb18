use tracing::{debug, trace, warn};

use crate::dom::{Document, NodeId};
use crate::error::MotionResult;
use crate::frame::FrameScheduler;
use crate::observe::ObserverOptions;

use super::{LandingConfig, LandingEngine, engine_core::EngineCore};

/// What `mount` found on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MountReport {
    /// Reveal elements newly handed to the intersection observer.
    pub observed: usize,
    /// Whether the promo box was hidden because another plan is active.
    pub promo_hidden: bool,
}

impl<D: Document, F: FrameScheduler> LandingEngine<D, F> {
    /// Creates an engine over injected document and frame capabilities.
    ///
    /// The configuration is validated up front; nothing touches the document
    /// until `mount`.
    pub fn new(document: D, scheduler: F, config: LandingConfig) -> MotionResult<Self> {
        config.validate()?;
        Ok(Self {
            document,
            scheduler,
            core: EngineCore::new(config),
        })
    }

    /// Collects reveal elements and applies the initial promo box state.
    ///
    /// Calling it again only picks up reveal elements added since the last
    /// call.
    pub fn mount(&mut self) -> MotionResult<MountReport> {
        let observed = self.core.reveal.observe_document(&self.document)?;
        let promo_hidden = if self.core.mounted {
            false
        } else {
            self.apply_initial_promo_state()?
        };
        self.core.mounted = true;
        debug!(observed, promo_hidden, "landing engine mounted");
        Ok(MountReport {
            observed,
            promo_hidden,
        })
    }

    /// Elements the host should hand to its intersection observer.
    #[must_use]
    pub fn observed_elements(&self) -> Vec<NodeId> {
        self.core.reveal.observed().collect()
    }

    #[must_use]
    pub fn observer_options(&self) -> ObserverOptions {
        self.core.config.reveal.observer
    }

    fn apply_initial_promo_state(&mut self) -> MotionResult<bool> {
        let Some(promo) = &self.core.config.tabs.promo else {
            return Ok(false);
        };
        let Some(promo_box) = self.document.element_by_id(&promo.element_id) else {
            trace!(id = %promo.element_id, "no promo box on page");
            return Ok(false);
        };
        let Some(active) = self.document.query_first(&promo.active_plan_selector)? else {
            return Ok(false);
        };
        let active_plan = self.document.attribute(active, &promo.tab_attribute);
        if active_plan.as_deref() == Some(promo.visible_for.as_str()) {
            return Ok(false);
        }
        if let Err(err) = self.document.set_style(promo_box, "display", "none") {
            warn!(node = %promo_box, error = %err, "failed to hide promo box");
            return Ok(false);
        }
        Ok(true)
    }
}
