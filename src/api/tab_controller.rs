use tracing::{trace, warn};

use crate::dom::{Document, NodeId};
use crate::error::MotionResult;
use crate::extensions::MotionEvent;
use crate::frame::FrameScheduler;

use super::{LandingEngine, TabGroupConfig, TabScope};

impl<D: Document, F: FrameScheduler> LandingEngine<D, F> {
    /// Every tab button of every configured group, group by group.
    pub fn tab_buttons(&self) -> MotionResult<Vec<NodeId>> {
        let mut buttons = Vec::new();
        for group in &self.core.config.tabs.groups {
            for button in self.document.query_all(&group.button_selector)? {
                if !buttons.contains(&button) {
                    buttons.push(button);
                }
            }
        }
        Ok(buttons)
    }

    /// Click handler for a tab button.
    ///
    /// Deactivates the buttons and panels of the button's group, then
    /// activates the button and the panel named by its tab attribute. Returns
    /// `false` when the node belongs to no configured group.
    pub fn activate_tab(&mut self, button: NodeId) -> MotionResult<bool> {
        let Some((group, scope)) = self.resolve_tab_group(button)? else {
            trace!(%button, "click outside any tab group");
            return Ok(false);
        };

        let (buttons, panels) = match scope {
            Some(container) => (
                self.document
                    .query_all_within(container, &group.button_selector)?,
                self.document
                    .query_all_within(container, &group.panel_selector)?,
            ),
            None => (
                self.document.query_all(&group.button_selector)?,
                self.document.query_all(&group.panel_selector)?,
            ),
        };
        for node in buttons.into_iter().chain(panels) {
            self.document.remove_class(node, &group.active_class)?;
        }
        self.document.add_class(button, &group.active_class)?;

        let tab_id = self.document.attribute(button, &group.tab_attribute);
        let panel = match tab_id.as_deref() {
            Some(tab_id) => self.find_panel(scope, tab_id),
            None => None,
        };
        match panel {
            Some(panel) => self.document.add_class(panel, &group.active_class)?,
            None => warn!(%button, tab = ?tab_id, "tab panel not found"),
        }
        if let Some(tab_id) = tab_id.as_deref() {
            self.apply_promo_display(tab_id);
        }

        trace!(%button, panel = ?panel, "tab activated");
        self.emit_motion_event(MotionEvent::TabActivated { button, panel });
        Ok(true)
    }

    /// First group whose button selector matches `button`, with the group's
    /// container when it is container scoped.
    fn resolve_tab_group(
        &self,
        button: NodeId,
    ) -> MotionResult<Option<(TabGroupConfig, Option<NodeId>)>> {
        for group in &self.core.config.tabs.groups {
            if self.document.closest(button, &group.button_selector)? != Some(button) {
                continue;
            }
            match &group.scope {
                TabScope::Document => return Ok(Some((group.clone(), None))),
                TabScope::Container { selector } => {
                    if let Some(container) = self.document.closest(button, selector)? {
                        return Ok(Some((group.clone(), Some(container))));
                    }
                }
            }
        }
        Ok(None)
    }

    fn find_panel(&self, scope: Option<NodeId>, tab_id: &str) -> Option<NodeId> {
        let Some(container) = scope else {
            return self.document.element_by_id(tab_id);
        };
        let selector = format!("[id=\"{tab_id}\"]");
        match self.document.query_first_within(container, &selector) {
            Ok(panel) => panel,
            Err(err) => {
                warn!(tab = tab_id, error = %err, "unusable tab id");
                None
            }
        }
    }

    fn apply_promo_display(&mut self, tab_id: &str) {
        let Some(promo) = &self.core.config.tabs.promo else {
            return;
        };
        let Some(display) = promo.display_for(tab_id) else {
            return;
        };
        let Some(promo_box) = self.document.element_by_id(&promo.element_id) else {
            return;
        };
        if let Err(err) = self.document.set_style(promo_box, "display", display) {
            warn!(node = %promo_box, error = %err, "failed to update promo box");
        }
    }
}
