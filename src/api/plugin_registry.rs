use crate::dom::Document;
use crate::error::{MotionError, MotionResult};
use crate::extensions::MotionPlugin;
use crate::frame::FrameScheduler;

use super::LandingEngine;

impl<D: Document, F: FrameScheduler> LandingEngine<D, F> {
    /// Adds a plugin to the event stream.
    ///
    /// Ids name plugins for later removal, so an empty id or one already in
    /// use is rejected. Plugins see events in registration order.
    pub fn register_plugin(&mut self, plugin: Box<dyn MotionPlugin>) -> MotionResult<()> {
        let id = plugin.id();
        if id.is_empty() {
            return Err(MotionError::InvalidConfig(
                "motion plugins need a non-empty id".to_owned(),
            ));
        }
        if self.plugin_position(id).is_some() {
            return Err(MotionError::InvalidConfig(format!(
                "a motion plugin named `{id}` is already attached"
            )));
        }
        self.core.plugins.push(plugin);
        Ok(())
    }

    /// Detaches the plugin named `plugin_id`; `false` if none was attached.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        self.plugin_position(plugin_id)
            .map(|index| self.core.plugins.remove(index))
            .is_some()
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.core.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugin_position(plugin_id).is_some()
    }

    fn plugin_position(&self, plugin_id: &str) -> Option<usize> {
        self.core
            .plugins
            .iter()
            .position(|plugin| plugin.id() == plugin_id)
    }
}
