use serde::{Deserialize, Serialize};

use crate::dom::Selector;
use crate::error::{MotionError, MotionResult};

/// Where a tab group looks up its buttons and panels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabScope {
    /// Buttons and panels live inside the nearest container matching `selector`;
    /// the panel id is resolved inside that container only.
    Container { selector: String },
    /// Buttons and panels are document-wide; the panel id is global.
    Document,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabGroupConfig {
    pub scope: TabScope,
    pub button_selector: String,
    pub panel_selector: String,
    /// Button attribute holding the panel id.
    pub tab_attribute: String,
    pub active_class: String,
}

impl TabGroupConfig {
    /// Plans/services tabs: one independent group per `.tabs-container`.
    #[must_use]
    pub fn scoped_default() -> Self {
        Self {
            scope: TabScope::Container {
                selector: ".tabs-container".to_owned(),
            },
            button_selector: ".tab-btn".to_owned(),
            panel_selector: ".tab-content".to_owned(),
            tab_attribute: "data-tab".to_owned(),
            active_class: "active".to_owned(),
        }
    }

    /// Guarantee tabs: a single page-wide group.
    #[must_use]
    pub fn guarantee_default() -> Self {
        Self {
            scope: TabScope::Document,
            button_selector: ".guar-tab-btn".to_owned(),
            panel_selector: ".guar-tab-content".to_owned(),
            tab_attribute: "data-guar-tab".to_owned(),
            active_class: "active".to_owned(),
        }
    }

    pub fn validate(&self) -> MotionResult<()> {
        if let TabScope::Container { selector } = &self.scope {
            Selector::parse(selector)?;
        }
        Selector::parse(&self.button_selector)?;
        Selector::parse(&self.panel_selector)?;
        if self.tab_attribute.trim().is_empty() || self.active_class.trim().is_empty() {
            return Err(MotionError::InvalidConfig(
                "tab attribute and active class must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Box shown only while a specific plan tab is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromoBoxConfig {
    pub element_id: String,
    /// Tabs that toggle the box; other tabs leave it alone.
    pub plan_tabs: Vec<String>,
    pub visible_for: String,
    /// Finds the initially active plan button at mount time.
    pub active_plan_selector: String,
    pub tab_attribute: String,
}

impl Default for PromoBoxConfig {
    fn default() -> Self {
        Self {
            element_id: "promo-reason-box".to_owned(),
            plan_tabs: vec!["plan1".to_owned(), "plan2".to_owned()],
            visible_for: "plan2".to_owned(),
            active_plan_selector: ".tabs-container .tab-btn.active[data-tab]".to_owned(),
            tab_attribute: "data-tab".to_owned(),
        }
    }
}

impl PromoBoxConfig {
    pub fn validate(&self) -> MotionResult<()> {
        Selector::parse(&self.active_plan_selector)?;
        if self.element_id.is_empty() {
            return Err(MotionError::InvalidConfig(
                "promo box id must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn display_for(&self, tab_id: &str) -> Option<&'static str> {
        if !self.plan_tabs.iter().any(|plan| plan == tab_id) {
            return None;
        }
        Some(if tab_id == self.visible_for { "" } else { "none" })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabsConfig {
    pub groups: Vec<TabGroupConfig>,
    #[serde(default)]
    pub promo: Option<PromoBoxConfig>,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            groups: vec![
                TabGroupConfig::scoped_default(),
                TabGroupConfig::guarantee_default(),
            ],
            promo: Some(PromoBoxConfig::default()),
        }
    }
}

impl TabsConfig {
    pub fn validate(&self) -> MotionResult<()> {
        for group in &self.groups {
            group.validate()?;
        }
        if let Some(promo) = &self.promo {
            promo.validate()?;
        }
        Ok(())
    }
}
