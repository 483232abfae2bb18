use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::dom::{Document, NodeId, Selector};
use crate::error::{MotionError, MotionResult};
use crate::observe::{IntersectionEntry, ObserverOptions};

/// Reveal-on-scroll configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    #[serde(default = "default_reveal_selector")]
    pub selector: String,
    #[serde(default = "default_visible_class")]
    pub visible_class: String,
    #[serde(default)]
    pub observer: ObserverOptions,
    #[serde(default)]
    pub stats_region: StatsRegionConfig,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: default_reveal_selector(),
            visible_class: default_visible_class(),
            observer: ObserverOptions::default(),
            stats_region: StatsRegionConfig::default(),
        }
    }
}

impl RevealConfig {
    pub fn validate(&self) -> MotionResult<()> {
        Selector::parse(&self.selector)?;
        if self.visible_class.trim().is_empty() {
            return Err(MotionError::InvalidConfig(
                "reveal visible class must not be empty".to_owned(),
            ));
        }
        self.observer.validate()?;
        self.stats_region.validate()
    }
}

fn default_reveal_selector() -> String {
    ".reveal-up, .reveal-left, .reveal-right, .fade-in-up".to_owned()
}

fn default_visible_class() -> String {
    "visible".to_owned()
}

/// Which watched elements start the counters when they appear.
///
/// An element belongs to the region when it sits inside an element matching
/// `ancestor_selector` or carries `marker_class` itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsRegionConfig {
    pub ancestor_selector: Option<String>,
    pub marker_class: Option<String>,
}

impl Default for StatsRegionConfig {
    fn default() -> Self {
        Self {
            ancestor_selector: Some("#diagnostico".to_owned()),
            marker_class: Some("stats-hero".to_owned()),
        }
    }
}

impl StatsRegionConfig {
    pub fn validate(&self) -> MotionResult<()> {
        if let Some(selector) = &self.ancestor_selector {
            Selector::parse(selector)?;
        }
        Ok(())
    }

    fn contains<D: Document + ?Sized>(&self, document: &D, node: NodeId) -> MotionResult<bool> {
        if let Some(class) = &self.marker_class {
            if document.has_class(node, class) {
                return Ok(true);
            }
        }
        match &self.ancestor_selector {
            Some(selector) => Ok(document.closest(node, selector)?.is_some()),
            None => Ok(false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Visibility {
    #[default]
    NotYetVisible,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchedElement {
    pub node: NodeId,
    pub visibility: Visibility,
    pub in_stats_region: bool,
}

/// Outcome of one observation batch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RevealBatch {
    /// Elements that became visible in this batch, in entry order.
    pub revealed: Vec<NodeId>,
    /// Whether at least one newly visible element is in the stats region.
    pub stats_entered: bool,
}

/// One-shot visibility tracking for reveal elements.
///
/// Visibility only moves from not-yet-visible to visible. Entries for
/// elements that are already visible, leaving, or unknown change nothing.
#[derive(Debug, Clone)]
pub struct RevealWatcher {
    config: RevealConfig,
    elements: IndexMap<NodeId, WatchedElement>,
}

impl RevealWatcher {
    #[must_use]
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            elements: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Registers every element matching the reveal selector.
    ///
    /// Stats-region membership is resolved here, once per element. Returns
    /// the number of newly watched elements.
    pub fn observe_document<D: Document + ?Sized>(&mut self, document: &D) -> MotionResult<usize> {
        let mut added = 0;
        for node in document.query_all(&self.config.selector)? {
            if self.elements.contains_key(&node) {
                continue;
            }
            let in_stats_region = match self.config.stats_region.contains(document, node) {
                Ok(contained) => contained,
                Err(err) => {
                    warn!(%node, error = %err, "stats region lookup failed");
                    false
                }
            };
            self.elements.insert(
                node,
                WatchedElement {
                    node,
                    visibility: Visibility::NotYetVisible,
                    in_stats_region,
                },
            );
            added += 1;
        }
        debug!(added, watched = self.elements.len(), "reveal elements observed");
        Ok(added)
    }

    pub fn observed(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.elements.keys().copied()
    }

    #[must_use]
    pub fn observed_len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn revealed_len(&self) -> usize {
        self.elements
            .values()
            .filter(|element| element.visibility == Visibility::Visible)
            .count()
    }

    #[must_use]
    pub fn element(&self, node: NodeId) -> Option<&WatchedElement> {
        self.elements.get(&node)
    }

    /// Applies one batch of entries.
    ///
    /// Each intersecting, not-yet-visible element gets the visible class and is
    /// marked visible exactly once. Entry order across elements carries no
    /// meaning.
    pub fn handle_batch<D: Document + ?Sized>(
        &mut self,
        document: &mut D,
        entries: &[IntersectionEntry],
    ) -> RevealBatch {
        let mut batch = RevealBatch::default();
        for entry in entries.iter().filter(|entry| entry.is_intersecting) {
            let Some(element) = self.elements.get_mut(&entry.node) else {
                trace!(node = %entry.node, "entry for unobserved element");
                continue;
            };
            if element.visibility == Visibility::Visible {
                continue;
            }
            element.visibility = Visibility::Visible;
            if let Err(err) = document.add_class(element.node, &self.config.visible_class) {
                warn!(node = %element.node, error = %err, "failed to apply visible class");
            }
            batch.stats_entered |= element.in_stats_region;
            batch.revealed.push(element.node);
            trace!(
                node = %element.node,
                in_stats_region = element.in_stats_region,
                "element revealed"
            );
        }
        batch
    }
}
