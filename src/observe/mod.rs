//! Viewport intersection types and a geometry-based tracker for headless hosts.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Rect, RootMargin, Viewport};
use crate::dom::{Document, NodeId};
use crate::error::{MotionError, MotionResult};

/// `IntersectionObserver` configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverOptions {
    /// Fraction of the target area that must be inside the root.
    pub threshold: f64,
    pub root_margin: RootMargin,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: RootMargin {
                bottom: crate::core::MarginLength::Px(-60.0),
                ..RootMargin::default()
            },
        }
    }
}

impl ObserverOptions {
    pub fn validate(self) -> MotionResult<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(MotionError::InvalidConfig(
                "observer threshold must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }

    /// Share of `target` inside the margin-adjusted viewport, or `None` when
    /// they do not touch at all.
    #[must_use]
    pub fn intersection_ratio(self, target: Rect, viewport: Viewport) -> Option<f64> {
        let root = self.root_margin.apply(viewport.bounds());
        let overlap = target.intersection(root)?;
        let area = target.area();
        if area <= 0.0 {
            return Some(1.0);
        }
        Some((overlap.area() / area).clamp(0.0, 1.0))
    }

    /// Whether `target` counts as entered for these options.
    #[must_use]
    pub fn is_intersecting(self, target: Rect, viewport: Viewport) -> bool {
        self.intersection_ratio(target, viewport)
            .is_some_and(|ratio| ratio >= self.threshold)
    }
}

/// One element's visibility change, as delivered in an observation batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    pub node: NodeId,
    pub is_intersecting: bool,
    pub intersection_ratio: f64,
}

impl IntersectionEntry {
    #[must_use]
    pub fn entering(node: NodeId) -> Self {
        Self {
            node,
            is_intersecting: true,
            intersection_ratio: 1.0,
        }
    }

    #[must_use]
    pub fn leaving(node: NodeId) -> Self {
        Self {
            node,
            is_intersecting: false,
            intersection_ratio: 0.0,
        }
    }
}

/// Computes intersection batches from element bounding rects.
///
/// Like a browser observer, the first scan after `observe` reports every
/// target once; later scans report only targets whose state flipped.
/// Targets without a known rect are reported as not intersecting.
#[derive(Debug, Clone, Default)]
pub struct IntersectionTracker {
    options: ObserverOptions,
    last_state: IndexMap<NodeId, Option<bool>>,
}

impl IntersectionTracker {
    #[must_use]
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            last_state: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn options(&self) -> ObserverOptions {
        self.options
    }

    pub fn observe(&mut self, node: NodeId) {
        self.last_state.entry(node).or_insert(None);
    }

    pub fn observe_all(&mut self, nodes: impl IntoIterator<Item = NodeId>) {
        for node in nodes {
            self.observe(node);
        }
    }

    #[must_use]
    pub fn observed_len(&self) -> usize {
        self.last_state.len()
    }

    pub fn scan<D: Document + ?Sized>(
        &mut self,
        document: &D,
        viewport: Viewport,
    ) -> Vec<IntersectionEntry> {
        let mut batch = Vec::new();
        for (node, last) in &mut self.last_state {
            let ratio = document
                .bounding_rect(*node)
                .and_then(|rect| self.options.intersection_ratio(rect, viewport));
            let is_intersecting = ratio.is_some_and(|ratio| ratio >= self.options.threshold);
            if *last == Some(is_intersecting) {
                continue;
            }
            *last = Some(is_intersecting);
            batch.push(IntersectionEntry {
                node: *node,
                is_intersecting,
                intersection_ratio: ratio.unwrap_or(0.0),
            });
        }
        trace!(entries = batch.len(), "intersection scan");
        batch
    }
}
