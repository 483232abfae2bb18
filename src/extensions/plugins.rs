use serde::{Deserialize, Serialize};

use crate::dom::NodeId;

/// Read-only engine snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionContext {
    pub observed_len: usize,
    pub revealed_len: usize,
    pub counters_started: bool,
    pub counters_running: usize,
    pub scroll_percent: f64,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MotionEvent {
    ElementRevealed { node: NodeId, in_stats_region: bool },
    CountersStarted { counters_len: usize },
    CounterFinished { node: NodeId },
    TabActivated { button: NodeId, panel: Option<NodeId> },
    ScrollProgressed { percent: f64 },
    ParticlesSpawned { count: usize },
}

/// Extension hook interface.
///
/// Plugins observe events and read engine context without mutating the
/// document directly.
pub trait MotionPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: MotionEvent, context: MotionContext);
}
