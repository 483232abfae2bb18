use crate::extensions::MotionPlugin;

use super::{CounterEngine, LandingConfig, RevealWatcher};

/// Internal engine state behind the public facade (`LandingEngine`).
pub(super) struct EngineCore {
    pub(super) config: LandingConfig,
    pub(super) reveal: RevealWatcher,
    pub(super) counters: CounterEngine,
    pub(super) plugins: Vec<Box<dyn MotionPlugin>>,
    pub(super) mounted: bool,
    pub(super) scroll_percent: f64,
    pub(super) particles_spawned: usize,
}

impl EngineCore {
    pub(super) fn new(config: LandingConfig) -> Self {
        let reveal = RevealWatcher::new(config.reveal.clone());
        let counters = CounterEngine::new(config.counters.clone());
        Self {
            config,
            reveal,
            counters,
            plugins: Vec::new(),
            mounted: false,
            scroll_percent: 0.0,
            particles_spawned: 0,
        }
    }
}
