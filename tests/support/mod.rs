#![allow(dead_code)]

use landing_motion::api::{LandingConfig, LandingEngine};
use landing_motion::dom::{MemoryDocument, NodeId};
use landing_motion::frame::ManualFrameScheduler;

pub type TestEngine = LandingEngine<MemoryDocument, ManualFrameScheduler>;

/// Stats section with one counter per `(class, target)` pair.
pub struct StatsPage {
    pub doc: MemoryDocument,
    pub section: NodeId,
    pub counters: Vec<NodeId>,
}

pub fn stats_page(counters: &[(&str, &str)]) -> StatsPage {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    let section = doc
        .append(body, "section", &[("id", "diagnostico")])
        .expect("stats section");
    let counters = counters
        .iter()
        .map(|&(class, target)| {
            doc.append(section, "span", &[("class", class), ("data-target", target)])
                .expect("counter")
        })
        .collect();
    StatsPage {
        doc,
        section,
        counters,
    }
}

pub fn engine(doc: MemoryDocument) -> TestEngine {
    let mut engine = LandingEngine::new(doc, ManualFrameScheduler::new(), LandingConfig::default())
        .expect("engine init");
    engine.mount().expect("mount");
    engine
}

/// Pumps frames until the engine stops asking for them. Returns frames run.
pub fn run_frames(engine: &mut TestEngine) -> usize {
    let mut frames = 0;
    while engine.scheduler_mut().take_pending() {
        engine.on_animation_frame();
        frames += 1;
        assert!(frames <= 10_000, "frame loop did not settle");
    }
    frames
}
