mod support;

use landing_motion::core::{Rect, RootMargin, Viewport};
use landing_motion::dom::{MemoryDocument, NodeId};
use landing_motion::observe::{IntersectionTracker, ObserverOptions};
use support::{engine, run_frames};

const VIEWPORT: Viewport = Viewport {
    width: 1_000,
    height: 800,
};

fn placed(doc: &mut MemoryDocument, parent: NodeId, class: &str, y: f64) -> NodeId {
    let node = doc.append(parent, "div", &[("class", class)]).expect("node");
    doc.set_bounding_rect(node, Rect::new(0.0, y, 400.0, 100.0))
        .expect("rect");
    node
}

#[test]
fn bottom_margin_and_threshold_decide_entry() {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    let visible = placed(&mut doc, body, "reveal-up", 700.0);
    let sliver = placed(&mut doc, body, "reveal-up", 735.0);
    let below = placed(&mut doc, body, "reveal-up", 2_000.0);

    let mut tracker = IntersectionTracker::new(ObserverOptions::default());
    tracker.observe_all([visible, sliver, below]);
    let batch = tracker.scan(&doc, VIEWPORT);

    assert_eq!(batch.len(), 3);
    let state = |node| {
        batch
            .iter()
            .find(|entry| entry.node == node)
            .map(|entry| entry.is_intersecting)
    };
    assert_eq!(state(visible), Some(true));
    assert_eq!(state(sliver), Some(false));
    assert_eq!(state(below), Some(false));
}

#[test]
fn later_scans_report_only_changes() {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    let node = placed(&mut doc, body, "reveal-up", 2_000.0);
    let steady = placed(&mut doc, body, "reveal-up", 10.0);

    let mut tracker = IntersectionTracker::new(ObserverOptions::default());
    tracker.observe(node);
    tracker.observe(steady);
    assert_eq!(tracker.scan(&doc, VIEWPORT).len(), 2);
    assert!(tracker.scan(&doc, VIEWPORT).is_empty());

    doc.set_bounding_rect(node, Rect::new(0.0, 300.0, 400.0, 100.0))
        .expect("scrolled");
    let batch = tracker.scan(&doc, VIEWPORT);
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].node, node);
    assert!(batch[0].is_intersecting);
}

#[test]
fn zero_margin_uses_full_viewport() {
    let options = ObserverOptions {
        root_margin: RootMargin::default(),
        ..ObserverOptions::default()
    };
    let rect = Rect::new(0.0, 735.0, 400.0, 100.0);

    assert!(options.is_intersecting(rect, VIEWPORT));
    assert!(!ObserverOptions::default().is_intersecting(rect, VIEWPORT));
}

#[test]
fn scrolling_stats_into_view_runs_counters_end_to_end() {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    let hero = placed(&mut doc, body, "fade-in-up", 0.0);
    let section = doc
        .append(body, "section", &[("id", "diagnostico")])
        .expect("section");
    let stat = placed(&mut doc, section, "reveal-up", 1_600.0);
    let counter = doc
        .append(stat, "span", &[("class", "counter"), ("data-target", "12500")])
        .expect("counter");

    let mut engine = engine(doc);
    let mut tracker = IntersectionTracker::new(engine.observer_options());
    tracker.observe_all(engine.observed_elements());

    let first = tracker.scan(engine.document(), VIEWPORT);
    let batch = engine.on_intersections(&first).expect("initial batch");
    assert_eq!(batch.revealed, vec![hero]);
    assert!(!engine.counters().is_started());

    engine
        .document_mut()
        .set_bounding_rect(stat, Rect::new(0.0, 400.0, 400.0, 100.0))
        .expect("scroll");
    let second = tracker.scan(engine.document(), VIEWPORT);
    let batch = engine.on_intersections(&second).expect("scroll batch");
    assert_eq!(batch.revealed, vec![stat]);
    assert!(batch.stats_entered);

    run_frames(&mut engine);
    assert_eq!(engine.document().text(counter), Some("12.500"));
}
