mod support;

use landing_motion::api::{LandingConfig, LandingEngine, PromoBoxConfig, TabsConfig};
use landing_motion::dom::{Document, MemoryDocument, NodeId};
use landing_motion::frame::ManualFrameScheduler;
use support::engine;

struct TabsPage {
    doc: MemoryDocument,
    plan_buttons: Vec<NodeId>,
    plan_panels: Vec<NodeId>,
    service_buttons: Vec<NodeId>,
    service_panels: Vec<NodeId>,
    guarantee_buttons: Vec<NodeId>,
    guarantee_panels: Vec<NodeId>,
    promo: NodeId,
}

fn tab_group(
    doc: &mut MemoryDocument,
    parent: NodeId,
    ids: &[&str],
    active: usize,
) -> (Vec<NodeId>, Vec<NodeId>) {
    let container = doc
        .append(parent, "div", &[("class", "tabs-container")])
        .expect("container");
    let mut buttons = Vec::new();
    let mut panels = Vec::new();
    for (index, &id) in ids.iter().enumerate() {
        let class = if index == active { "tab-btn active" } else { "tab-btn" };
        buttons.push(
            doc.append(container, "button", &[("class", class), ("data-tab", id)])
                .expect("button"),
        );
    }
    for (index, &id) in ids.iter().enumerate() {
        let class = if index == active {
            "tab-content active"
        } else {
            "tab-content"
        };
        panels.push(
            doc.append(container, "div", &[("class", class), ("id", id)])
                .expect("panel"),
        );
    }
    (buttons, panels)
}

fn tabs_page(active_plan: usize) -> TabsPage {
    let mut doc = MemoryDocument::new();
    let body = doc.body();
    let (plan_buttons, plan_panels) = tab_group(&mut doc, body, &["plan1", "plan2"], active_plan);
    let promo = doc
        .append(body, "div", &[("id", "promo-reason-box")])
        .expect("promo");
    let (service_buttons, service_panels) =
        tab_group(&mut doc, body, &["web", "ads", "seo"], 0);

    let mut guarantee_buttons = Vec::new();
    let mut guarantee_panels = Vec::new();
    for id in ["g-money", "g-time"] {
        guarantee_buttons.push(
            doc.append(body, "button", &[("class", "guar-tab-btn"), ("data-guar-tab", id)])
                .expect("guarantee button"),
        );
    }
    for id in ["g-money", "g-time"] {
        guarantee_panels.push(
            doc.append(body, "div", &[("class", "guar-tab-content"), ("id", id)])
                .expect("guarantee panel"),
        );
    }

    TabsPage {
        doc,
        plan_buttons,
        plan_panels,
        service_buttons,
        service_panels,
        guarantee_buttons,
        guarantee_panels,
        promo,
    }
}

fn active(doc: &MemoryDocument, nodes: &[NodeId]) -> Vec<bool> {
    nodes.iter().map(|node| doc.has_class(*node, "active")).collect()
}

#[test]
fn scoped_tab_activates_button_and_panel() {
    let page = tabs_page(1);
    let mut engine = engine(page.doc);

    assert!(engine.activate_tab(page.service_buttons[2]).expect("activate"));

    let doc = engine.document();
    assert_eq!(active(doc, &page.service_buttons), vec![false, false, true]);
    assert_eq!(active(doc, &page.service_panels), vec![false, false, true]);
}

#[test]
fn scoped_groups_do_not_affect_each_other() {
    let page = tabs_page(1);
    let mut engine = engine(page.doc);

    engine
        .activate_tab(page.service_buttons[1])
        .expect("activate");

    let doc = engine.document();
    assert_eq!(active(doc, &page.plan_buttons), vec![false, true]);
    assert_eq!(active(doc, &page.plan_panels), vec![false, true]);
}

#[test]
fn panel_lookup_stays_inside_the_container() {
    let mut page = tabs_page(1);
    let body = page.doc.body();
    let decoy = page
        .doc
        .append(body, "div", &[("class", "tab-content"), ("id", "ads")])
        .expect("decoy");
    let mut engine = engine(page.doc);

    engine
        .activate_tab(page.service_buttons[1])
        .expect("activate");

    assert!(engine.document().has_class(page.service_panels[1], "active"));
    assert!(!engine.document().has_class(decoy, "active"));
}

#[test]
fn guarantee_tabs_are_one_document_wide_group() {
    let page = tabs_page(1);
    let mut engine = engine(page.doc);

    engine
        .activate_tab(page.guarantee_buttons[1])
        .expect("activate");

    let doc = engine.document();
    assert_eq!(active(doc, &page.guarantee_buttons), vec![false, true]);
    assert_eq!(active(doc, &page.guarantee_panels), vec![false, true]);
    assert_eq!(active(doc, &page.service_buttons), vec![true, false, false]);
}

#[test]
fn promo_box_follows_plan_selection() {
    let page = tabs_page(1);
    let mut engine = engine(page.doc);
    assert_eq!(engine.document().style(page.promo, "display"), None);

    engine.activate_tab(page.plan_buttons[0]).expect("plan1");
    assert_eq!(engine.document().style(page.promo, "display"), Some("none"));

    engine.activate_tab(page.plan_buttons[1]).expect("plan2");
    assert_eq!(engine.document().style(page.promo, "display"), None);

    engine.activate_tab(page.service_buttons[1]).expect("service");
    assert_eq!(engine.document().style(page.promo, "display"), None);
}

#[test]
fn mount_hides_promo_box_when_plan1_is_active() {
    let page = tabs_page(0);
    let promo = page.promo;
    let mut engine =
        LandingEngine::new(page.doc, ManualFrameScheduler::new(), LandingConfig::default())
            .expect("engine init");

    let report = engine.mount().expect("mount");

    assert!(report.promo_hidden);
    assert_eq!(engine.document().style(promo, "display"), Some("none"));
}

#[test]
fn mount_keeps_promo_box_when_plan2_is_active() {
    let page = tabs_page(1);
    let promo = page.promo;
    let mut engine =
        LandingEngine::new(page.doc, ManualFrameScheduler::new(), LandingConfig::default())
            .expect("engine init");

    assert!(!engine.mount().expect("mount").promo_hidden);
    assert_eq!(engine.document().style(promo, "display"), None);
}

#[test]
fn missing_panel_still_updates_buttons() {
    let mut page = tabs_page(1);
    let body = page.doc.body();
    let orphan = page
        .doc
        .append(
            body,
            "button",
            &[("class", "guar-tab-btn"), ("data-guar-tab", "g-nowhere")],
        )
        .expect("orphan");
    let mut engine = engine(page.doc);

    assert!(engine.activate_tab(orphan).expect("activate"));

    let doc = engine.document();
    assert!(doc.has_class(orphan, "active"));
    assert_eq!(active(doc, &page.guarantee_panels), vec![false, false]);
}

#[test]
fn clicks_outside_tab_groups_are_ignored() {
    let page = tabs_page(1);
    let promo = page.promo;
    let mut engine = engine(page.doc);

    assert!(!engine.activate_tab(promo).expect("activate"));
    assert_eq!(active(engine.document(), &page.plan_buttons), vec![false, true]);
}

#[test]
fn tab_buttons_cover_every_group() {
    let page = tabs_page(1);
    let engine = engine(page.doc);

    assert_eq!(engine.tab_buttons().expect("buttons").len(), 7);
}

#[test]
fn promo_box_can_be_disabled() {
    let page = tabs_page(0);
    let promo = page.promo;
    let config = LandingConfig::default().with_tabs(TabsConfig {
        promo: None,
        ..TabsConfig::default()
    });
    let mut engine = LandingEngine::new(page.doc, ManualFrameScheduler::new(), config)
        .expect("engine init");

    engine.mount().expect("mount");
    engine.activate_tab(page.plan_buttons[0]).expect("plan1");

    assert_eq!(engine.document().style(promo, "display"), None);
}

#[test]
fn promo_display_only_reacts_to_plan_tabs() {
    let promo = PromoBoxConfig::default();
    assert_eq!(promo.display_for("plan1"), Some("none"));
    assert_eq!(promo.display_for("plan2"), Some(""));
    assert_eq!(promo.display_for("seo"), None);
}
