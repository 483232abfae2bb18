use landing_motion::api::{LandingConfig, LandingEngine, TabScope};
use landing_motion::core::{Easing, NumberLocale, TimelineConfig};
use landing_motion::dom::MemoryDocument;
use landing_motion::frame::ManualFrameScheduler;
use landing_motion::observe::ObserverOptions;
use landing_motion::MotionError;

#[test]
fn defaults_match_landing_page_markup() {
    let config = LandingConfig::default();

    assert_eq!(
        config.reveal.selector,
        ".reveal-up, .reveal-left, .reveal-right, .fade-in-up"
    );
    assert_eq!(config.counters.integer_selector, ".counter");
    assert_eq!(config.counters.decimal_selector, ".counter-decimal");
    assert_eq!(config.counters.target_attribute, "data-target");
    assert_eq!(config.counters.locale, NumberLocale::EsUy);
    assert_eq!(config.counters.timeline.total_steps(), 120);
    assert_eq!(config.tabs.groups.len(), 2);
    assert_eq!(config.anchor_selector, r##"a[href^="#"]"##);
    assert_eq!(config.particles.count, 30);
    config.validate().expect("defaults are valid");
}

#[test]
fn json_round_trip_preserves_config() {
    let config = LandingConfig::default()
        .with_locale(NumberLocale::EnUs)
        .with_timeline(TimelineConfig {
            duration_ms: 1_200.0,
            steps_per_second: 30.0,
            easing: Easing::Linear,
        });

    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"root_margin\": \"0px 0px -60px 0px\""), "{json}");
    let parsed = LandingConfig::from_json_str(&json).expect("parse");

    assert_eq!(parsed, config);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let parsed = LandingConfig::from_json_str(
        r#"{
            "counters": { "locale": "EsEs" },
            "reveal": { "observer": { "threshold": 0.25 } },
            "scroll": { "navbar": { "scroll_threshold_px": 40.0 } }
        }"#,
    )
    .expect("parse");

    assert_eq!(parsed.counters.locale, NumberLocale::EsEs);
    assert_eq!(parsed.counters.integer_selector, ".counter");
    assert_eq!(parsed.reveal.observer.threshold, 0.25);
    assert_eq!(
        parsed.reveal.observer.root_margin,
        ObserverOptions::default().root_margin
    );
    assert_eq!(parsed.scroll.navbar.scroll_threshold_px, 40.0);
    assert_eq!(parsed.scroll.navbar.selector, ".navbar");
    assert_eq!(parsed.scroll.progress_selector, ".scroll-progress");
}

#[test]
fn tab_scope_is_configurable_from_json() {
    let parsed = LandingConfig::from_json_str(
        r#"{
            "tabs": {
                "groups": [{
                    "scope": { "Container": { "selector": ".pricing" } },
                    "button_selector": ".pricing-btn",
                    "panel_selector": ".pricing-panel",
                    "tab_attribute": "data-plan",
                    "active_class": "is-active"
                }]
            }
        }"#,
    )
    .expect("parse");

    assert_eq!(parsed.tabs.groups.len(), 1);
    assert_eq!(
        parsed.tabs.groups[0].scope,
        TabScope::Container {
            selector: ".pricing".to_owned()
        }
    );
    assert!(parsed.tabs.promo.is_none());
}

#[test]
fn invalid_root_margin_is_rejected() {
    let err = LandingConfig::from_json_str(
        r#"{ "reveal": { "observer": { "root_margin": "0 0 -60em 0" } } }"#,
    )
    .expect_err("em is not supported");
    assert!(matches!(err, MotionError::InvalidConfig(_)));
}

#[test]
fn engine_rejects_invalid_config() {
    let config = LandingConfig::default().with_observer(ObserverOptions {
        threshold: 1.5,
        ..ObserverOptions::default()
    });
    let result = LandingEngine::new(MemoryDocument::new(), ManualFrameScheduler::new(), config);
    assert!(matches!(result, Err(MotionError::InvalidConfig(_))));

    let mut config = LandingConfig::default();
    config.reveal.selector = "ul > li".to_owned();
    let result = LandingEngine::new(MemoryDocument::new(), ManualFrameScheduler::new(), config);
    assert!(matches!(result, Err(MotionError::InvalidSelector { .. })));

    let mut config = LandingConfig::default();
    config.counters.timeline.duration_ms = 0.0;
    let result = LandingEngine::new(MemoryDocument::new(), ManualFrameScheduler::new(), config);
    assert!(result.is_err());
}
