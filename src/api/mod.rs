mod anchor_controller;
mod counter_controller;
mod counter_engine;
mod engine;
mod engine_config;
mod engine_core;
mod engine_init;
mod particle_controller;
mod plugin_dispatch;
mod plugin_registry;
mod reveal_controller;
mod reveal_watcher;
mod scroll_controller;
mod tab_controller;
mod tabs_config;

pub use anchor_controller::AnchorOutcome;
pub use counter_engine::{CounterAnimation, CounterConfig, CounterEngine, CounterTick};
pub use engine::LandingEngine;
pub use engine_config::LandingConfig;
pub use engine_init::MountReport;
pub use reveal_watcher::{
    RevealBatch, RevealConfig, RevealWatcher, StatsRegionConfig, Visibility, WatchedElement,
};
pub use tabs_config::{PromoBoxConfig, TabGroupConfig, TabScope, TabsConfig};
