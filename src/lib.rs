//! landing-motion: headless presentation engine for marketing landing pages.
//!
//! The engine reveals elements as they scroll into view, runs eased
//! number counters once the stats region appears, and drives the smaller page
//! effects (tabs, scroll progress, navbar tint, smooth anchors, particles).
//! The document and the frame clock are injected, so the same engine runs
//! against the browser (feature `web`) or the in-memory document used by tests.

pub mod api;
pub mod core;
pub mod dom;
pub mod effects;
pub mod error;
pub mod extensions;
pub mod frame;
pub mod observe;
pub mod telemetry;

#[cfg(feature = "web")]
pub mod platform_web;

pub use api::{LandingConfig, LandingEngine};
pub use error::{MotionError, MotionResult};
