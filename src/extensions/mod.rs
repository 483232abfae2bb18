//! Optional hooks for host-specific behavior.

pub mod plugins;

pub use plugins::{MotionContext, MotionEvent, MotionPlugin};
