//! Decorative effects that are pure functions of their inputs.

pub mod particles;
pub mod scroll;

pub use particles::{Particle, ParticleConfig, SampleRange};
pub use scroll::{NavbarConfig, NavbarPalette, ScrollEffectsConfig, ScrollPosition};
