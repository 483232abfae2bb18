use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{MotionError, MotionResult};

/// Half-open sampling range `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    pub min: f64,
    pub max: f64,
}

impl SampleRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> f64 {
        self.min + rng.r#gen::<f64>() * (self.max - self.min)
    }

    fn validate(self, name: &str) -> MotionResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(MotionError::InvalidConfig(format!(
                "particle {name} range must be finite with min <= max"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub container_id: String,
    pub count: usize,
    pub size_px: SampleRange,
    pub alpha: SampleRange,
    pub duration_s: SampleRange,
    /// Applied as a negative delay so particles start mid-cycle.
    pub delay_s: SampleRange,
    pub rgb: [u8; 3],
    pub animation_name: String,
    pub style_id: String,
    pub rise_px: f64,
    pub drift_px: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            container_id: "particles".to_owned(),
            count: 30,
            size_px: SampleRange::new(1.0, 4.0),
            alpha: SampleRange::new(0.05, 0.2),
            duration_s: SampleRange::new(6.0, 14.0),
            delay_s: SampleRange::new(0.0, 10.0),
            rgb: [139, 92, 246],
            animation_name: "float-particle".to_owned(),
            style_id: "particle-styles".to_owned(),
            rise_px: 80.0,
            drift_px: 30.0,
        }
    }
}

impl ParticleConfig {
    pub fn validate(&self) -> MotionResult<()> {
        self.size_px.validate("size")?;
        self.alpha.validate("alpha")?;
        self.duration_s.validate("duration")?;
        self.delay_s.validate("delay")?;
        if self.alpha.min < 0.0 || self.alpha.max > 1.0 {
            return Err(MotionError::InvalidConfig(
                "particle alpha must stay within [0, 1]".to_owned(),
            ));
        }
        if self.animation_name.is_empty() || self.style_id.is_empty() {
            return Err(MotionError::InvalidConfig(
                "particle animation name and style id must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Keyframes shared by every particle. `drift_left` picks the horizontal
    /// direction of the whole field.
    #[must_use]
    pub fn keyframes_css(&self, drift_left: bool) -> String {
        let sign = if drift_left { "-" } else { "" };
        format!(
            "@keyframes {name} {{\n    \
             0%, 100% {{ transform: translateY(0) translateX(0); opacity: 0; }}\n    \
             10% {{ opacity: 1; }}\n    \
             90% {{ opacity: 1; }}\n    \
             50% {{ transform: translateY(-{rise}px) translateX({sign}{drift}px); }}\n}}\n",
            name = self.animation_name,
            rise = self.rise_px,
            drift = self.drift_px,
        )
    }
}

/// One decorative particle. Positions are percentages of the container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub size_px: f64,
    pub alpha: f64,
    pub left_percent: f64,
    pub top_percent: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, config: &ParticleConfig) -> Self {
        Self {
            size_px: config.size_px.sample(rng),
            alpha: config.alpha.sample(rng),
            left_percent: SampleRange::new(0.0, 100.0).sample(rng),
            top_percent: SampleRange::new(0.0, 100.0).sample(rng),
            duration_s: config.duration_s.sample(rng),
            delay_s: -config.delay_s.sample(rng),
        }
    }

    /// Inline style declarations for this particle, in application order.
    #[must_use]
    pub fn style_properties(&self, config: &ParticleConfig) -> Vec<(&'static str, String)> {
        let [red, green, blue] = config.rgb;
        vec![
            ("position", "absolute".to_owned()),
            ("width", format!("{}px", self.size_px)),
            ("height", format!("{}px", self.size_px)),
            (
                "background",
                format!("rgba({red}, {green}, {blue}, {})", self.alpha),
            ),
            ("border-radius", "50%".to_owned()),
            ("left", format!("{}%", self.left_percent)),
            ("top", format!("{}%", self.top_percent)),
            (
                "animation",
                format!(
                    "{} {}s ease-in-out infinite",
                    config.animation_name, self.duration_s
                ),
            ),
            ("animation-delay", format!("{}s", self.delay_s)),
        ]
    }
}
