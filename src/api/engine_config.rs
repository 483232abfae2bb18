use serde::{Deserialize, Serialize};

use crate::core::{NumberLocale, TimelineConfig};
use crate::dom::Selector;
use crate::effects::{ParticleConfig, ScrollEffectsConfig};
use crate::error::{MotionError, MotionResult};
use crate::observe::ObserverOptions;

use super::{CounterConfig, RevealConfig, TabsConfig};

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can ship it alongside the page markup instead of
/// hard-coding selectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingConfig {
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub counters: CounterConfig,
    #[serde(default)]
    pub tabs: TabsConfig,
    #[serde(default)]
    pub scroll: ScrollEffectsConfig,
    #[serde(default)]
    pub particles: ParticleConfig,
    #[serde(default = "default_anchor_selector")]
    pub anchor_selector: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            reveal: RevealConfig::default(),
            counters: CounterConfig::default(),
            tabs: TabsConfig::default(),
            scroll: ScrollEffectsConfig::default(),
            particles: ParticleConfig::default(),
            anchor_selector: default_anchor_selector(),
        }
    }
}

impl LandingConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the grouping locale for integer counters.
    #[must_use]
    pub fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.counters.locale = locale;
        self
    }

    /// Sets counter duration and cadence.
    #[must_use]
    pub fn with_timeline(mut self, timeline: TimelineConfig) -> Self {
        self.counters.timeline = timeline;
        self
    }

    /// Sets reveal observer threshold and root margin.
    #[must_use]
    pub fn with_observer(mut self, observer: ObserverOptions) -> Self {
        self.reveal.observer = observer;
        self
    }

    #[must_use]
    pub fn with_reveal(mut self, reveal: RevealConfig) -> Self {
        self.reveal = reveal;
        self
    }

    #[must_use]
    pub fn with_tabs(mut self, tabs: TabsConfig) -> Self {
        self.tabs = tabs;
        self
    }

    #[must_use]
    pub fn with_particles(mut self, particles: ParticleConfig) -> Self {
        self.particles = particles;
        self
    }

    pub fn validate(&self) -> MotionResult<()> {
        self.reveal.validate()?;
        self.counters.validate()?;
        self.tabs.validate()?;
        self.scroll.navbar.validate()?;
        Selector::parse(&self.scroll.progress_selector)?;
        Selector::parse(&self.scroll.navbar.selector)?;
        self.particles.validate()?;
        Selector::parse(&self.anchor_selector)?;
        Ok(())
    }

    pub fn from_json_str(json: &str) -> MotionResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| MotionError::InvalidConfig(format!("config json: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> MotionResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| MotionError::InvalidConfig(format!("config json: {err}")))
    }
}

fn default_anchor_selector() -> String {
    r##"a[href^="#"]"##.to_owned()
}
