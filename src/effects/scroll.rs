use serde::{Deserialize, Serialize};

use crate::error::{MotionError, MotionResult};

/// Document scroll metrics sampled on a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ScrollPosition {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollPosition {
    #[must_use]
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// Scrolled share of the scrollable height, in `[0, 100]`.
    ///
    /// Pages that cannot scroll report 0.
    #[must_use]
    pub fn progress_percent(self) -> f64 {
        let scrollable = self.scroll_height - self.client_height;
        if !scrollable.is_finite() || scrollable <= 0.0 || !self.scroll_top.is_finite() {
            return 0.0;
        }
        (self.scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavbarPalette {
    pub background: String,
    pub border_bottom_color: String,
}

/// Navbar color swap once the page has scrolled past a threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub selector: String,
    pub scroll_threshold_px: f64,
    pub resting: NavbarPalette,
    pub scrolled: NavbarPalette,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            selector: ".navbar".to_owned(),
            scroll_threshold_px: 100.0,
            resting: NavbarPalette {
                background: "rgba(5, 5, 7, 0.85)".to_owned(),
                border_bottom_color: "rgba(255, 255, 255, 0.04)".to_owned(),
            },
            scrolled: NavbarPalette {
                background: "rgba(5, 5, 7, 0.95)".to_owned(),
                border_bottom_color: "rgba(255, 255, 255, 0.08)".to_owned(),
            },
        }
    }
}

impl NavbarConfig {
    #[must_use]
    pub fn palette_for(&self, scroll_y: f64) -> &NavbarPalette {
        if scroll_y > self.scroll_threshold_px {
            &self.scrolled
        } else {
            &self.resting
        }
    }

    pub fn validate(&self) -> MotionResult<()> {
        if !self.scroll_threshold_px.is_finite() || self.scroll_threshold_px < 0.0 {
            return Err(MotionError::InvalidConfig(
                "navbar scroll threshold must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollEffectsConfig {
    /// Element whose `width` tracks scroll progress.
    pub progress_selector: String,
    pub navbar: NavbarConfig,
}

impl Default for ScrollEffectsConfig {
    fn default() -> Self {
        Self {
            progress_selector: ".scroll-progress".to_owned(),
            navbar: NavbarConfig::default(),
        }
    }
}
