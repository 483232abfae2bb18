use serde::{Deserialize, Serialize};

/// Easing curve applied to normalized animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Easing {
    Linear,
    /// `1 - (1 - t)^4`: most of the change happens early, then it settles.
    #[default]
    EaseOutQuart,
}

impl Easing {
    /// Maps progress in `[0, 1]` to eased progress. Out-of-range input is clamped.
    #[must_use]
    pub fn apply(self, progress: f64) -> f64 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutQuart => ease_out_quart(t),
        }
    }
}

#[must_use]
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

#[cfg(test)]
mod tests {
    use super::{Easing, ease_out_quart};

    #[test]
    fn quartic_hits_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
    }

    #[test]
    fn quartic_front_loads_change() {
        let half = ease_out_quart(0.5);
        assert!((half - 0.9375).abs() <= 1e-12);
        assert!(half > Easing::Linear.apply(0.5));
    }

    #[test]
    fn apply_clamps_progress() {
        assert_eq!(Easing::EaseOutQuart.apply(1.5), 1.0);
        assert_eq!(Easing::Linear.apply(-0.25), 0.0);
    }
}
