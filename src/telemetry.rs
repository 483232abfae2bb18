//! Opt-in log output for hosts that do not bring their own subscriber.
//!
//! The engine only emits `tracing` events. Native hosts and tests can route
//! them to stderr with [`init_default_tracing`]; browser builds usually
//! install a console subscriber of their own instead.

/// Directive used when neither `LANDING_MOTION_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "landing_motion=info";

/// Installs a compact stderr subscriber for the engine's events.
///
/// The filter is read from `LANDING_MOTION_LOG`, then `RUST_LOG`, then
/// [`DEFAULT_FILTER`]. Gives `false` without the `telemetry` feature or when
/// a global subscriber is already in place.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_env("LANDING_MOTION_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
