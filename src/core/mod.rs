pub mod easing;
pub mod geometry;
pub mod js_number;
pub mod number_format;
pub mod timeline;

pub use easing::{Easing, ease_out_quart};
pub use geometry::{MarginLength, Rect, RootMargin, Viewport};
pub use js_number::{parse_float_prefix, round_half_up, to_fixed};
pub use number_format::{CounterDisplayMode, CounterFormatter, NumberLocale, decimal_places};
pub use timeline::{CounterTimeline, MAX_TOTAL_STEPS, TimelineConfig, TimelineStep};
