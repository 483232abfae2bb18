use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{
    CounterDisplayMode, CounterFormatter, CounterTimeline, NumberLocale, TimelineConfig,
    parse_float_prefix,
};
use crate::dom::{Document, NodeId, Selector};
use crate::error::{MotionError, MotionResult};

/// Counter discovery and timing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    #[serde(default = "default_integer_selector")]
    pub integer_selector: String,
    #[serde(default = "default_decimal_selector")]
    pub decimal_selector: String,
    #[serde(default = "default_target_attribute")]
    pub target_attribute: String,
    #[serde(default)]
    pub timeline: TimelineConfig,
    #[serde(default)]
    pub locale: NumberLocale,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            integer_selector: default_integer_selector(),
            decimal_selector: default_decimal_selector(),
            target_attribute: default_target_attribute(),
            timeline: TimelineConfig::default(),
            locale: NumberLocale::default(),
        }
    }
}

impl CounterConfig {
    pub fn validate(&self) -> MotionResult<()> {
        Selector::parse(&self.integer_selector)?;
        Selector::parse(&self.decimal_selector)?;
        if self.target_attribute.trim().is_empty() {
            return Err(MotionError::InvalidConfig(
                "counter target attribute must not be empty".to_owned(),
            ));
        }
        self.timeline.validate()
    }
}

fn default_integer_selector() -> String {
    ".counter".to_owned()
}

fn default_decimal_selector() -> String {
    ".counter-decimal".to_owned()
}

fn default_target_attribute() -> String {
    "data-target".to_owned()
}

/// One counter's run: its element, target and remaining timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    node: NodeId,
    target: f64,
    mode: CounterDisplayMode,
    timeline: CounterTimeline,
    last_text: Option<String>,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(node: NodeId, target: f64, mode: CounterDisplayMode, timeline: TimelineConfig) -> Self {
        Self {
            node,
            target,
            mode,
            timeline: CounterTimeline::new(timeline),
            last_text: None,
        }
    }

    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn mode(&self) -> CounterDisplayMode {
        self.mode
    }

    /// Frames rendered so far. Never exceeds `total_steps`.
    #[must_use]
    pub fn frames_rendered(&self) -> u32 {
        self.timeline.completed_steps()
    }

    #[must_use]
    pub fn total_steps(&self) -> u32 {
        self.timeline.total_steps()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timeline.is_finished()
    }

    #[must_use]
    pub fn last_text(&self) -> Option<&str> {
        self.last_text.as_deref()
    }

    /// Text for the next frame, or `None` once the run is over.
    ///
    /// The last frame renders the exact target rather than `target * eased(1)`.
    pub fn advance(&mut self, formatter: CounterFormatter) -> Option<&str> {
        let step = self.timeline.next()?;
        let text = if step.is_last() {
            formatter.format_final(self.target, self.mode)
        } else {
            formatter.format_frame(self.target * step.eased, self.target, self.mode)
        };
        self.last_text = Some(text);
        self.last_text.as_deref()
    }
}

/// Summary of one frame across all counters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterTick {
    pub rendered: usize,
    /// Counters that wrote their final value on this frame.
    pub completed: Vec<NodeId>,
    pub running: usize,
}

/// Eased 0-to-target counters, started at most once.
#[derive(Debug, Clone)]
pub struct CounterEngine {
    config: CounterConfig,
    formatter: CounterFormatter,
    started: bool,
    start_requests: usize,
    animations: Vec<CounterAnimation>,
    skipped: Vec<NodeId>,
}

impl CounterEngine {
    #[must_use]
    pub fn new(config: CounterConfig) -> Self {
        let formatter = CounterFormatter::new(config.locale);
        Self {
            config,
            formatter,
            started: false,
            start_requests: 0,
            animations: Vec::new(),
            skipped: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Number of `start` calls, including the ignored ones.
    #[must_use]
    pub fn start_requests(&self) -> usize {
        self.start_requests
    }

    #[must_use]
    pub fn animations(&self) -> &[CounterAnimation] {
        &self.animations
    }

    #[must_use]
    pub fn animation(&self, node: NodeId) -> Option<&CounterAnimation> {
        self.animations.iter().find(|animation| animation.node == node)
    }

    /// Counters dropped because their target was missing or not numeric.
    #[must_use]
    pub fn skipped(&self) -> &[NodeId] {
        &self.skipped
    }

    #[must_use]
    pub fn running_len(&self) -> usize {
        self.animations
            .iter()
            .filter(|animation| !animation.is_finished())
            .count()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.animations.iter().any(|animation| !animation.is_finished())
    }

    /// Begins the run on the first call and ignores every later call.
    ///
    /// Returns `true` only for the call that started the run. Counters are
    /// discovered here, so elements present at that moment take part.
    pub fn start<D: Document + ?Sized>(&mut self, document: &D) -> MotionResult<bool> {
        self.start_requests += 1;
        if self.started {
            trace!(requests = self.start_requests, "counters already started");
            return Ok(false);
        }

        let decimal: IndexSet<NodeId> = document
            .query_all(&self.config.decimal_selector)?
            .into_iter()
            .collect();
        let all = document.query_all(&format!(
            "{}, {}",
            self.config.integer_selector, self.config.decimal_selector
        ))?;
        // Only a completed discovery consumes the single run.
        self.started = true;

        for node in all {
            let mode = if decimal.contains(&node) {
                CounterDisplayMode::DecimalFixed
            } else {
                CounterDisplayMode::IntegerGrouped
            };
            match self.read_target(document, node) {
                Ok(target) => self.animations.push(CounterAnimation::new(
                    node,
                    target,
                    mode,
                    self.config.timeline,
                )),
                Err(err) => {
                    warn!(%node, error = %err, "skipping counter");
                    self.skipped.push(node);
                }
            }
        }

        debug!(
            counters = self.animations.len(),
            skipped = self.skipped.len(),
            total_steps = self.config.timeline.total_steps(),
            "counters started"
        );
        Ok(true)
    }

    fn read_target<D: Document + ?Sized>(&self, document: &D, node: NodeId) -> MotionResult<f64> {
        let raw = document.attribute(node, &self.config.target_attribute);
        match raw.as_deref().and_then(parse_float_prefix) {
            Some(target) if target.is_finite() => Ok(target),
            _ => Err(MotionError::InvalidTarget {
                element: node.to_string(),
                raw,
            }),
        }
    }

    /// Advances every running counter by one step and writes its text.
    ///
    /// A failed write is logged and does not hold back the other counters.
    pub fn step<D: Document + ?Sized>(&mut self, document: &mut D) -> CounterTick {
        let mut tick = CounterTick::default();
        let formatter = self.formatter;
        for animation in &mut self.animations {
            let node = animation.node;
            let Some(text) = animation.advance(formatter) else {
                continue;
            };
            if let Err(err) = document.set_text(node, text) {
                warn!(%node, error = %err, "failed to write counter text");
            }
            tick.rendered += 1;
            if animation.is_finished() {
                tick.completed.push(node);
                trace!(%node, target = animation.target, "counter finished");
            }
        }
        tick.running = self.running_len();
        tick
    }
}
