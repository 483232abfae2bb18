//! Browser host for `LandingEngine` (feature `web`).
//!
//! Wires the engine to `IntersectionObserver`, `requestAnimationFrame` and the
//! page's scroll and click events.

mod document;
mod frame;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    AddEventListenerOptions, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

pub use document::WebDocument;
pub use frame::WebFrameScheduler;

use crate::api::{LandingConfig, LandingEngine};
use crate::dom::NodeId;
use crate::effects::ScrollPosition;
use crate::error::{MotionError, MotionResult};
use crate::observe::IntersectionEntry;
use document::host_error;

pub type WebLandingEngine = LandingEngine<WebDocument, WebFrameScheduler>;

/// Engine bound to the live page plus the JS callbacks that drive it.
///
/// Dropping the adapter detaches the callbacks; call [`WebLandingAdapter::leak`]
/// to keep them for the page's lifetime.
pub struct WebLandingAdapter {
    engine: Rc<RefCell<WebLandingEngine>>,
    observer: IntersectionObserver,
    _frame: Closure<dyn FnMut()>,
    _intersections: Closure<dyn FnMut(Array, IntersectionObserver)>,
    _listeners: Vec<Closure<dyn FnMut(Event)>>,
}

impl WebLandingAdapter {
    /// Builds the engine over `window.document`, spawns particles and
    /// installs every listener.
    pub fn mount(config: LandingConfig) -> MotionResult<Self> {
        let window =
            web_sys::window().ok_or_else(|| MotionError::Host("no global window".to_owned()))?;
        let document = WebDocument::from_window()?;
        let scheduler = WebFrameScheduler::new(window.clone());
        let frame_slot = scheduler.callback_slot();
        let frame_pending = scheduler.pending_flag();

        let mut engine = LandingEngine::new(document, scheduler, config)?;
        let report = engine.mount()?;
        let mut rng = StdRng::seed_from_u64(js_sys::Date::now() as u64);
        if let Err(err) = engine.spawn_particles(&mut rng) {
            warn!(error = %err, "particles not spawned");
        }
        let engine = Rc::new(RefCell::new(engine));

        let frame = Closure::<dyn FnMut()>::new({
            let engine = Rc::clone(&engine);
            move || {
                frame_pending.set(false);
                engine.borrow_mut().on_animation_frame();
            }
        });
        *frame_slot.borrow_mut() = Some(frame.as_ref().unchecked_ref::<js_sys::Function>().clone());

        let (observer, intersections) = install_observer(&engine)?;
        let mut listeners = Vec::new();
        listeners.push(install_scroll_listener(&window, &engine)?);
        listeners.extend(install_tab_listeners(&engine)?);
        listeners.extend(install_anchor_listeners(&engine)?);

        debug!(
            observed = report.observed,
            listeners = listeners.len(),
            "web landing adapter mounted"
        );
        Ok(Self {
            engine,
            observer,
            _frame: frame,
            _intersections: intersections,
            _listeners: listeners,
        })
    }

    #[must_use]
    pub fn engine(&self) -> Rc<RefCell<WebLandingEngine>> {
        Rc::clone(&self.engine)
    }

    #[must_use]
    pub fn observer(&self) -> &IntersectionObserver {
        &self.observer
    }

    /// Keeps every callback alive until the page unloads.
    pub fn leak(self) {
        std::mem::forget(self);
    }
}

type IntersectionCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn install_observer(
    engine: &Rc<RefCell<WebLandingEngine>>,
) -> MotionResult<(IntersectionObserver, IntersectionCallback)> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new({
        let engine = Rc::clone(engine);
        move |entries: Array, _observer: IntersectionObserver| {
            let mut engine = engine.borrow_mut();
            let batch: Vec<IntersectionEntry> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| IntersectionEntry {
                    node: engine.document().intern(entry.target()),
                    is_intersecting: entry.is_intersecting(),
                    intersection_ratio: entry.intersection_ratio(),
                })
                .collect();
            if let Err(err) = engine.on_intersections(&batch) {
                warn!(error = %err, "intersection batch failed");
            }
        }
    });

    let engine = engine.borrow();
    let options = engine.observer_options();
    let init = IntersectionObserverInit::new();
    init.set_threshold(&options.threshold.into());
    init.set_root_margin(&options.root_margin.to_string());
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(host_error)?;
    for node in engine.observed_elements() {
        observer.observe(&engine.document().element(node)?);
    }
    Ok((observer, callback))
}

fn install_scroll_listener(
    window: &Window,
    engine: &Rc<RefCell<WebLandingEngine>>,
) -> MotionResult<Closure<dyn FnMut(Event)>> {
    let callback = Closure::<dyn FnMut(Event)>::new({
        let engine = Rc::clone(engine);
        move |_event: Event| {
            let mut engine = engine.borrow_mut();
            let Some(position) = scroll_position(engine.document()) else {
                return;
            };
            if let Err(err) = engine.on_scroll(position) {
                warn!(error = %err, "scroll update failed");
            }
        }
    });
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(host_error)?;
    Ok(callback)
}

fn scroll_position(document: &WebDocument) -> Option<ScrollPosition> {
    let root = document.raw().document_element()?;
    let body_top = document.raw().body().map_or(0, |body| body.scroll_top());
    let scroll_top = if body_top != 0 { body_top } else { root.scroll_top() };
    Some(ScrollPosition::new(
        f64::from(scroll_top),
        f64::from(root.scroll_height()),
        f64::from(root.client_height()),
    ))
}

fn install_tab_listeners(
    engine: &Rc<RefCell<WebLandingEngine>>,
) -> MotionResult<Vec<Closure<dyn FnMut(Event)>>> {
    let buttons = engine.borrow().tab_buttons()?;
    install_click_listeners(engine, buttons, |engine, button, _event| {
        if let Err(err) = engine.activate_tab(button) {
            warn!(%button, error = %err, "tab activation failed");
        }
    })
}

fn install_anchor_listeners(
    engine: &Rc<RefCell<WebLandingEngine>>,
) -> MotionResult<Vec<Closure<dyn FnMut(Event)>>> {
    let anchors = engine.borrow().anchors()?;
    install_click_listeners(engine, anchors, |engine, anchor, event| {
        match engine.on_anchor_click(anchor) {
            Ok(outcome) if outcome.prevent_default => event.prevent_default(),
            Ok(_) => {}
            Err(err) => warn!(%anchor, error = %err, "anchor click failed"),
        }
    })
}

fn install_click_listeners(
    engine: &Rc<RefCell<WebLandingEngine>>,
    nodes: Vec<NodeId>,
    handler: fn(&mut WebLandingEngine, NodeId, &Event),
) -> MotionResult<Vec<Closure<dyn FnMut(Event)>>> {
    let mut listeners = Vec::with_capacity(nodes.len());
    for node in nodes {
        let element = engine.borrow().document().element(node)?;
        let callback = Closure::<dyn FnMut(Event)>::new({
            let engine = Rc::clone(engine);
            move |event: Event| handler(&mut engine.borrow_mut(), node, &event)
        });
        element
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .map_err(host_error)?;
        listeners.push(callback);
    }
    Ok(listeners)
}
