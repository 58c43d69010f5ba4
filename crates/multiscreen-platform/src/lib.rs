//! Headless platform runner.
//!
//! [`HeadlessApp`] plays the role a windowing runner plays elsewhere: it owns
//! the [`Scheduler`], keeps the last [`Frame`], rebuilds it when something it
//! watches changes, and delivers [`UiEvent`]s to the frame's hit regions.
//! Everything happens on the calling thread; an event is fully processed
//! (handler, state change, re-render) before `dispatch` returns.

mod driver;
mod error;

pub use driver::{Command, parse_command, run_headless_app};
pub use error::PlatformError;

use std::cell::Cell;
use std::rc::Rc;

use multiscreen_core::*;
use multiscreen_devtools::Inspector;
use multiscreen_ui::{dump_scene, layout_and_paint};

/// User input addressed by what is visible on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// Button text or clickable text content.
    Click(String),
    /// Switch label; flips the switch.
    Toggle(String),
    /// Replace the contents of the text field with this hint.
    Input { field: String, text: String },
    /// System back.
    Back,
}

/// Marks the current frame stale. Cheap to clone into subscriptions.
#[derive(Clone, Default)]
pub struct Invalidator(Rc<Cell<bool>>);

impl Invalidator {
    pub fn invalidate(&self) {
        self.0.set(true);
    }

    /// Whether a re-render is pending.
    pub fn is_invalid(&self) -> bool {
        self.0.get()
    }

    fn take(&self) -> bool {
        self.0.replace(false)
    }
}

type BackHandler = Rc<dyn Fn() -> bool>;

/// Runs the registered cleanups (subscriptions it made) when dropped.
pub struct HeadlessApp {
    root: Box<dyn FnMut() -> View>,
    sched: Scheduler,
    inspector: Inspector,
    frame: Option<Frame>,
    invalid: Invalidator,
    on_back: Option<BackHandler>,
    cleanups: Vec<Dispose>,
}

impl HeadlessApp {
    pub fn new(root: impl FnMut() -> View + 'static) -> Self {
        Self {
            root: Box::new(root),
            sched: Scheduler::new(),
            inspector: Inspector::new(),
            frame: None,
            invalid: Invalidator::default(),
            on_back: None,
            cleanups: Vec::new(),
        }
    }

    /// Handler for [`UiEvent::Back`]; returns whether it consumed the event.
    pub fn with_back_handler(mut self, handler: Rc<dyn Fn() -> bool>) -> Self {
        self.on_back = Some(handler);
        self
    }

    pub fn with_size(mut self, size: (u32, u32)) -> Self {
        self.sched.size = size;
        self
    }

    pub fn invalidator(&self) -> Invalidator {
        self.invalid.clone()
    }

    /// Re-render whenever `sig` changes, until this app is dropped.
    pub fn watch<T: Clone>(&mut self, sig: &Signal<T>) {
        let inv = self.invalidator();
        let id = sig.subscribe(move |_| inv.invalidate());
        let sig = sig.clone();
        self.on_drop(Dispose::new(move || {
            sig.unsubscribe(id);
        }));
    }

    /// Run `cleanup` when this app is dropped.
    pub fn on_drop(&mut self, cleanup: Dispose) {
        self.cleanups.push(cleanup);
    }

    /// Current frame, rebuilt first if it is stale.
    pub fn frame(&mut self) -> &Frame {
        if self.invalid.take() || self.frame.is_none() {
            let frame = self.render();
            self.frame = Some(frame);
        }
        self.frame.get_or_insert_with(Frame::default)
    }

    /// Text dump of the current frame.
    pub fn dump(&mut self) -> String {
        dump_scene(&self.frame().scene)
    }

    pub fn frames_rendered(&self) -> u64 {
        self.sched.frames()
    }

    pub fn inspector(&self) -> &Inspector {
        &self.inspector
    }

    /// Deliver one event. Returns whether it was consumed; only `Back` can go
    /// unconsumed (nothing left to pop).
    pub fn dispatch(&mut self, event: UiEvent) -> Result<bool, PlatformError> {
        log::debug!("dispatch {event:?}");
        let consumed = match event {
            UiEvent::Back => match self.on_back.clone() {
                Some(handler) => handler(),
                None => false,
            },
            UiEvent::Click(label) => {
                let cb = self
                    .frame()
                    .hit_regions
                    .iter()
                    .find(|h| h.label == label && h.on_click.is_some())
                    .and_then(|h| h.on_click.clone());
                let Some(cb) = cb else {
                    return Err(self.missing(Role::Button, label));
                };
                cb();
                true
            }
            UiEvent::Toggle(label) => {
                let target = self
                    .frame()
                    .hit(Role::Switch, &label)
                    .and_then(|h| Some((h.on_toggle.clone()?, h.checked.unwrap_or(false))));
                let Some((cb, checked)) = target else {
                    return Err(self.missing(Role::Switch, label));
                };
                cb(!checked);
                true
            }
            UiEvent::Input { field, text } => {
                let cb = self
                    .frame()
                    .hit(Role::TextField, &field)
                    .and_then(|h| h.on_text_change.clone());
                let Some(cb) = cb else {
                    return Err(self.missing(Role::TextField, field));
                };
                cb(text);
                true
            }
        };
        // Rebuild now so the caller observes the result of this event.
        self.frame();
        Ok(consumed)
    }

    fn render(&mut self) -> Frame {
        let Self {
            root,
            sched,
            inspector,
            ..
        } = self;
        inspector.begin_frame();
        let frame = sched.repose(|| root(), layout_and_paint);
        inspector.end_frame(&frame);
        frame
    }

    fn missing(&self, role: Role, label: String) -> PlatformError {
        log::warn!("no {role} labelled `{label}`");
        PlatformError::NoSuchTarget { role, label }
    }
}

impl Drop for HeadlessApp {
    fn drop(&mut self) {
        for cleanup in self.cleanups.drain(..).rev() {
            cleanup.run();
        }
    }
}
