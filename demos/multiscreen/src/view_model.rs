use multiscreen_core::{Signal, SubId, signal};

/// Session-wide UI state shared by every screen.
///
/// Owned by the root composition and handed to renderers by reference; clones
/// share the same state. Starts with dark mode off on every launch.
#[derive(Clone, Debug)]
pub struct SharedViewModel {
    dark_mode: Signal<bool>,
}

impl Default for SharedViewModel {
    fn default() -> Self {
        Self {
            dark_mode: signal(false),
        }
    }
}

impl SharedViewModel {
    pub fn is_dark_mode_enabled(&self) -> bool {
        self.dark_mode.get()
    }

    pub fn set_dark_mode_enabled(&self, enabled: bool) {
        log::debug!("dark mode -> {enabled}");
        self.dark_mode.set(enabled);
    }

    pub fn toggle_dark_mode(&self) {
        self.set_dark_mode_enabled(!self.is_dark_mode_enabled());
    }

    /// Called after every write.
    pub fn subscribe(&self, f: impl Fn(bool) + 'static) -> SubId {
        self.dark_mode.subscribe(move |v| f(*v))
    }

    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.dark_mode.unsubscribe(id)
    }
}
