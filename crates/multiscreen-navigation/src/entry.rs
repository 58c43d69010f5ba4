use std::any::Any;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use multiscreen_core::{Dispose, Scope, Signal, scoped_effect, signal};

use crate::{NavController, Route};

/// Values remembered by one back-stack entry. Dropped with the entry.
#[derive(Default)]
pub struct SavedState {
    map: RefCell<HashMap<&'static str, Box<dyn Any>>>,
    entered: RefCell<HashSet<&'static str>>,
}

impl SavedState {
    pub fn remember<T: 'static>(
        &self,
        key: &'static str,
        init: impl FnOnce() -> T,
    ) -> Rc<RefCell<T>> {
        if let Some(b) = self.map.borrow().get(key)
            && let Some(rc) = b.downcast_ref::<Rc<RefCell<T>>>()
        {
            return rc.clone();
        }
        if self.map.borrow().contains_key(key) {
            log::warn!("remember_saveable: slot '{key}' reused with a different type; replacing");
        }
        let rc = Rc::new(RefCell::new(init()));
        self.map.borrow_mut().insert(key, Box::new(rc.clone()));
        rc
    }

    /// `true` the first time `key` is seen.
    fn first_entry(&self, key: &'static str) -> bool {
        self.entered.borrow_mut().insert(key)
    }
}

/// What a screen renderer sees of its back-stack entry.
pub struct EntryScope {
    pub(crate) id: u64,
    pub(crate) route: Route,
    pub(crate) saved: Rc<SavedState>,
    pub(crate) scope: Scope,
    pub(crate) nav: NavController,
}

impl EntryScope {
    /// A scope on a fresh single-entry stack. Useful for previews and tests.
    pub fn detached(route: Route) -> Self {
        NavController::new(route).current_entry()
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn arg(&self, key: &str) -> Option<&str> {
        self.route.param(key)
    }

    pub fn navigator(&self) -> NavController {
        self.nav.clone()
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// State that lives as long as this entry stays on the back stack.
    pub fn remember_saveable<T: 'static>(
        &self,
        slot: &'static str,
        init: impl FnOnce() -> T,
    ) -> Rc<RefCell<T>> {
        self.saved.remember(slot, init)
    }

    /// Observable state owned by this entry. Writes notify the controller's
    /// subscribers so the host re-renders.
    pub fn remember_state<T: Clone + 'static>(
        &self,
        slot: &'static str,
        init: impl FnOnce() -> T,
    ) -> Signal<T> {
        let cell = self.saved.remember(slot, || {
            let state = signal(init());
            // Must not capture the controller: it owns this entry.
            let revision = self.nav.revision();
            state.subscribe(move |_| revision.update(|v| *v = v.wrapping_add(1)));
            state
        });
        cell.borrow().clone()
    }

    /// Runs `f` the first time this entry is composed; its cleanup runs when
    /// the entry is popped.
    pub fn on_enter(&self, slot: &'static str, f: impl FnOnce() -> Dispose) {
        if self.saved.first_entry(slot) {
            self.scope.run(|| scoped_effect(f));
        }
    }

    pub(crate) fn with_route(mut self, route: Route) -> Self {
        self.route = route;
        self
    }
}
