use std::cell::RefCell;
use std::rc::Rc;

use multiscreen_core::{Scope, Signal, SubId, signal};

use crate::{EntryScope, NavError, Route, RoutePattern, SavedState};

struct Entry {
    id: u64,
    route: Route,
    saved: Rc<SavedState>,
    /// Disposed when the entry is popped, so `on_enter` cleanups run on unmount.
    scope: Scope,
}

struct BackState {
    entries: Vec<Entry>,
    next_id: u64,
    patterns: Vec<RoutePattern>,
}

impl BackState {
    fn push(&mut self, route: Route) {
        let route = self.canonical(route);
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            route,
            saved: Rc::new(SavedState::default()),
            scope: Scope::new(),
        });
    }

    fn canonical(&self, route: Route) -> Route {
        RoutePattern::canonicalize(&self.patterns, route)
    }
}

/// Owns the back stack. Clones are handles to the same stack.
///
/// The stack is never empty: it starts with the start route and the last
/// entry is never popped. A controller built [`with_patterns`](Self::with_patterns)
/// stores concrete route strings split into pattern and arguments, so
/// `navigate("details/Item 2")` and the structured route are the same entry. Every mutation notifies subscribers once, and so
/// does every write to entry state created with
/// [`EntryScope::remember_state`].
#[derive(Clone)]
pub struct NavController {
    inner: Rc<RefCell<BackState>>,
    version: Signal<u64>,
}

impl NavController {
    pub fn new(start: impl Into<Route>) -> Self {
        Self::with_patterns(start, Vec::new())
    }

    pub fn with_patterns(
        start: impl Into<Route>,
        patterns: impl IntoIterator<Item = RoutePattern>,
    ) -> Self {
        let mut state = BackState {
            entries: Vec::new(),
            next_id: 1,
            patterns: patterns.into_iter().collect(),
        };
        state.push(start.into());
        Self {
            inner: Rc::new(RefCell::new(state)),
            version: signal(0),
        }
    }

    /// Top-of-stack route.
    pub fn current(&self) -> Route {
        self.top().route.clone()
    }

    /// Scope of the top entry.
    pub fn current_entry(&self) -> EntryScope {
        let s = self.inner.borrow();
        let top = &s.entries[s.entries.len() - 1];
        EntryScope {
            id: top.id,
            route: top.route.clone(),
            saved: top.saved.clone(),
            scope: top.scope.clone(),
            nav: self.clone(),
        }
    }

    pub fn size(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Routes bottom to top.
    pub fn routes(&self) -> Vec<Route> {
        self.inner
            .borrow()
            .entries
            .iter()
            .map(|e| e.route.clone())
            .collect()
    }

    /// Bumped on every mutation.
    pub fn version(&self) -> u64 {
        self.version.get()
    }

    /// Handle to the revision counter, for entry state to bump.
    pub(crate) fn revision(&self) -> Signal<u64> {
        self.version.clone()
    }

    pub fn subscribe(&self, f: impl Fn() + 'static) -> SubId {
        self.version.subscribe(move |_| f())
    }

    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.version.unsubscribe(id)
    }

    /// Push `route`. Not validated against any registry.
    pub fn navigate(&self, route: impl Into<Route>) {
        let route = route.into();
        log::debug!("navigate -> {route}");
        self.inner.borrow_mut().push(route);
        self.bump();
    }

    /// Pop everything from the top down to and including the topmost entry
    /// matching `pop_until` (see [`Route::matches`]), then push `route`.
    /// Without a match the whole stack is cleared first.
    pub fn navigate_and_clear(&self, route: impl Into<Route>, pop_until: &Route) {
        let route = route.into();
        let popped = {
            let mut s = self.inner.borrow_mut();
            let pop_until = s.canonical(pop_until.clone());
            let cut = s
                .entries
                .iter()
                .rposition(|e| e.route.matches(&pop_until))
                .unwrap_or_else(|| {
                    log::debug!("navigate_and_clear: `{pop_until}` not on stack, clearing");
                    0
                });
            let popped = s.entries.split_off(cut);
            s.push(route.clone());
            popped
        };
        log::debug!(
            "navigate_and_clear -> {route} (popped {}, up to `{pop_until}`)",
            popped.len()
        );
        dispose_top_down(popped);
        self.bump();
    }

    /// Pop the top entry unless it is the root. Returns whether anything was popped.
    pub fn pop_back(&self) -> bool {
        match self.try_pop_back() {
            Ok(_) => true,
            Err(_) => {
                log::debug!("pop_back ignored at root `{}`", self.current());
                false
            }
        }
    }

    /// Like [`pop_back`](Self::pop_back) but reports the root case and returns the popped route.
    pub fn try_pop_back(&self) -> Result<Route, NavError> {
        let entry = {
            let mut s = self.inner.borrow_mut();
            if s.entries.len() <= 1 {
                return Err(NavError::EmptyStack);
            }
            s.entries.pop()
        };
        let Some(entry) = entry else {
            return Err(NavError::EmptyStack);
        };
        let route = entry.route.clone();
        log::debug!("pop_back <- {route}");
        entry.scope.dispose();
        self.bump();
        Ok(route)
    }

    /// Swap the top entry for `route` with fresh state.
    pub fn replace(&self, route: impl Into<Route>) {
        let route = route.into();
        let old = {
            let mut s = self.inner.borrow_mut();
            let old = s.entries.pop();
            s.push(route.clone());
            old
        };
        log::debug!("replace -> {route}");
        if let Some(old) = old {
            old.scope.dispose();
        }
        self.bump();
    }

    /// Pop down to the topmost entry satisfying `pred`; `inclusive` pops that
    /// entry too. The root entry is never popped. Returns the number popped.
    pub fn pop_up_to(&self, pred: impl Fn(&Route) -> bool, inclusive: bool) -> usize {
        let popped = {
            let mut s = self.inner.borrow_mut();
            let Some(idx) = s.entries.iter().rposition(|e| pred(&e.route)) else {
                return 0;
            };
            let cut = (if inclusive { idx } else { idx + 1 }).max(1);
            if cut >= s.entries.len() {
                return 0;
            }
            s.entries.split_off(cut)
        };
        let n = popped.len();
        log::debug!("pop_up_to popped {n}");
        dispose_top_down(popped);
        self.bump();
        n
    }

    /// Record the registry's resolution of entry `id` so `current()` and
    /// matching see its arguments. No notification: the stack is unchanged.
    pub(crate) fn resolve_entry(&self, id: u64, route: &Route) {
        let mut s = self.inner.borrow_mut();
        if let Some(e) = s.entries.iter_mut().find(|e| e.id == id)
            && e.route.params().next().is_none()
        {
            e.route = route.clone();
        }
    }

    /// Back handler for the platform runner.
    pub fn back_handler(&self) -> Rc<dyn Fn() -> bool> {
        let nav = self.clone();
        Rc::new(move || nav.pop_back())
    }

    /// Routes bottom to top as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.routes()).unwrap_or("[]".into())
    }

    fn top(&self) -> std::cell::Ref<'_, Entry> {
        std::cell::Ref::map(self.inner.borrow(), |s| &s.entries[s.entries.len() - 1])
    }

    fn bump(&self) {
        self.version.update(|v| *v = v.wrapping_add(1));
    }
}

fn dispose_top_down(entries: Vec<Entry>) {
    for e in entries.into_iter().rev() {
        e.scope.dispose();
    }
}
