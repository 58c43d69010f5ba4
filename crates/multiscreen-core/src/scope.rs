use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::Dispose;

thread_local! {
    static CURRENT_SCOPE: RefCell<Option<Weak<ScopeInner>>> = const { RefCell::new(None) };
}

/// Lifetime owner for cleanups.
///
/// A navigation entry owns one scope; popping the entry disposes it, which runs
/// every registered cleanup (children first). Disposal is explicit: dropping
/// the last handle does not run cleanups.
pub struct Scope {
    inner: Rc<ScopeInner>,
}

struct ScopeInner {
    disposers: RefCell<Vec<Box<dyn FnOnce()>>>,
    children: RefCell<Vec<Scope>>,
    disposed: Cell<bool>,
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(ScopeInner {
                disposers: RefCell::new(Vec::new()),
                children: RefCell::new(Vec::new()),
                disposed: Cell::new(false),
            }),
        }
    }

    /// Run `f` with this scope installed as the current one.
    pub fn run<R>(&self, f: impl FnOnce() -> R) -> R {
        struct Restore(Option<Weak<ScopeInner>>);
        impl Drop for Restore {
            fn drop(&mut self) {
                let prev = self.0.take();
                CURRENT_SCOPE.with(|current| *current.borrow_mut() = prev);
            }
        }
        let prev = CURRENT_SCOPE.with(|current| {
            current
                .borrow_mut()
                .replace(Rc::downgrade(&self.inner))
        });
        let _restore = Restore(prev);
        f()
    }

    /// Registers a cleanup. On an already disposed scope it runs immediately.
    pub fn add_disposer(&self, disposer: impl FnOnce() + 'static) {
        if self.inner.disposed.get() {
            disposer();
            return;
        }
        self.inner.disposers.borrow_mut().push(Box::new(disposer));
    }

    pub fn child(&self) -> Scope {
        let child = Scope::new();
        self.inner.children.borrow_mut().push(child.clone());
        child
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    pub fn dispose(&self) {
        if self.inner.disposed.replace(true) {
            return;
        }
        let children = std::mem::take(&mut *self.inner.children.borrow_mut());
        for child in children {
            child.dispose();
        }
        let disposers = std::mem::take(&mut *self.inner.disposers.borrow_mut());
        log::trace!("scope disposed ({} cleanups)", disposers.len());
        for disposer in disposers.into_iter().rev() {
            disposer();
        }
    }
}

impl Clone for Scope {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

pub fn current_scope() -> Option<Scope> {
    CURRENT_SCOPE.with(|current| {
        current
            .borrow()
            .as_ref()
            .and_then(|weak| weak.upgrade().map(|inner| Scope { inner }))
    })
}

/// Runs `f` now and ties the returned cleanup to the current scope.
///
/// Outside any scope the cleanup is returned to the caller untouched.
pub fn scoped_effect(f: impl FnOnce() -> Dispose) -> Dispose {
    let d = f();
    if let Some(scope) = current_scope() {
        let d2 = d.clone();
        scope.add_disposer(move || d2.run());
    }
    d
}
