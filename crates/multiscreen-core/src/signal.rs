use std::cell::RefCell;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

new_key_type! {
    /// Handle returned by [`Signal::subscribe`]; pass it to [`Signal::unsubscribe`].
    pub struct SubId;
}

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Observable value shared by reference.
///
/// Clones are handles to the same cell. Writes notify every subscriber
/// synchronously, after the internal borrow has been released, so a subscriber
/// may freely read (or write) the signal again.
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    subs: SlotMap<SubId, Subscriber<T>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            subs: SlotMap::with_key(),
        })))
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        self.0.borrow_mut().subs.insert(Rc::new(f))
    }

    /// Returns `false` if `id` was already removed.
    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.0.borrow_mut().subs.remove(id).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.0.borrow().subs.len()
    }

    /// Both handles point at the same cell.
    pub fn ptr_eq(&self, other: &Signal<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Clone> Signal<T> {
    pub fn get(&self) -> T {
        self.0.borrow().value.clone()
    }

    pub fn set(&self, v: T) {
        self.0.borrow_mut().value = v;
        self.notify();
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        f(&mut self.0.borrow_mut().value);
        self.notify();
    }

    fn notify(&self) {
        let (value, subs) = {
            let inner = self.0.borrow();
            let subs: SmallVec<[Subscriber<T>; 4]> = inner.subs.values().cloned().collect();
            (inner.value.clone(), subs)
        };
        for s in subs {
            s(&value);
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.0.borrow();
        f.debug_struct("Signal")
            .field("value", &inner.value)
            .field("subscribers", &inner.subs.len())
            .finish()
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
