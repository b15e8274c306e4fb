use std::cell::RefCell;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    pub struct SubId;
}

/// The host-side storage a container commits into: read the current value,
/// store a new one and let whoever depends on it recompute.
pub trait StateCell<T> {
    fn get(&self) -> T;
    fn set(&self, value: T);
}

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Observable single-value slot. Clones share the value and subscribers.
///
/// Subscribers run after every write with a snapshot of the new value. No
/// borrow is held while they run, so they may read, write or (un)subscribe;
/// a nested write notifies every subscriber again before the outer pass
/// continues.
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T: 'static> {
    value: T,
    subs: SlotMap<SubId, Subscriber<T>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            subs: SlotMap::with_key(),
        })))
    }
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow().value)
    }
    pub fn set(&self, v: T)
    where
        T: Clone,
    {
        self.0.borrow_mut().value = v;
        self.notify();
    }
    pub fn update<F: FnOnce(&mut T)>(&self, f: F)
    where
        T: Clone,
    {
        f(&mut self.0.borrow_mut().value);
        self.notify();
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

    fn notify(&self)
    where
        T: Clone,
    {
        let (subs, snapshot): (Vec<Subscriber<T>>, T) = {
            let inner = self.0.borrow();
            (inner.subs.values().cloned().collect(), inner.value.clone())
        };
        for s in subs {
            s(&snapshot);
        }
    }
}

impl<T: Clone> StateCell<T> for Signal<T> {
    fn get(&self) -> T {
        Signal::get(self)
    }
    fn set(&self, value: T) {
        Signal::set(self, value)
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
