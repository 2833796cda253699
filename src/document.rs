//! Document-level key listeners
//!
//! The app owns one `Document` and feeds every key press through it before
//! routing the key to the focused component. Components that need a global
//! shortcut register a listener and hold the returned [`ListenerGuard`];
//! dropping the guard removes the listener.

use crossterm::event::KeyEvent;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// A cloneable callback with identity
///
/// Two callbacks compare equal only when they are clones of the same
/// allocation, so a parent that rebuilds its closure produces a new identity.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn emit(&self) {
        (self.0)()
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

type KeyListener = Rc<dyn Fn(&KeyEvent)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, KeyListener)>,
}

/// Shared registry of key listeners
#[derive(Clone, Default)]
pub struct Document {
    registry: Rc<RefCell<Registry>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key listener for as long as the returned guard lives
    #[must_use = "dropping the guard removes the listener immediately"]
    pub fn add_key_listener(&self, listener: impl Fn(&KeyEvent) + 'static) -> ListenerGuard {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(listener)));
        log::debug!("Key listener {} registered", id);

        ListenerGuard {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver a key event to every registered listener
    ///
    /// Listeners are snapshotted first, so a listener may register or drop
    /// listeners while it runs.
    pub fn dispatch_key(&self, key: &KeyEvent) {
        let listeners: Vec<KeyListener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in listeners {
            listener(key);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Keeps a key listener registered; removes it on drop
pub struct ListenerGuard {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
            log::debug!("Key listener {} removed", self.id);
        }
    }
}
