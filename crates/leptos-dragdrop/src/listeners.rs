//! Document listener lifetimes
//!
//! Global listeners are held by a guard and removed from the document when
//! the guard is dropped.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Something that can be unhooked from wherever it was registered
pub trait Detach {
    fn detach(self);
}

/// A mouse listener registered on `document`
pub struct DocumentListener {
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl DocumentListener {
    /// Register `closure` for `event` on the current document
    pub fn attach(event: &'static str, closure: Closure<dyn FnMut(web_sys::MouseEvent)>) -> Self {
        if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
            if let Err(e) = doc.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
                tracing::error!(event, ?e, "failed to add document listener");
            }
        }
        Self { event, closure }
    }
}

impl Detach for DocumentListener {
    fn detach(self) {
        if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
            let _ = doc.remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        }
        tracing::debug!(event = self.event, "document listener removed");
    }
}

/// Owns a set of listeners; dropping it detaches all of them
#[must_use = "listeners are removed as soon as the guard is dropped"]
pub struct ListenerGuard<D: Detach = DocumentListener> {
    listeners: Vec<D>,
}

impl<D: Detach> ListenerGuard<D> {
    pub fn new(listeners: Vec<D>) -> Self {
        Self { listeners }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<D: Detach> Drop for ListenerGuard<D> {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            listener.detach();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    struct Recorded {
        event: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Detach for Recorded {
        fn detach(self) {
            self.log.borrow_mut().push(self.event);
        }
    }

    #[test]
    fn test_drop_detaches_every_listener() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let guard = ListenerGuard::new(vec![
            Recorded { event: "mouseup", log: log.clone() },
            Recorded { event: "mousemove", log: log.clone() },
        ]);
        assert_eq!(guard.len(), 2);
        assert!(log.borrow().is_empty());

        drop(guard);
        assert_eq!(*log.borrow(), vec!["mouseup", "mousemove"]);
    }

    #[test]
    fn test_remount_cycles_do_not_accumulate() {
        let log = Rc::new(RefCell::new(Vec::new()));
        for _ in 0..3 {
            let guard = ListenerGuard::new(vec![Recorded { event: "mouseup", log: log.clone() }]);
            drop(guard);
        }
        // Every registration was detached again
        assert_eq!(log.borrow().len(), 3);
    }
}
