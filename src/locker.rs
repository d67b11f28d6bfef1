use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event};

use crate::detect::{self, Detection};
use crate::policy;

const TOUCH_PHASES: [&str; 3] = ["touchstart", "touchmove", "touchend"];

/// Keeps a document's viewport meta tag(s) pinned to the fixed policy.
///
/// The document is injected rather than read from the ambient global, so the
/// locker can run against any document handle. Once activated it re-applies
/// the policy on every touch-phase event; listeners live until the locker is
/// dropped, or forever after [`ViewportScaleLocker::forget`].
pub struct ViewportScaleLocker {
    document: Document,
    listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
}

impl ViewportScaleLocker {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            listeners: Vec::new(),
        }
    }

    /// One immediate policy write. Safe to call any number of times.
    pub fn apply(&self) {
        policy::apply_fixed_viewport(&self.document);
    }

    /// Evaluate `detection` and, on a match, apply the policy once and
    /// subscribe to the three touch phases. Returns whether the locker is
    /// active. A non-matching client gets no writes and no subscriptions;
    /// an already active locker is left as-is.
    pub fn activate(&mut self, detection: Detection, user_agent: &str) -> bool {
        if !self.listeners.is_empty() {
            return true;
        }
        let matched = match detection {
            Detection::AppleTouchPhone => detect::is_apple_touch_phone(user_agent),
            Detection::TouchCapable => detect::supports_touch_events(&self.document),
        };
        if !matched {
            return false;
        }
        self.apply();
        for phase in TOUCH_PHASES {
            let document = self.document.clone();
            let cb = Closure::wrap(Box::new(move |_event: Event| {
                policy::apply_fixed_viewport(&document);
            }) as Box<dyn FnMut(Event)>);
            self.document
                .add_event_listener_with_callback(phase, cb.as_ref().unchecked_ref())
                .ok();
            self.listeners.push((phase, cb));
        }
        true
    }

    /// Number of live touch-phase subscriptions (0 or 3).
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Leak the listener closures so the policy holds for the rest of the
    /// page's lifetime. Dropping an active locker without calling this
    /// invalidates its callbacks instead.
    pub fn forget(mut self) {
        for (_, cb) in std::mem::take(&mut self.listeners) {
            cb.forget();
        }
    }
}

impl Drop for ViewportScaleLocker {
    fn drop(&mut self) {
        for (phase, cb) in &self.listeners {
            let _ = self
                .document
                .remove_event_listener_with_callback(phase, cb.as_ref().unchecked_ref());
        }
    }
}
