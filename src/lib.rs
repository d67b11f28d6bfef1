//! Pins a page's viewport meta tag to a non-zooming configuration on Apple
//! touch-phone browsers, re-applying it on every touch-phase event so pinch
//! gestures never trigger an automatic zoom.
//!
//! With the default `auto` feature the crate activates itself when the wasm
//! module is instantiated. Library consumers can instead build a
//! [`ViewportScaleLocker`] around any document handle and drive it directly.

use wasm_bindgen::JsValue;
#[cfg(feature = "auto")]
use wasm_bindgen::prelude::wasm_bindgen;

mod detect;
mod locker;
mod policy;

#[cfg(feature = "yew")]
mod components;

pub use detect::{Detection, is_apple_touch_phone, supports_touch_events};
pub use locker::ViewportScaleLocker;
pub use policy::{VIEWPORT_POLICY, apply_fixed_viewport};

#[cfg(feature = "yew")]
pub use components::ViewportScaleLock;

fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Inspect the real browser environment and, on an iPhone user agent, lock
/// the viewport for the lifetime of the page. No-op everywhere else, and on
/// hosts without a window or document.
pub fn detect_and_activate() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let user_agent = window.navigator().user_agent().unwrap_or_default();
    let mut locker = ViewportScaleLocker::new(document);
    if locker.activate(Detection::AppleTouchPhone, &user_agent) {
        clog("viewport-scale-lock: active");
        locker.forget();
    }
}

#[cfg(feature = "auto")]
#[wasm_bindgen(start)]
pub fn start() {
    detect_and_activate();
}
