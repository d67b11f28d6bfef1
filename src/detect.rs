use wasm_bindgen::JsValue;
use web_sys::Document;

/// How to decide whether the running client needs the viewport lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Detection {
    /// Substring match for "iPhone" in the user-agent identifier.
    #[default]
    AppleTouchPhone,
    /// Capability check: does the document expose touch-phase event slots?
    /// Broader than [`Detection::AppleTouchPhone`]; covers any touch browser.
    TouchCapable,
}

pub fn is_apple_touch_phone(user_agent: &str) -> bool {
    user_agent.to_ascii_lowercase().contains("iphone")
}

pub fn supports_touch_events(document: &Document) -> bool {
    js_sys::Reflect::has(document.as_ref(), &JsValue::from_str("ontouchstart")).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::is_apple_touch_phone;

    #[test]
    fn matches_iphone_user_agents() {
        assert!(is_apple_touch_phone(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15"
        ));
        assert!(is_apple_touch_phone("IPHONE"));
        assert!(is_apple_touch_phone("something iphone something"));
    }

    #[test]
    fn rejects_other_user_agents() {
        assert!(!is_apple_touch_phone(
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36"
        ));
        assert!(!is_apple_touch_phone("Mozilla/5.0 (iPad; CPU OS 17_0)"));
        assert!(!is_apple_touch_phone(""));
    }
}
