use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlMetaElement};

/// Fixed scaling policy written into every viewport meta tag.
pub const VIEWPORT_POLICY: &str = "width=device-width, initial-scale=1.0, maximum-scale=1.0";

/// Overwrite the `content` of every `meta[name="viewport"]` in `document`
/// with [`VIEWPORT_POLICY`]. Idempotent; a document without a viewport meta
/// tag is left untouched.
pub fn apply_fixed_viewport(document: &Document) {
    apply_viewport_content(document, VIEWPORT_POLICY);
}

fn apply_viewport_content(document: &Document, content: &str) {
    let metas = document.get_elements_by_tag_name("meta");
    for i in 0..metas.length() {
        let Some(el) = metas.item(i) else { continue };
        if let Some(meta) = el.dyn_ref::<HtmlMetaElement>() {
            if meta.name() == "viewport" {
                meta.set_content(content);
            }
        }
    }
}
