use crate::constants::FALLBACK_CLASS;
use web_sys as web;

// The static gradient a page puts inside the mount element. It stays visible
// whenever the engine is not painting.

fn fallback(root: &web::HtmlElement) -> Option<web::Element> {
    root.query_selector(&format!(".{}", FALLBACK_CLASS))
        .ok()
        .flatten()
}

#[inline]
pub fn show(root: &web::HtmlElement) {
    if let Some(el) = fallback(root) {
        _ = el.class_list().remove_1("hidden");
        // fallback for pages without a .hidden rule
        _ = el.remove_attribute("hidden");
    }
}

#[inline]
pub fn hide(root: &web::HtmlElement) {
    if let Some(el) = fallback(root) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("hidden", "");
    }
}

#[inline]
pub fn is_hidden(root: &web::HtmlElement) -> bool {
    fallback(root)
        .map(|el| el.class_list().contains("hidden") || el.has_attribute("hidden"))
        .unwrap_or(false)
}
