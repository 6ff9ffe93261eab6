use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport size in CSS pixels (zero if the window reports nothing usable).
pub fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

#[inline]
pub fn user_agent(window: &web::Window) -> Option<String> {
    window.navigator().user_agent().ok()
}

#[inline]
pub fn reduced_motion_query(window: &web::Window) -> Option<web::MediaQueryList> {
    window
        .match_media(crate::constants::REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
}

#[inline]
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    reduced_motion_query(window)
        .map(|q| q.matches())
        .unwrap_or(false)
}

/// Creates a `div` with a class and inline base style.
pub fn create_div(
    document: &web::Document,
    class: &str,
    style: &str,
) -> Result<web::HtmlElement, wasm_bindgen::JsValue> {
    let el = document
        .create_element("div")?
        .dyn_into::<web::HtmlElement>()
        .map_err(wasm_bindgen::JsValue::from)?;
    el.set_class_name(class);
    el.set_attribute("style", style)?;
    _ = el.set_attribute("aria-hidden", "true");
    Ok(el)
}

/// Style writes are best-effort; a rejected value just leaves the old one.
#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    _ = el.style().set_property(prop, value);
}
