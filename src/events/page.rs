use super::{with_engine, EventListener};
use crate::{dom, WebEngine};
use daysky_core::HostError;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_page(
    engine: &Rc<RefCell<WebEngine>>,
    window: &web::Window,
    document: &web::Document,
) -> Result<Vec<EventListener>, HostError> {
    let mut out = Vec::with_capacity(3);

    let weak = Rc::downgrade(engine);
    let doc = document.clone();
    out.push(EventListener::attach(
        document,
        "visibilitychange",
        move |_| {
            let visible = !doc.hidden();
            with_engine(&weak, |e| e.on_visibility(visible));
        },
    )?);

    let weak = Rc::downgrade(engine);
    let wnd = window.clone();
    out.push(EventListener::attach(window, "resize", move |_| {
        let size = dom::viewport_size(&wnd);
        with_engine(&weak, |e| e.on_resize(size));
    })?);

    // Not every browser exposes the query; the start-time check still applies.
    match dom::reduced_motion_query(window) {
        Some(query) => {
            let weak = Rc::downgrade(engine);
            let q = query.clone();
            out.push(EventListener::attach(&query, "change", move |_| {
                let reduced = q.matches();
                with_engine(&weak, |e| e.on_reduced_motion(reduced));
            })?);
        }
        None => log::debug!("[events] no reduced-motion query"),
    }

    Ok(out)
}
