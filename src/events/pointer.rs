use super::{with_engine, EventListener};
use crate::{input, WebEngine};
use daysky_core::HostError;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer(
    engine: &Rc<RefCell<WebEngine>>,
    window: &web::Window,
) -> Result<Vec<EventListener>, HostError> {
    Ok(vec![
        wire_pointermove(engine, window)?,
        wire_touchmove(engine, window)?,
    ])
}

fn wire_pointermove(
    engine: &Rc<RefCell<WebEngine>>,
    window: &web::Window,
) -> Result<EventListener, HostError> {
    let weak = Rc::downgrade(engine);
    EventListener::attach(window, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if let Some(pos) = input::client_point(ev.client_x() as f64, ev.client_y() as f64) {
            with_engine(&weak, |e| e.on_pointer(pos));
        }
    })
}

fn wire_touchmove(
    engine: &Rc<RefCell<WebEngine>>,
    window: &web::Window,
) -> Result<EventListener, HostError> {
    let weak = Rc::downgrade(engine);
    EventListener::attach(window, "touchmove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        let touches = ev.touches();
        let points = (0..touches.length())
            .filter_map(|i| touches.get(i))
            .map(|t| (t.client_x() as f64, t.client_y() as f64));
        if let Some(pos) = input::first_point(points) {
            with_engine(&weak, |e| e.on_pointer(pos));
        }
    })
}
