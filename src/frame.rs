use crate::events::{self, EventListener};
use crate::{dom, WebEngine};
use daysky_core::{FrameHost, FrameToken, HostError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Browser side of the engine: animation frames, page signals and the
/// listeners wired for one mount.
pub struct DomHost {
    window: web::Window,
    document: web::Document,
    frame_callback: Option<Closure<dyn FnMut(f64)>>,
    listeners: Vec<EventListener>,
}

impl DomHost {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self {
            window,
            document,
            frame_callback: None,
            listeners: Vec::new(),
        }
    }

    pub fn window(&self) -> &web::Window {
        &self.window
    }

    pub fn document(&self) -> &web::Document {
        &self.document
    }

    pub fn set_frame_callback(&mut self, callback: Closure<dyn FnMut(f64)>) {
        self.frame_callback = Some(callback);
    }

    pub fn add_listeners(&mut self, listeners: impl IntoIterator<Item = EventListener>) {
        self.listeners.extend(listeners);
    }
}

impl FrameHost for DomHost {
    fn now_ms(&self) -> f64 {
        instant::now()
    }

    fn request_frame(&mut self) -> Result<FrameToken, HostError> {
        let tick = self.frame_callback.as_ref().ok_or(HostError::NotReady)?;
        self.window
            .request_animation_frame(tick.as_ref().unchecked_ref())
            .map(FrameToken)
            .map_err(|e| HostError::call("requestAnimationFrame", format!("{:?}", e)))
    }

    fn cancel_frame(&mut self, token: FrameToken) -> Result<(), HostError> {
        self.window
            .cancel_animation_frame(token.0)
            .map_err(|e| HostError::call("cancelAnimationFrame", format!("{:?}", e)))
    }

    fn is_visible(&self) -> bool {
        !self.document.hidden()
    }

    fn prefers_reduced_motion(&self) -> bool {
        dom::prefers_reduced_motion(&self.window)
    }

    fn engine_id(&self) -> Option<String> {
        dom::user_agent(&self.window)
    }

    fn detach_listeners(&mut self) -> Vec<HostError> {
        self.listeners
            .iter_mut()
            .filter_map(|l| l.detach().err())
            .collect()
    }
}

/// Installs the animation frame callback. It holds the engine weakly, so the
/// loop ends on its own once the engine is gone.
pub fn install_frame_loop(engine: &Rc<RefCell<WebEngine>>) {
    let weak = Rc::downgrade(engine);
    let tick = Closure::wrap(Box::new(move |timestamp_ms: f64| {
        events::with_engine(&weak, |e| e.on_frame(timestamp_ms));
    }) as Box<dyn FnMut(f64)>);
    engine.borrow_mut().host_mut().set_frame_callback(tick);
}
