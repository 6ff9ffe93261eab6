#![cfg(target_arch = "wasm32")]
use daysky_core::{seed_from_draws, Engine, EngineConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod fallback;
mod frame;
mod input;
mod style;
mod surface;

use frame::DomHost;
use surface::DomSurface;

pub(crate) type WebEngine = Engine<DomSurface, DomHost>;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("daysky-web loaded");
}

/// A mounted sky. Inert when the mount was refused or failed.
#[wasm_bindgen]
pub struct EngineHandle {
    engine: Option<Rc<RefCell<WebEngine>>>,
}

impl EngineHandle {
    fn inert() -> Self {
        Self { engine: None }
    }
}

#[wasm_bindgen]
impl EngineHandle {
    /// Cancels the next frame, detaches listeners and removes the layer.
    /// Safe to call any number of times.
    pub fn stop(&mut self) {
        let Some(engine) = self.engine.take() else {
            return;
        };
        engine.borrow_mut().stop();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.engine
            .as_ref()
            .and_then(|e| e.try_borrow().ok().map(|e| e.is_active()))
            .unwrap_or(false)
    }

    #[wasm_bindgen(getter)]
    pub fn tier(&self) -> Option<String> {
        self.engine
            .as_ref()
            .and_then(|e| e.try_borrow().ok().map(|e| e.tier().as_str().to_string()))
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Starts the ambient sky inside `surface`.
///
/// Never throws: a missing surface, an element that already hosts a sky,
/// disabled config, reduced motion or any setup failure leaves the page as it
/// was and returns an inert handle.
#[wasm_bindgen(js_name = startSky)]
pub fn start_sky(surface: Option<web::HtmlElement>, config: JsValue) -> EngineHandle {
    let Some(root) = surface else {
        log::warn!("[sky] no surface element, not starting");
        return EngineHandle::inert();
    };
    let config = decode_config(config);
    match mount(root, config) {
        Ok(Some(engine)) => EngineHandle {
            engine: Some(engine),
        },
        Ok(None) => EngineHandle::inert(),
        Err(e) => {
            log::error!("[sky] mount failed: {:?}", e);
            EngineHandle::inert()
        }
    }
}

/// `startSky` on the element with id `element_id`.
#[wasm_bindgen(js_name = mountSky)]
pub fn mount_sky(element_id: &str, config: JsValue) -> EngineHandle {
    let el = dom::window_document()
        .and_then(|d| d.get_element_by_id(element_id))
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    if el.is_none() {
        log::warn!("[sky] no element #{}", element_id);
    }
    start_sky(el, config)
}

fn decode_config(value: JsValue) -> EngineConfig {
    if value.is_undefined() || value.is_null() {
        return EngineConfig::default();
    }
    match serde_wasm_bindgen::from_value::<EngineConfig>(value) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[config] unreadable, using defaults: {}", e);
            EngineConfig::default()
        }
    }
}

fn mount(
    root: web::HtmlElement,
    config: EngineConfig,
) -> anyhow::Result<Option<Rc<RefCell<WebEngine>>>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let seed = config
        .seed
        .unwrap_or_else(|| seed_from_draws(js_sys::Math::random(), js_sys::Math::random()));
    let surface = DomSurface::new(root)?;
    let host = DomHost::new(window, document);
    let engine = Rc::new(RefCell::new(Engine::new(surface, host, config)));

    frame::install_frame_loop(&engine);
    let started = engine.borrow_mut().start(seed);
    if let Err(e) = started {
        log::info!("[sky] not started: {}", e);
        return Ok(None);
    }
    if let Err(e) = events::wire_engine_listeners(&engine) {
        engine.borrow_mut().stop();
        return Err(e.into());
    }
    Ok(Some(engine))
}
