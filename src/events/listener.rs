use daysky_core::HostError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A DOM event listener that can be removed again.
///
/// `detach` only unregisters; the closure lives as long as this value, so a
/// handler that ends up detaching itself is never freed mid-call. Dropping a
/// still-attached listener detaches it first.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
    attached: bool,
}

impl EventListener {
    /// Registers a passive listener.
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<Self, HostError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(true);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| HostError::call("addEventListener", format!("{}: {:?}", kind, e)))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
            attached: true,
        })
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn detach(&mut self) -> Result<(), HostError> {
        if !self.attached {
            return Ok(());
        }
        self.attached = false;
        self.target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref())
            .map_err(|e| {
                HostError::call("removeEventListener", format!("{}: {:?}", self.kind, e))
            })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self.detach();
    }
}
