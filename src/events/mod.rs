mod listener;
mod page;
mod pointer;

pub use listener::EventListener;

use crate::WebEngine;
use daysky_core::HostError;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Runs `f` on the engine if it is still alive and not already borrowed.
pub(crate) fn with_engine(engine: &Weak<RefCell<WebEngine>>, f: impl FnOnce(&mut WebEngine)) {
    let Some(rc) = engine.upgrade() else {
        return;
    };
    match rc.try_borrow_mut() {
        Ok(mut e) => f(&mut e),
        Err(_) => log::debug!("[events] engine busy, event dropped"),
    };
}

/// Wires every host signal the engine reacts to and hands the listeners to
/// the host, which owns them until the engine drops.
pub fn wire_engine_listeners(engine: &Rc<RefCell<WebEngine>>) -> Result<(), HostError> {
    let (window, document) = {
        let e = engine.borrow();
        (e.host().window().clone(), e.host().document().clone())
    };
    let mut listeners = Vec::new();
    listeners.extend(pointer::wire_pointer(engine, &window)?);
    listeners.extend(page::wire_page(engine, &window, &document)?);
    log::info!(
        "[events] attached {}",
        listeners
            .iter()
            .map(EventListener::kind)
            .collect::<Vec<_>>()
            .join(",")
    );
    engine.borrow_mut().host_mut().add_listeners(listeners);
    Ok(())
}
