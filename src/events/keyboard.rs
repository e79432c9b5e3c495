use crate::{dom, overlay};
use showcase_core::{Signal, SignalBus};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Signal a key maps to, if any.
#[inline]
pub fn signal_for_key(key: &str) -> Option<Signal> {
    match key {
        "Escape" => Some(Signal::RequestIdle),
        "Backspace" => Some(Signal::ReleaseFocus),
        _ => None,
    }
}

pub fn wire_global_keydown(bus: Rc<SignalBus>) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.repeat() {
            return;
        }
        let key = ev.key();
        let Some(signal) = signal_for_key(&key) else {
            return;
        };
        if key == "Escape" {
            if let Some(doc) = dom::window_document() {
                overlay::hide_video(&doc);
            }
        }
        bus.publish(signal);
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
