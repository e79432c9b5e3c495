use crate::constants::*;
use crate::{dom, input, overlay};
use glam::Vec3;
use showcase_core::{FocusKind, Signal, SignalBus};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Bridge the page's window events onto the bus.
pub fn wire_window_signals(bus: &Rc<SignalBus>) {
    let Some(window) = web::window() else {
        return;
    };
    listen(&window, EVENT_FOCUS_CHARACTER, bus, |_| {
        Some(Signal::focus(FocusKind::Character, None))
    });
    listen(&window, EVENT_FOCUS_SHOWREEL, bus, |ev| {
        Some(Signal::focus(FocusKind::Showreel, detail_target(ev)))
    });
    listen(&window, EVENT_FOCUS_PROJECTS, bus, |ev| {
        Some(Signal::focus(FocusKind::Projects, detail_target(ev)))
    });
    listen(&window, EVENT_RESTORE_CAMERA, bus, |_| Some(Signal::RequestIdle));
}

fn listen(
    window: &web::Window,
    name: &'static str,
    bus: &Rc<SignalBus>,
    map: impl Fn(&web::Event) -> Option<Signal> + 'static,
) {
    let bus = bus.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Some(signal) = map(&ev) {
            log::debug!("[signal] {name} -> {signal:?}");
            bus.publish(signal);
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// `event.detail.target` as a point, if present and well-formed.
fn detail_target(ev: &web::Event) -> Option<Vec3> {
    let custom = ev.dyn_ref::<web::CustomEvent>()?;
    let detail = custom.detail();
    if detail.is_undefined() || detail.is_null() {
        return None;
    }
    let target = js_sys::Reflect::get(&detail, &JsValue::from_str("target")).ok()?;
    if !js_sys::Array::is_array(&target) {
        return None;
    }
    let values = js_sys::Array::from(&target)
        .iter()
        .map(|v| v.as_f64())
        .collect::<Option<Vec<f64>>>()?;
    input::target_from_values(&values)
}

/// Overlay buttons: back from the character, close projects, close the video.
pub fn wire_overlay_buttons(document: &web::Document, bus: &Rc<SignalBus>) {
    let back = bus.clone();
    dom::add_click_listener(document, ABOUT_BACK_BUTTON_ID, move || {
        back.publish(Signal::ReleaseFocus);
    });

    let close = bus.clone();
    dom::add_click_listener(document, PROJECTS_CLOSE_BUTTON_ID, move || {
        close.publish(Signal::RequestIdle);
    });

    dom::add_click_listener(document, VIDEO_CLOSE_BUTTON_ID, move || {
        if let Some(doc) = dom::window_document() {
            overlay::hide_video(&doc);
        }
    });
}
