use showcase_core::{SceneError, Stage};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn wire_orientation(stage: Rc<RefCell<Stage>>) {
    let Some(window) = web::window() else {
        return;
    };
    if !has_orientation_api(&window) {
        log::info!("[gyro] {}", SceneError::UnsupportedSensorApi);
        stage
            .borrow_mut()
            .pointer_mut()
            .resolve_permission(Err(SceneError::UnsupportedSensorApi));
        return;
    }

    let stage_orient = stage.clone();
    let on_orientation = Closure::wrap(Box::new(move |ev: web::DeviceOrientationEvent| {
        stage_orient
            .borrow_mut()
            .pointer_mut()
            .set_orientation(ev.beta(), ev.gamma());
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "deviceorientation",
        on_orientation.as_ref().unchecked_ref(),
        &opts,
    );
    on_orientation.forget();

    wire_permission_on_first_touch(&window, stage);
}

fn has_orientation_api(window: &web::Window) -> bool {
    js_sys::Reflect::get(window, &JsValue::from_str("DeviceOrientationEvent"))
        .map(|v| !v.is_undefined())
        .unwrap_or(false)
}

/// iOS only delivers orientation after `DeviceOrientationEvent.requestPermission()`
/// resolves, and only from a user gesture; ask on the first touch.
fn wire_permission_on_first_touch(window: &web::Window, stage: Rc<RefCell<Stage>>) {
    let Some(document) = window.document() else {
        return;
    };
    let on_touch = Closure::wrap(Box::new(move || {
        if !stage.borrow_mut().pointer_mut().begin_permission_request() {
            return;
        }
        let stage = stage.clone();
        match request_permission_promise() {
            Some(promise) => spawn_local(async move {
                let outcome = match JsFuture::from(promise).await {
                    Ok(v) if v.as_string().as_deref() == Some("granted") => Ok(()),
                    _ => Err(SceneError::PermissionDenied),
                };
                log::info!("[gyro] permission {:?}", outcome);
                stage.borrow_mut().pointer_mut().resolve_permission(outcome);
            }),
            // no prompt on this platform; events already flow
            None => stage.borrow_mut().pointer_mut().resolve_permission(Ok(())),
        }
    }) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    opts.set_passive(true);
    _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "touchend",
        on_touch.as_ref().unchecked_ref(),
        &opts,
    );
    on_touch.forget();
}

fn request_permission_promise() -> Option<js_sys::Promise> {
    let window = web::window()?;
    let ctor = js_sys::Reflect::get(&window, &JsValue::from_str("DeviceOrientationEvent")).ok()?;
    let request = js_sys::Reflect::get(&ctor, &JsValue::from_str("requestPermission")).ok()?;
    let request: js_sys::Function = request.dyn_into().ok()?;
    request.call0(&ctor).ok()?.dyn_into::<js_sys::Promise>().ok()
}
