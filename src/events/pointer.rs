use crate::input;
use showcase_core::{FocusKind, FocusState, Signal, SignalBus, Stage};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub stage: Rc<RefCell<Stage>>,
    pub bus: Rc<SignalBus>,
    pub hovered: Rc<Cell<bool>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
    wire_click(&w);
}

fn event_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> glam::Vec2 {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_ndc(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let ndc = event_ndc(&ev, &w.canvas);
        let hit = {
            let mut stage = w.stage.borrow_mut();
            stage.pointer_mut().set_pointer(ndc.x, ndc.y);
            stage.pick_character(ndc)
        };
        if hit != w.hovered.get() {
            w.hovered.set(hit);
            let cursor = if hit { "pointer" } else { "" };
            _ = w.canvas.style().set_property("cursor", cursor);
        }
    }) as Box<dyn FnMut(_)>);

    // window-level so the parallax keeps tracking over the overlays
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_click(w: &PointerWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let ndc = event_ndc(&ev, &w.canvas);
        let stage = w.stage.borrow();
        if !stage.pick_character(ndc) {
            return;
        }
        // clicking the character toggles its close-up
        let signal = match stage.controller().state() {
            FocusState::CharacterFocus => Signal::ReleaseFocus,
            _ => Signal::focus(FocusKind::Character, None),
        };
        log::info!("[click] character -> {signal:?}");
        w.bus.publish(signal);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
