use crate::dom;
use crate::overlay::OverlayView;
use crate::render;
use instant::Instant;
use showcase_core::{build_instances, FrameInput, SignalBus, Stage, Uniforms};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub stage: Rc<RefCell<Stage>>,
    pub bus: Rc<SignalBus>,
    pub hovered: Rc<Cell<bool>>,

    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub overlays: OverlayView,

    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let (width, height) = (self.canvas.width(), self.canvas.height());
        let input = FrameInput {
            viewport_css_width: dom::viewport_css_width(),
            hovered: self.hovered.get(),
        };

        let (out, uniforms, instances) = {
            let mut stage = self.stage.borrow_mut();
            stage.resize(width as f32, height as f32);
            let out = stage.advance(dt.as_secs_f32(), &self.bus, input);
            let uniforms = Uniforms::from_camera(stage.camera());
            (out, uniforms, build_instances(&stage, &out))
        };

        self.overlays.apply(&self.document, &out.overlays);

        if let Some(gpu) = &mut self.gpu {
            gpu.resize(width, height);
            match gpu.render(&uniforms, &instances) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("[gpu] surface lost; reconfiguring");
                    gpu.reconfigure();
                }
                Err(e) => log::error!("[gpu] render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
