use std::time::Instant;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorIcon, WindowBuilder},
};

use glam::Vec2;
use showcase_core::{
    build_instances, FocusKind, FocusState, FrameInput, OverlayFlags, ProceduralAssets,
    SceneConfig, SceneError, Signal, SignalBus, Stage, Uniforms,
};

mod gpu;

/// `name=value` arguments (a leading `--` is ignored) applied over the defaults.
fn config_from_args(args: &[String]) -> SceneConfig {
    let mut config = SceneConfig::default();
    config.apply_pairs(
        args.iter()
            .filter_map(|a| a.trim_start_matches("--").split_once('=')),
    );
    config
}

fn signal_for_key(code: KeyCode, state: FocusState) -> Option<Signal> {
    match code {
        KeyCode::KeyC => Some(match state {
            FocusState::CharacterFocus => Signal::ReleaseFocus,
            _ => Signal::focus(FocusKind::Character, None),
        }),
        KeyCode::KeyS => Some(Signal::focus(FocusKind::Showreel, None)),
        KeyCode::KeyP => Some(Signal::focus(FocusKind::Projects, None)),
        KeyCode::Backspace => Some(Signal::ReleaseFocus),
        KeyCode::Escape => Some(Signal::RequestIdle),
        _ => None,
    }
}

fn cursor_ndc(x: f64, y: f64, width: u32, height: u32) -> Vec2 {
    if width == 0 || height == 0 {
        return Vec2::ZERO;
    }
    let u = (x / width as f64).clamp(0.0, 1.0) as f32;
    let v = (y / height as f64).clamp(0.0, 1.0) as f32;
    Vec2::new(u * 2.0 - 1.0, 1.0 - v * 2.0)
}

// No DOM here, so overlay changes go to the log.
fn log_overlays(prev: &OverlayFlags, next: &OverlayFlags) {
    if prev.about_visible != next.about_visible {
        log::info!("[overlay] about visible={}", next.about_visible);
    }
    if prev.projects_overlay_visible != next.projects_overlay_visible {
        log::info!("[overlay] projects visible={}", next.projects_overlay_visible);
    }
    if next.showreel_ready {
        log::info!("[overlay] showreel ready; video would open");
    }
    if prev.loading_visible != next.loading_visible {
        log::info!("[overlay] loading visible={} ({:.0}%)", next.loading_visible, next.loading_percent);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = config_from_args(&args);
    log::info!("[config] {:?}", config);

    let assets = ProceduralAssets;
    let bus = SignalBus::new();
    let mut stage = Stage::new(config, &assets);
    // desktop has no orientation sensor
    stage
        .pointer_mut()
        .resolve_permission(Err(SceneError::UnsupportedSensorApi));

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Showcase stage (native)")
        .build(&event_loop)?;

    let mut state = pollster::block_on(gpu::GpuState::new(&window))?;
    let (w, h) = state.size();
    stage.resize(w as f32, h as f32);

    log::info!("keys: C character, S showreel, P projects, Backspace release, Escape idle");

    let mut last_frame = Instant::now();
    let mut hovered = false;
    let mut overlays = OverlayFlags::default();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => {
            state.resize(size);
            let (w, h) = state.size();
            stage.resize(w as f32, h as f32);
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(code),
                            state: ElementState::Pressed,
                            repeat: false,
                            ..
                        },
                    ..
                },
            ..
        } => {
            if let Some(signal) = signal_for_key(code, stage.controller().state()) {
                log::info!("[key] {:?} -> {:?}", code, signal);
                bus.publish(signal);
            }
        }
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => {
            let (w, h) = state.size();
            let ndc = cursor_ndc(position.x, position.y, w, h);
            stage.pointer_mut().set_pointer(ndc.x, ndc.y);
            let hit = stage.pick_character(ndc);
            if hit != hovered {
                hovered = hit;
                state.window.set_cursor_icon(if hit {
                    CursorIcon::Pointer
                } else {
                    CursorIcon::Default
                });
            }
        }
        Event::WindowEvent {
            event:
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                },
            ..
        } => {
            if hovered {
                let signal = match stage.controller().state() {
                    FocusState::CharacterFocus => Signal::ReleaseFocus,
                    _ => Signal::focus(FocusKind::Character, None),
                };
                log::info!("[click] character -> {:?}", signal);
                bus.publish(signal);
            }
        }
        Event::AboutToWait => {
            let now = Instant::now();
            let dt = (now - last_frame).as_secs_f32();
            last_frame = now;

            let scale = state.window.scale_factor() as f32;
            let input = FrameInput {
                viewport_css_width: state.size().0 as f32 / scale.max(f32::EPSILON),
                hovered,
            };
            let out = stage.advance(dt, &bus, input);
            log_overlays(&overlays, &out.overlays);
            overlays = out.overlays;

            let uniforms = Uniforms::from_camera(stage.camera());
            let instances = build_instances(&stage, &out);
            match state.render(&uniforms, &instances) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    state.resize(state.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("[gpu] {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
