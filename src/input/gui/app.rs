//! Main GUI application loop.

use std::error::Error;
use std::time::Instant;

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

use crate::config::ViewerConfig;
use crate::controllers::frame::controller::FrameController;
use crate::input::gui::input_state::FrameInputState;
use crate::presenters::pixels::presenter::PixelsPresenter;

struct App {
    presenter: PixelsPresenter,
    controller: FrameController,
    input: FrameInputState,
    last_frame: Instant,
    focused: bool,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl App {
    fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        controller: FrameController,
    ) -> Result<Self, pixels::Error> {
        let presenter = PixelsPresenter::new(window, controller.viewport())?;
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Ok(Self {
            presenter,
            controller,
            input: FrameInputState::default(),
            last_frame: Instant::now(),
            focused: true,
            egui_ctx,
            egui_state,
        })
    }

    /// Runs one frame: input, full re-render, overlay, present. Returns whether to keep running.
    fn frame(&mut self, window: &Window) -> bool {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;

        let suppressed = !self.focused || self.egui_ctx.wants_pointer_input() || self.egui_ctx.wants_keyboard_input();
        let controls = self.input.snapshot(suppressed);

        let running = match self.presenter.frame_sink() {
            Ok(mut sink) => match self.controller.on_frame(elapsed, &controls, &mut sink) {
                Ok(running) => running,
                Err(e) => {
                    error!("Render error: {e}");
                    return false;
                }
            },
            Err(e) => {
                error!("Framebuffer error: {e}");
                return false;
            }
        };

        if !running {
            return false;
        }

        let mut egui_output = self.update_ui(window);
        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state.handle_platform_output(window, platform_output);

        if let Err(e) = self.presenter.render(egui_output, &self.egui_ctx) {
            error!("Present error: {e}");
            return false;
        }

        true
    }

    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let controller = &self.controller;

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("View")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| {
                    let camera = controller.camera();
                    ui.label(format!("Center: {:.6} {:+.6}i", camera.center.real, camera.center.imag));
                    ui.label(format!("Scale: {:.3e} x {:.3e}", camera.scale.x, camera.scale.y));
                    ui.label(format!("Max iterations: {}", controller.max_iterations()));
                    if let Some(duration) = controller.last_render_duration() {
                        ui.label(format!("Last render: {} ms", duration.as_millis()));
                    }
                    if controller.last_report().scale_clamped {
                        ui.colored_label(egui::Color32::LIGHT_RED, "Zoom limit reached");
                    }
                });
        })
    }

    fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.egui_state.on_window_event(window, event).consumed
    }
}

/// Opens a window of `width * pixel_scale` by `height * pixel_scale` and renders the
/// view every frame until the window is closed or Escape is pressed.
pub fn run_gui(config: &ViewerConfig) -> Result<(), Box<dyn Error>> {
    let controller = FrameController::new(config)?;
    let (window_width, window_height) = config.window_size()?;
    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Viewer")
            .with_inner_size(LogicalSize::new(f64::from(window_width), f64::from(window_height)))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let mut app = App::new(window, &event_loop, controller)?;

    info!(
        "Window {}x{} at pixel scale {}",
        config.width, config.height, config.pixel_scale
    );

    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { ref event, window_id } if window_id == window.id() => {
            let egui_consumed = app.handle_window_event(window, event);

            match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::RedrawRequested => {
                    if !app.frame(window) {
                        elwt.exit();
                    }
                }
                WindowEvent::Resized(size) => {
                    if let Err(e) = app.presenter.resize(size.width, size.height) {
                        error!("Resize error: {e}");
                        elwt.exit();
                    }
                }
                WindowEvent::Focused(focused) => {
                    app.focused = *focused;
                    if !focused {
                        app.input.reset();
                    }
                }
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(key_code),
                            state,
                            ..
                        },
                    ..
                } if !egui_consumed => {
                    app.input.handle_key_event(*key_code, *state);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    // releases always go through so a drag cannot get stuck
                    if !egui_consumed || *state == winit::event::ElementState::Released {
                        app.input.handle_mouse_button(*button, *state);
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let point = app.presenter.window_to_viewport(*position);
                    app.input.handle_cursor_moved(point);
                }
                WindowEvent::MouseWheel { delta, .. } if !egui_consumed => {
                    app.input.handle_mouse_wheel(*delta);
                }
                _ => {}
            }
        }
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;

    Ok(())
}
