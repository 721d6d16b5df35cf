use std::time::Instant;

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{debug, error, info};
use winit::error::EventLoopError;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{EventLoop, EventLoopWindowTarget};
use winit::keyboard::Key;
use winit::window::Window;

use crate::controllers::interactive::InteractiveController;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::fractals::mandelbrot::colour_maps::modulo_palette::MandelbrotModuloPalette;
use crate::input::gui::app::events::gui::GuiEvent;
use crate::input::gui::app::ports::presenter::{GuiPresenterPort, PresentedFrame};
use crate::input::gui::app::state::GuiAppState;
use crate::input::gui::app::zoom_input::zoom_direction;
use crate::input::gui::config::GuiConfig;

/// Overlay text for the frame on screen, which may lag the live view while
/// a newer render is running.
fn frame_summary(frame: &PresentedFrame) -> [String; 5] {
    let viewport = frame.viewport;

    [
        format!("Real: [{:.6e}, {:.6e}]", viewport.min_x(), viewport.max_x()),
        format!("Imag: [{:.6e}, {:.6e}]", viewport.min_y(), viewport.max_y()),
        format!("Max iterations: {}", frame.max_iterations),
        format!("Shown generation: {}", frame.generation),
        format!("Last render: {} ms", frame.render_duration.as_millis()),
    ]
}

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    controller: InteractiveController,
    ui_state: GuiAppState,
    egui_ctx: Context,
    egui_state: EguiWinitState,
    redraw_pending: bool,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: InteractiveController,
        config: &GuiConfig,
    ) -> Self {
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        Self {
            window,
            presenter,
            controller,
            ui_state: GuiAppState::new(config),
            egui_ctx,
            egui_state,
            redraw_pending: true,
        }
    }

    /// Runs the event loop until the window is closed.
    pub fn run(mut self, event_loop: EventLoop<GuiEvent>) -> Result<(), EventLoopError> {
        info!(
            "starting interactive session at {}x{}",
            self.ui_state.image_size().width(),
            self.ui_state.image_size().height()
        );

        event_loop.run(move |event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => {
                self.redraw_pending = true;
            }
            Event::WindowEvent { ref event, window_id } if window_id == self.window.id() => {
                self.handle_window_event(event, elwt);
            }
            Event::AboutToWait => {
                if self.redraw_pending {
                    self.window.request_redraw();
                }
            }
            _ => {}
        })
    }

    fn handle_window_event(&mut self, event: &WindowEvent, elwt: &EventLoopWindowTarget<GuiEvent>) {
        let response = self.egui_state.on_window_event(self.window, event);

        if response.repaint {
            self.redraw_pending = true;
        }

        match event {
            WindowEvent::CloseRequested => {
                info!("window closed");
                self.controller.shutdown();
                elwt.exit();
            }
            WindowEvent::RedrawRequested => {
                self.redraw(elwt);
            }
            WindowEvent::Resized(size) => {
                self.resize(size.width, size.height);
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                let size = self.window.inner_size();
                self.resize(size.width, size.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let pixel = self
                    .presenter
                    .window_pos_to_pixel((position.x as f32, position.y as f32));
                self.ui_state.set_cursor(pixel);
            }
            WindowEvent::CursorLeft { .. } => {
                self.ui_state.set_cursor(None);
            }
            WindowEvent::MouseWheel { delta, .. } if !response.consumed => {
                if let Some(direction) = zoom_direction(*delta) {
                    if self.ui_state.try_zoom(direction, Instant::now()) {
                        self.redraw_pending = true;
                    }
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Character(text),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } if !response.consumed && text.eq_ignore_ascii_case("r") => {
                self.ui_state.reset_view();
                self.redraw_pending = true;
            }
            _ => {}
        }
    }

    fn redraw(&mut self, elwt: &EventLoopWindowTarget<GuiEvent>) {
        self.redraw_pending = false;

        self.presenter.receive_render_event();

        let egui_output = self.update_ui();
        self.submit_render_request_if_needed();

        self.egui_state
            .handle_platform_output(self.window, egui_output.platform_output.clone());

        if egui_output
            .viewport_output
            .values()
            .any(|v| v.repaint_delay.is_zero())
        {
            self.redraw_pending = true;
        }

        if let Err(err) = self.presenter.render(egui_output, &self.egui_ctx) {
            error!("render error: {}", err);
            self.controller.shutdown();
            elwt.exit();
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.presenter.resize(width, height) {
            error!("failed to resize surface to {}x{}: {}", width, height, err);
            return;
        }

        self.redraw_pending = true;
    }

    fn submit_render_request_if_needed(&mut self) {
        let request = self.ui_state.build_render_request();

        if self.ui_state.should_submit(&request) {
            let generation = self.controller.submit_request(request);
            debug!("submitted generation {}", generation);
            self.ui_state.record_submission(request, generation);
        }
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let presented = self.presenter.presented_frame();
        let error_message = self.presenter.last_error_message().map(str::to_owned);

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Mandelbrot")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 180.0])
                .show(ctx, |ui| {
                    match presented {
                        Some(frame) => {
                            for line in frame_summary(&frame) {
                                ui.label(line);
                            }
                        }
                        None => {
                            ui.label("Waiting for first frame");
                        }
                    }
                    ui.label(format!(
                        "Colours: {}",
                        MandelbrotModuloPalette::new().display_name()
                    ));

                    if ui.button("Reset view").clicked() {
                        self.ui_state.reset_view();
                    }

                    ui.separator();
                    ui.label(format!(
                        "Latest generation: {}",
                        self.ui_state.latest_submitted_generation
                    ));
                    if let Some(message) = &error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }

                    ui.separator();
                    ui.label("Scroll to zoom at the cursor, R to reset");
                });
        })
    }
}
