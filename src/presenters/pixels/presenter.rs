use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;
use crate::input::gui::app::events::gui::GuiEvent;
use crate::input::gui::app::ports::presenter::{GuiPresenterPort, PresentedFrame};
use crate::presenters::pixels::adapter::PixelsAdapter;
use crate::presenters::pixels::frame_tracker::{FrameTracker, copy_rgb_into_rgba};
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use std::sync::Arc;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

/// Shows frames in a pixels buffer fixed at the image size.
///
/// The surface follows the window; pixels scales the buffer onto it, so a
/// resize never triggers a new render.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    tracker: FrameTracker,
    surface_width: u32,
    surface_height: u32,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        image_size: ImageSize,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let mut pixels = Pixels::new(image_size.width(), image_size.height(), surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        // black until the first frame lands
        for pixel in pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }

        Ok(Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            tracker: FrameTracker::new(image_size),
            surface_width: size.width,
            surface_height: size.height,
        })
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    fn receive_render_event(&mut self) -> bool {
        let Some(event) = self.adapter.take_render_event() else {
            return false;
        };

        let error_before = self.tracker.last_error_message().map(str::to_owned);

        match self.tracker.accept(event) {
            Some(pixel_buffer) => {
                copy_rgb_into_rgba(pixel_buffer.buffer(), self.pixels.frame_mut());
                true
            }
            None => self.tracker.last_error_message() != error_before.as_deref(),
        }
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.surface_width, self.surface_height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the fractal underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.pixels.resize_surface(width, height)?;
        self.surface_width = width;
        self.surface_height = height;

        Ok(())
    }

    fn window_pos_to_pixel(&self, position: (f32, f32)) -> Option<Point> {
        let (x, y) = self.pixels.window_pos_to_pixel(position).ok()?;

        Some(Point {
            x: i32::try_from(x).ok()?,
            y: i32::try_from(y).ok()?,
        })
    }

    fn presented_frame(&self) -> Option<PresentedFrame> {
        self.tracker.presented()
    }

    fn last_error_message(&self) -> Option<&str> {
        self.tracker.last_error_message()
    }
}
