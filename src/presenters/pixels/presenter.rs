use crate::adapters::pixel_format::RgbaFrameSink;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::{Pixels, SurfaceTexture, wgpu};
use winit::dpi::PhysicalPosition;
use winit::window::Window;

/// Presents the viewport through a `pixels` framebuffer scaled up to the window,
/// with the egui overlay drawn on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    viewport: Viewport,
    surface_width: u32,
    surface_height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, viewport: Viewport) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(viewport.width(), viewport.height(), surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            viewport,
            surface_width: size.width,
            surface_height: size.height,
        })
    }

    /// Sink that writes straight into the framebuffer for the next present.
    pub fn frame_sink(&mut self) -> Result<RgbaFrameSink<'_>, PixelBufferError> {
        RgbaFrameSink::new(self.pixels.frame_mut(), self.viewport)
    }

    /// Maps a physical window position to viewport pixels. Positions outside the
    /// framebuffer are kept (not clamped) so drags past the edge keep tracking.
    #[must_use]
    pub fn window_to_viewport(&self, position: PhysicalPosition<f64>) -> Point {
        let (x, y) = match self.pixels.window_pos_to_pixel((position.x as f32, position.y as f32)) {
            Ok((x, y)) => (x as isize, y as isize),
            Err((x, y)) => (x, y),
        };

        Point {
            x: x as i32,
            y: y as i32,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.surface_width = width;
        self.surface_height = height;
        self.pixels.resize_surface(width, height)
    }

    /// Presents the last frame written through [`Self::frame_sink`] with `overlay` on top.
    pub fn render(&mut self, overlay: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_width, self.surface_height],
            pixels_per_point: egui_ctx.pixels_per_point(),
        };
        let primitives = egui_ctx.tessellate(overlay.shapes, screen.pixels_per_point);
        let textures = overlay.textures_delta;
        let overlay_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, target, context| {
            context.scaling_renderer.render(encoder, target);

            for (id, image) in &textures.set {
                overlay_renderer.update_texture(&context.device, &context.queue, *id, image);
            }
            overlay_renderer.update_buffers(&context.device, &context.queue, encoder, &primitives, &screen);

            paint_overlay(overlay_renderer, encoder, target, &primitives, &screen);

            for id in &textures.free {
                overlay_renderer.free_texture(id);
            }

            Ok(())
        })
    }
}

/// Draws tessellated egui output over whatever `target` already holds.
fn paint_overlay(
    renderer: &EguiRenderer,
    encoder: &mut wgpu::CommandEncoder,
    target: &wgpu::TextureView,
    primitives: &[egui::ClippedPrimitive],
    screen: &egui_wgpu::ScreenDescriptor,
) {
    let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("view overlay"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Load,
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        ..Default::default()
    });

    renderer.render(&mut pass, primitives, screen);
}
