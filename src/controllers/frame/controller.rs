use std::time::{Duration, Instant};

use log::trace;

use crate::config::{ConfigError, ViewerConfig};
use crate::core::actions::render_frame::ports::pixel_sink::PixelSink;
use crate::core::actions::render_frame::render_frame::{RenderMode, render_frame};
use crate::core::camera_control::controller::{CameraController, CameraStepReport};
use crate::core::camera_control::controls::CameraControlsSnapshot;
use crate::core::camera_control::limits::CameraLimits;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotGreyscale;
use crate::core::view::camera_state::CameraState;
use crate::core::view::transform::ViewTransform;

/// Owns the camera for the lifetime of the render loop and drives one frame per call:
/// input first, then a full re-render under the updated view.
#[derive(Debug)]
pub struct FrameController {
    viewport: Viewport,
    camera: CameraState,
    camera_controller: CameraController,
    algorithm: MandelbrotAlgorithm,
    colour_map: MandelbrotGreyscale,
    mode: RenderMode,
    last_report: CameraStepReport,
    last_render_duration: Option<Duration>,
    frames_rendered: u64,
}

impl FrameController {
    pub fn new(config: &ViewerConfig) -> Result<Self, ConfigError> {
        Self::with_limits(config, CameraLimits::default())
    }

    pub fn with_limits(config: &ViewerConfig, limits: CameraLimits) -> Result<Self, ConfigError> {
        config.validate_with(&limits)?;

        let viewport = Viewport::new(config.width, config.height)?;
        let camera = config.camera();
        let algorithm = MandelbrotAlgorithm::new(ViewTransform::new(&camera, viewport), config.max_iterations)?;
        let mode = if config.parallel {
            RenderMode::Parallel
        } else {
            RenderMode::Sequential
        };

        Ok(Self {
            viewport,
            camera,
            camera_controller: CameraController::new(camera, limits),
            algorithm,
            colour_map: MandelbrotGreyscale::new(config.max_iterations),
            mode,
            last_report: CameraStepReport::default(),
            last_render_duration: None,
            frames_rendered: 0,
        })
    }

    /// Applies one frame of input and redraws every pixel into `sink`.
    ///
    /// Returns `Ok(false)` once the user asked to exit; nothing is drawn for that frame.
    pub fn on_frame<S: PixelSink>(
        &mut self,
        elapsed_seconds: f64,
        controls: &CameraControlsSnapshot,
        sink: &mut S,
    ) -> Result<bool, S::Failure> {
        self.last_report = self
            .camera_controller
            .step(&mut self.camera, controls, elapsed_seconds);

        if self.last_report.exit_requested {
            return Ok(false);
        }

        trace!(
            "frame {}: center={:?} scale={:?}",
            self.frames_rendered,
            self.camera.center,
            self.camera.scale
        );

        self.render(sink)?;
        Ok(true)
    }

    /// Redraws the current view without consuming input.
    pub fn render<S: PixelSink>(&mut self, sink: &mut S) -> Result<(), S::Failure> {
        self.algorithm.set_transform(self.transform());

        let start = Instant::now();
        render_frame(self.viewport, &self.algorithm, &self.colour_map, self.mode, sink)?;

        self.last_render_duration = Some(start.elapsed());
        self.frames_rendered += 1;
        Ok(())
    }

    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        ViewTransform::new(&self.camera, self.viewport)
    }

    #[must_use]
    pub fn camera(&self) -> CameraState {
        self.camera
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.algorithm.max_iterations()
    }

    #[must_use]
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    #[must_use]
    pub fn last_report(&self) -> CameraStepReport {
        self.last_report
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}
