mod adapters;
mod config;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use adapters::pixel_format::RgbaFrameSink;
pub use config::{ConfigError, ViewerArgs, ViewerConfig};
pub use controllers::cli::render_still::CliRenderController;
pub use controllers::frame::controller::FrameController;
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_frame::ports::colour_map::ColourMap;
pub use crate::core::actions::render_frame::ports::pixel_sink::PixelSink;
pub use crate::core::actions::render_frame::render_frame::{RenderMode, render_frame};
pub use crate::core::camera_control::{
    ButtonState, CameraControlsSnapshot, CameraController, CameraLimits, CameraLimitsError, CameraStepReport, DragAnchor,
    PanKeys,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::{MandelbrotAlgorithm, MandelbrotError, MandelbrotGreyscale, escape_time};
pub use crate::core::view::{CameraState, Scale, ViewTransform};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
