//! GUI input adapter for interactive exploration.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for framebuffer rendering, and egui for the view overlay.

mod app;
pub mod input_state;

pub use app::run_gui;
