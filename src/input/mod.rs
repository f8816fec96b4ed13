//! Input adapters for the viewer.
//!
//! This module contains adapters that receive input from the windowing system
//! and translate it into per-frame camera controls.

#[cfg(feature = "gui")]
pub mod gui;
