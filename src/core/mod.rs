pub mod actions;
pub mod camera_control;
pub mod data;
pub mod fractals;
pub mod view;
