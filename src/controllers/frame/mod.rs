pub mod controller;

pub use controller::FrameController;
