pub mod camera_state;
pub mod transform;

pub use camera_state::{CameraState, Scale};
pub use transform::ViewTransform;
