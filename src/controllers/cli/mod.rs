pub mod render_still;

pub use render_still::CliRenderController;
