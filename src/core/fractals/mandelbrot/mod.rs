pub mod algorithm;
pub mod colour_map;
pub mod errors;

pub use algorithm::{MandelbrotAlgorithm, escape_time};
pub use colour_map::MandelbrotGreyscale;
pub use errors::MandelbrotError;
