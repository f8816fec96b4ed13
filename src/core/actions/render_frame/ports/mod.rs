pub mod colour_map;
pub mod pixel_sink;
