pub mod cli;
pub mod frame;
pub mod ports;
