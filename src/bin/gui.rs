use clap::Parser;
use mandelbrot_viewer::{ViewerArgs, ViewerConfig};

/// Explore the Mandelbrot set interactively
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    viewer: ViewerArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ViewerConfig::from(Cli::parse().viewer);
    mandelbrot_viewer::run_gui(&config)
}
