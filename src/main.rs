use std::path::PathBuf;

use clap::Parser;
use mandelbrot_viewer::{CliRenderController, PpmFilePresenter, ViewerArgs, ViewerConfig};

/// Render one frame of the Mandelbrot set to a PPM file
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    viewer: ViewerArgs,

    /// Where to write the image
    #[arg(short, long, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ViewerConfig::from(cli.viewer);

    if let Some(parent) = cli.output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut controller = CliRenderController::new(PpmFilePresenter::new());
    controller.generate(&config)?;
    controller.write(&cli.output)?;

    Ok(())
}
