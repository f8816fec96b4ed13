use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes frames as binary PPM (P6).
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = BufWriter::new(std::fs::File::create(filepath)?);
        write_ppm(&mut file, buffer)?;
        file.flush()
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

pub fn write_ppm<W: Write>(writer: &mut W, buffer: &PixelBuffer) -> std::io::Result<()> {
    let viewport = buffer.viewport();

    // P6 means binary RGB, then width, height and max colour value
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", viewport.width(), viewport.height())?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())
}
