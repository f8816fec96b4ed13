use std::error::Error;
use std::path::Path;

use log::{info, warn};

use crate::config::ViewerConfig;
use crate::controllers::frame::controller::FrameController;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Renders a single frame of a fixed view and hands it to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, config: &ViewerConfig) -> Result<(), Box<dyn Error>> {
        let mut controller = FrameController::new(config)?;
        let mut buffer = PixelBuffer::new(controller.viewport());

        info!("Rendering Mandelbrot set...");
        info!("Image size: {}x{}", config.width, config.height);
        info!("Max iterations: {}", config.max_iterations);
        info!("Center: ({}, {}), scale: {:?}", config.center.real, config.center.imag, config.scale);

        controller.render(&mut buffer)?;

        if let Some(duration) = controller.last_render_duration() {
            info!("Duration: {:?} ({:?})", duration, controller.mode());
        }

        self.buffer = Some(buffer);
        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Fails without touching `filepath` when no frame has been generated yet.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();
        let Some(buffer) = &self.buffer else {
            warn!("No frame generated, not writing {}", filepath.display());
            return Err(std::io::Error::other("no frame has been generated"));
        };

        self.presenter.present(buffer, filepath)?;
        info!("Saved to {}", filepath.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPresenter {
        presented: RefCell<Vec<(usize, String)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.presented
                .borrow_mut()
                .push((buffer.buffer().len(), filepath.as_ref().display().to_string()));
            Ok(())
        }
    }

    #[test]
    fn write_before_generate_fails_and_presents_nothing() {
        let presenter = RecordingPresenter::default();
        let controller = CliRenderController::new(&presenter);

        let result = controller.write("unused.ppm");

        assert_eq!(result.unwrap_err().kind(), std::io::ErrorKind::Other);

        assert!(presenter.presented.borrow().is_empty());
    }

    #[test]
    fn generate_then_write_presents_full_frame() {
        let presenter = RecordingPresenter::default();
        let mut controller = CliRenderController::new(&presenter);
        let config = ViewerConfig {
            width: 20,
            height: 10,
            ..ViewerConfig::default()
        };

        controller.generate(&config).unwrap();
        controller.write("frame.ppm").unwrap();

        assert_eq!(
            presenter.presented.borrow().as_slice(),
            &[(20 * 10 * 3, "frame.ppm".to_string())]
        );
        assert_eq!(
            controller.buffer().unwrap().pixel(Point { x: 10, y: 5 }),
            Some(Colour::grey(128))
        );
    }

    #[test]
    fn generate_rejects_invalid_config() {
        let presenter = RecordingPresenter::default();
        let mut controller = CliRenderController::new(&presenter);
        let config = ViewerConfig {
            height: 0,
            ..ViewerConfig::default()
        };

        assert!(controller.generate(&config).is_err());
        assert!(controller.buffer().is_none());
    }
}
