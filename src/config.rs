//! Startup parameters shared by the still renderer and the interactive window.

use clap::Args;
use thiserror::Error;

use crate::core::camera_control::limits::{CameraLimits, CameraLimitsError};
use crate::core::data::complex::Complex;
use crate::core::data::viewport::ViewportError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::view::camera_state::{CameraState, Scale};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error(transparent)]
    Mandelbrot(#[from] MandelbrotError),
    #[error("pixel scale must be greater than zero")]
    ZeroPixelScale,
    #[error("scale must be positive and finite, got {x}x{y}")]
    InvalidScale { x: f64, y: f64 },
    #[error("center must be finite, got ({real}, {imag})")]
    NonFiniteCenter { real: f64, imag: f64 },
    #[error("window of {width}x{height} at pixel scale {pixel_scale} does not fit in u32")]
    WindowTooLarge { width: u32, height: u32, pixel_scale: u32 },
    #[error(transparent)]
    Limits(#[from] CameraLimitsError),
    #[error("start scale {x}x{y} lies outside the zoom range [{min_scale}, {max_scale}]")]
    ScaleOutsideLimits {
        x: f64,
        y: f64,
        min_scale: f64,
        max_scale: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    pub width: u32,
    pub height: u32,
    /// Physical window pixels per viewport pixel.
    pub pixel_scale: u32,
    pub max_iterations: u32,
    pub center: Complex,
    pub scale: Scale,
    pub parallel: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            pixel_scale: 8,
            max_iterations: 80,
            center: Complex::ZERO,
            scale: Scale::uniform(0.01),
            parallel: true,
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ViewportError::InvalidSize {
                width: self.width,
                height: self.height,
            }
            .into());
        }

        if self.pixel_scale == 0 {
            return Err(ConfigError::ZeroPixelScale);
        }

        self.window_size()?;

        if self.max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError.into());
        }

        if !self.scale.is_valid() {
            return Err(ConfigError::InvalidScale {
                x: self.scale.x,
                y: self.scale.y,
            });
        }

        if !self.center.is_finite() {
            return Err(ConfigError::NonFiniteCenter {
                real: self.center.real,
                imag: self.center.imag,
            });
        }

        Ok(())
    }

    /// Checks the config on its own and then against the camera's zoom range, so the
    /// start view is one the controller can zoom away from and reset back to unchanged.
    pub fn validate_with(&self, limits: &CameraLimits) -> Result<(), ConfigError> {
        self.validate()?;
        limits.validate()?;

        if !limits.admits(self.scale) {
            return Err(ConfigError::ScaleOutsideLimits {
                x: self.scale.x,
                y: self.scale.y,
                min_scale: limits.min_scale,
                max_scale: limits.max_scale,
            });
        }

        Ok(())
    }

    /// Physical window size: the viewport multiplied by the pixel scale.
    pub fn window_size(&self) -> Result<(u32, u32), ConfigError> {
        let too_large = || ConfigError::WindowTooLarge {
            width: self.width,
            height: self.height,
            pixel_scale: self.pixel_scale,
        };

        let width = self.width.checked_mul(self.pixel_scale).ok_or_else(too_large)?;
        let height = self.height.checked_mul(self.pixel_scale).ok_or_else(too_large)?;
        Ok((width, height))
    }

    #[must_use]
    pub fn camera(&self) -> CameraState {
        CameraState::new(self.center, self.scale)
    }
}

/// Command line flags for [`ViewerConfig`].
#[derive(Debug, Clone, Args)]
pub struct ViewerArgs {
    /// Viewport width in pixels
    #[arg(long, default_value_t = 100)]
    pub width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 100)]
    pub height: u32,

    /// Window pixels per viewport pixel
    #[arg(long, default_value_t = 8)]
    pub pixel_scale: u32,

    /// Iteration cap for the escape-time test
    #[arg(long, default_value_t = 80)]
    pub max_iterations: u32,

    /// Real part of the plane point shown at the centre of the view
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_re: f64,

    /// Imaginary part of the plane point shown at the centre of the view
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_im: f64,

    /// Plane units per pixel on both axes
    #[arg(long, default_value_t = 0.01)]
    pub scale: f64,

    /// Evaluate pixels on a single thread
    #[arg(long)]
    pub sequential: bool,
}

impl From<ViewerArgs> for ViewerConfig {
    fn from(args: ViewerArgs) -> Self {
        Self {
            width: args.width,
            height: args.height,
            pixel_scale: args.pixel_scale,
            max_iterations: args.max_iterations,
            center: Complex::new(args.center_re, args.center_im),
            scale: Scale::uniform(args.scale),
            parallel: !args.sequential,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        viewer: ViewerArgs,
    }

    fn parse(args: &[&str]) -> ViewerConfig {
        let cli = TestCli::try_parse_from(std::iter::once("test").chain(args.iter().copied())).unwrap();
        cli.viewer.into()
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(ViewerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn flag_defaults_match_default_config() {
        assert_eq!(parse(&[]), ViewerConfig::default());
    }

    #[test]
    fn flags_override_every_field() {
        let config = parse(&[
            "--width", "320",
            "--height", "200",
            "--pixel-scale", "2",
            "--max-iterations", "500",
            "--center-re", "-0.75",
            "--center-im", "0.1",
            "--scale", "0.002",
            "--sequential",
        ]);

        assert_eq!(
            config,
            ViewerConfig {
                width: 320,
                height: 200,
                pixel_scale: 2,
                max_iterations: 500,
                center: Complex::new(-0.75, 0.1),
                scale: Scale::uniform(0.002),
                parallel: false,
            }
        );
    }

    #[test]
    fn validate_rejects_zero_sizes() {
        let config = ViewerConfig {
            width: 0,
            ..ViewerConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::Viewport(ViewportError::InvalidSize { width: 0, height: 100 }))
        );
    }

    #[test]
    fn validate_rejects_zero_pixel_scale() {
        let config = ViewerConfig {
            pixel_scale: 0,
            ..ViewerConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::ZeroPixelScale));
    }

    #[test]
    fn validate_rejects_zero_iterations() {
        let config = ViewerConfig {
            max_iterations: 0,
            ..ViewerConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::Mandelbrot(MandelbrotError::ZeroMaxIterationsError))
        );
    }

    #[test]
    fn validate_rejects_degenerate_scale() {
        for scale in [0.0, -0.01, f64::INFINITY] {
            let config = ViewerConfig {
                scale: Scale::uniform(scale),
                ..ViewerConfig::default()
            };

            assert!(matches!(config.validate(), Err(ConfigError::InvalidScale { .. })));
        }
    }

    #[test]
    fn validate_rejects_non_finite_center() {
        let config = ViewerConfig {
            center: Complex::new(f64::NAN, 0.0),
            ..ViewerConfig::default()
        };

        assert!(matches!(config.validate(), Err(ConfigError::NonFiniteCenter { .. })));
    }

    #[test]
    fn validate_rejects_window_overflow() {
        let config = ViewerConfig {
            width: 70_000,
            pixel_scale: 70_000,
            ..ViewerConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::WindowTooLarge {
                width: 70_000,
                height: 100,
                pixel_scale: 70_000
            })
        );
    }

    #[test]
    fn window_size_multiplies_by_pixel_scale() {
        assert_eq!(ViewerConfig::default().window_size(), Ok((800, 800)));
    }

    #[test]
    fn validate_with_rejects_scale_outside_zoom_range() {
        let limits = CameraLimits::default();

        for scale in [5000.0, 1e-20] {
            let config = ViewerConfig {
                scale: Scale::uniform(scale),
                ..ViewerConfig::default()
            };

            assert!(config.validate().is_ok());
            assert!(matches!(
                config.validate_with(&limits),
                Err(ConfigError::ScaleOutsideLimits { .. })
            ));
        }
    }

    #[test]
    fn validate_with_rejects_inverted_limits() {
        let limits = CameraLimits {
            min_scale: 1.0,
            max_scale: 0.5,
            ..CameraLimits::default()
        };

        assert_eq!(
            ViewerConfig::default().validate_with(&limits),
            Err(ConfigError::Limits(CameraLimitsError::InvalidScaleRange {
                min_scale: 1.0,
                max_scale: 0.5
            }))
        );
    }
}
