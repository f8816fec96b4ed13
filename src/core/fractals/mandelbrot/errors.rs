use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MandelbrotError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterationsError,
}
