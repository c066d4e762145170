use thiserror::Error;

/// Top-level error type for the cube overlay.
#[derive(Debug, Error)]
pub enum CubeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors related to the projected or object-space cube geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("expected {expected} projected points, got {actual}")]
    PointCount { expected: usize, actual: usize },

    #[error("projected point {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("{parameter} must be positive, got {value}")]
    NonPositive { parameter: &'static str, value: f64 },
}

/// Errors related to overlay configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Errors related to the reference raster.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("framebuffer dimensions {width}x{height} must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("framebuffer expects {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}

/// Convenience type alias for results using [`CubeError`].
pub type Result<T> = std::result::Result<T, CubeError>;
