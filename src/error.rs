use thiserror::Error;

/// Top-level error type for the catoptrics kernel.
#[derive(Debug, Error)]
pub enum CatoptricsError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Figure(#[from] FigureError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("lines are parallel or coincident")]
    ParallelLines,

    #[error("line does not intersect the circle")]
    NoIntersection,

    #[error("parameter {parameter} = {value} must be positive")]
    NonPositive { parameter: &'static str, value: f64 },
}

/// Errors related to figure styling and dimensions.
#[derive(Debug, Error)]
pub enum FigureError {
    #[error("dimension {parameter} = {value} must be positive")]
    NonPositiveDimension { parameter: &'static str, value: f64 },
}

/// Convenience type alias for results using [`CatoptricsError`].
pub type Result<T> = std::result::Result<T, CatoptricsError>;
