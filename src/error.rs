use thiserror::Error;

/// Errors raised while validating maze inputs or writing logs.
///
/// Searches and moves never fail; they fall back to an empty path or an
/// unchanged state. Only construction-time inputs are rejected here.
#[derive(Error, Debug)]
pub enum MazeError {
    /// Grid side length outside the supported range
    #[error("invalid grid size: {size} (allowed {min}..={max})")]
    InvalidGridSize { size: i32, min: i32, max: i32 },

    /// More obstacles requested than there are non-endpoint cells
    #[error("too many obstacles: {count} > {max}")]
    TooManyObstacles { count: usize, max: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type MazeResult<T> = Result<T, MazeError>;
