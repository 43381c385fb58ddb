use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("Degenerate range: every elevation equals {value}")]
    DegenerateRange { value: f64 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Missing configuration: {0} is required")]
    MissingConfiguration(&'static str),

    #[error("Grid size mismatch: expected {expected} cells, got {actual}")]
    GridSize { expected: usize, actual: usize },
}

pub type Result<T, E = FilterError> = std::result::Result<T, E>;
