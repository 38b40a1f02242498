use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum MatrixError {
    CastError(String),
    IndexOutOfBounds(String),
    InvalidDimensions(String),
    ShapeMismatch(String),
    UnsupportedOperation(String),
}

impl std::error::Error for MatrixError {}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::CastError(msg) => write!(f, "Cast Error: {}", msg),
            MatrixError::IndexOutOfBounds(msg) => write!(f, "Index Out of Bounds: {}", msg),
            MatrixError::InvalidDimensions(msg) => write!(f, "Invalid Dimensions: {}", msg),
            MatrixError::ShapeMismatch(msg) => write!(f, "Shape Mismatch: {}", msg),
            MatrixError::UnsupportedOperation(msg) => write!(f, "Unsupported Operation: {}", msg),
        }
    }
}
