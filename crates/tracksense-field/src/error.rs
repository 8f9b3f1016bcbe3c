/// Errors that can occur when constructing or refilling a field.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FieldError {
    /// The provided cell data does not match the field dimensions.
    #[error("invalid data length, expected {0} cells, got {1}")]
    InvalidLength(usize, usize),

    /// The requested field dimensions contain a zero.
    #[error("field dimensions must be non-zero, got {0}x{1}")]
    ZeroDimension(usize, usize),
}
