/// Errors that can occur in the frame-level reprojection kernels.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DepthError {
    /// Input and output buffers do not share the same dimensions.
    #[error("buffer size mismatch, got {0}x{1} and {2}x{3}")]
    SizeMismatch(usize, usize, usize, usize),
}
