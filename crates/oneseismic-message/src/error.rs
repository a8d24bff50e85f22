pub type Result<T> = core::result::Result<T, Error>;

/// Decode and envelope-validation failures for wire messages.
///
/// Everything in here is a malformed-message condition from the planner's
/// point of view; callers that speak HTTP conventionally answer 400.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The document could not be decoded as the expected message type.
    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The envelope carries a different function tag than the type it was
    /// decoded into.
    #[error("expected function {expected}, got {got}")]
    WrongFunction {
        expected: &'static str,
        got: String,
    },

    /// The request's fragment shape cannot tile the manifest's cube.
    #[error("shape {shape:?} does not tile a {ndims}-dimensional cube")]
    ShapeMismatch { shape: Vec<usize>, ndims: usize },

    /// Curtain trace arrays must come in equal-length pairs.
    #[error("dim0s (len = {dim0s}) and dim1s (len = {dim1s}) differ in length")]
    TraceMismatch { dim0s: usize, dim1s: usize },
}
