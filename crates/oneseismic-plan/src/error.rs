pub type Result<T> = core::result::Result<T, Error>;

/// The planner's error taxonomy.
///
/// All failures surface to the caller without retry, and a failed schedule
/// produces no output messages, not even a header. Callers typically
/// translate kinds to HTTP statuses: [`Error::NotFound`] → 404,
/// [`Error::Malformed`] → 400, [`Error::Logic`] → 500.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Request or manifest bytes could not be decoded, or the envelope
    /// failed a cross-check against the manifest.
    #[error(transparent)]
    Malformed(#[from] oneseismic_message::Error),

    /// A requested dimension, line, or label has no match in the cube.
    #[error("not found: {0}")]
    NotFound(String),

    /// A caller or internal contract was broken.
    #[error("logic error: {0}")]
    Logic(String),
}

// Geometry range failures are label-lookup failures from the caller's point
// of view: the coordinate named something outside the cube.
impl From<oneseismic_geometry::Error> for Error {
    fn from(e: oneseismic_geometry::Error) -> Self {
        Error::NotFound(e.to_string())
    }
}
