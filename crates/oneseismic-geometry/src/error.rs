use core::fmt;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A coordinate is at or beyond the cube extent along some axis.
    OutOfRange {
        axis: usize,
        coordinate: usize,
        extent: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OutOfRange {
                axis,
                coordinate,
                extent,
            } => write!(
                fmt,
                "coordinate (= {coordinate}) on axis {axis} not in [0, {extent})"
            ),
        }
    }
}

impl core::error::Error for Error {}
