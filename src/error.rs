use std::error;
use std::fmt::{self, Display, Formatter};
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Matrix shapes do not line up, given as `(rows, columns)` of each operand.
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A `(row, column)` outside a matrix of the given shape.
    IndexOutOfRange {
        index: (usize, usize),
        shape: (usize, usize),
    },
    /// The matrix has a zero determinant.
    NotInvertible,
    /// The canvas does not fit the image encoder's `u32` dimensions.
    CanvasTooLarge { width: usize, height: usize },
    Io(io::Error),
    Json(serde_json::Error),
    Image(image::ImageError),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Error::DimensionMismatch { left, right } => write!(
                f,
                "dimension mismatch: {}x{} against {}x{}",
                left.0, left.1, right.0, right.1
            ),
            Error::IndexOutOfRange { index, shape } => write!(
                f,
                "index ({}, {}) is outside a {}x{} matrix",
                index.0, index.1, shape.0, shape.1
            ),
            Error::NotInvertible => write!(f, "matrix is not invertible"),
            Error::CanvasTooLarge { width, height } => {
                write!(f, "canvas of {}x{} pixels is too large to encode", width, height)
            }
            Error::Io(err) => write!(f, "i/o error: {}", err),
            Error::Json(err) => write!(f, "malformed scene: {}", err),
            Error::Image(err) => write!(f, "failed to encode image: {}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Image(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Image(err)
    }
}
