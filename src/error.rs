use serde_json;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(Clone, PartialEq, Debug, Fail)]
pub enum Error {
    #[fail(display = "index must not be zero or missing")]
    InvalidArgument,

    #[fail(display = "length mismatch: expected {} elements, found {}", expected, found)]
    LengthMismatch { expected: usize, found: usize },

    #[fail(display = "position {} is out of range for element {} with {} matches", position, element, count)]
    IndexOutOfRange { element: usize, position: usize, count: usize },

    #[fail(display = "match table for element {} has odd length {}", element, len)]
    OddTableLength { element: usize, len: usize },

    #[fail(display = "invalid options")]
    InvalidOptions,
}

impl From<serde_json::Error> for Error {
    fn from(_: serde_json::Error) -> Error {
        Error::InvalidOptions
    }
}
