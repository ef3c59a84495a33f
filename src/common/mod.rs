use std::fmt;

/// Error with a message only, used where the caller just prints what went wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Error {
    message: String,
}

impl Error {
    pub(crate) fn new(message: String) -> Error {
        Error { message }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
