use std::fmt::{self, Display};

/// The kind of error that occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The service answered with a non-success HTTP status.
    HttpStatus,
    /// The request failed before any status was received.
    Connection,
    /// The service reported an error in the response body.
    Api,
    /// The response body has none of the recognized shapes.
    UnrecognizedResponse,
    /// Any other errors.
    Other,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::HttpStatus => write!(f, "HTTP error"),
            ErrorKind::Connection => write!(f, "Connection error"),
            ErrorKind::Api => write!(f, "API error"),
            ErrorKind::UnrecognizedResponse => {
                write!(f, "Unrecognized response")
            }
            ErrorKind::Other => write!(f, "Other error"),
        }
    }
}
