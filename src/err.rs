use std::fmt::{self, Debug, Display};
use std::io;

pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Returned from `main` so failures print with `Display` rather than `Debug`.
pub struct DisplayError(Error);

impl Debug for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T: Into<Error>> From<T> for DisplayError {
    fn from(display: T) -> Self {
        DisplayError(display.into())
    }
}

/// Accept errors caused by one peer going away; the listener itself is still healthy.
pub fn is_connection_error(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::ConnectionReset
    )
}
