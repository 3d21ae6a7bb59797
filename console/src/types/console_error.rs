use std::fmt;

use catalog::BookingError;
use logger::LoggerError;

/// Represents errors that can occur in the booking console.
#[derive(Debug)]
pub enum ConsoleError {
    InvalidInput(String),    // Malformed menu input, e.g. a non-numeric price
    InvalidArgument(String), // Bad command-line arguments
    Io(std::io::Error),      // Reading the menu input or writing the output failed
    Logger(LoggerError),
    Booking(BookingError),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ConsoleError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            ConsoleError::Io(e) => write!(f, "I/O error: {}", e),
            ConsoleError::Logger(e) => write!(f, "Logger error: {}", e),
            ConsoleError::Booking(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Io(e) => Some(e),
            ConsoleError::Logger(e) => Some(e),
            ConsoleError::Booking(e) => Some(e),
            ConsoleError::InvalidInput(_) | ConsoleError::InvalidArgument(_) => None,
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        ConsoleError::Io(err)
    }
}

impl From<LoggerError> for ConsoleError {
    fn from(err: LoggerError) -> Self {
        ConsoleError::Logger(err)
    }
}

impl From<BookingError> for ConsoleError {
    fn from(err: BookingError) -> Self {
        ConsoleError::Booking(err)
    }
}
