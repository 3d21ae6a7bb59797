use std::fmt::{self, Display};

/// Enum representing the possible errors that can occur while booking a seat.
///
/// The possible errors are:
///
/// - `CapacityExceeded`: the flight has no seats left. Carries the flight number.
/// - `FlightNotFound`: no flight in the catalog matches the given number.
///
/// Both are recoverable: the flight and its roster are left untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingError {
    CapacityExceeded(String),
    FlightNotFound(String),
}

impl Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingError::CapacityExceeded(flight_number) => write!(
                f,
                "[CapacityExceeded]: No available seats on flight {}",
                flight_number
            ),
            BookingError::FlightNotFound(flight_number) => write!(
                f,
                "[FlightNotFound]: Flight with number {} not found",
                flight_number
            ),
        }
    }
}

impl std::error::Error for BookingError {}
