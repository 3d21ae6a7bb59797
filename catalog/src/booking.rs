//! Booking operations that go through the catalog by flight number.

use super::errors::BookingError;
use super::passenger::Passenger;
use super::roster::Roster;
use super::Catalog;

/// Books a seat for `passenger` on the flight with number `flight_number`.
///
/// # Errors
/// - `BookingError::FlightNotFound` - If the catalog has no such flight.
/// - `BookingError::CapacityExceeded` - If the flight is full.
pub fn book(
    catalog: &mut Catalog,
    flight_number: &str,
    passenger: Passenger,
) -> Result<(), BookingError> {
    catalog
        .find_mut(flight_number)
        .ok_or_else(|| BookingError::FlightNotFound(flight_number.to_string()))?
        .book_seat(passenger)
}

/// Returns the roster of the flight with number `flight_number`.
///
/// # Errors
/// - `BookingError::FlightNotFound` - If the catalog has no such flight.
pub fn roster_of<'a>(
    catalog: &'a Catalog,
    flight_number: &str,
) -> Result<&'a Roster, BookingError> {
    catalog
        .find(flight_number)
        .map(|flight| flight.roster())
        .ok_or_else(|| BookingError::FlightNotFound(flight_number.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passenger::PaymentMethod;

    #[test]
    fn test_book_unknown_flight() {
        let mut catalog = Catalog::new();
        catalog.insert("F001", "New York", "Los Angeles", 1, 150.0);

        let result = book(
            &mut catalog,
            "F999",
            Passenger::new("Carol", 90.0, PaymentMethod::Card),
        );
        assert_eq!(result, Err(BookingError::FlightNotFound("F999".to_string())));
        assert_eq!(catalog.find("F001").unwrap().booked_seats(), 0);
    }

    #[test]
    fn test_book_propagates_capacity_exceeded() {
        let mut catalog = Catalog::new();
        catalog.insert("F001", "New York", "Los Angeles", 1, 150.0);

        book(
            &mut catalog,
            "F001",
            Passenger::new("Alice", 150.0, PaymentMethod::Cash),
        )
        .unwrap();
        let result = book(
            &mut catalog,
            "F001",
            Passenger::new("Bob", 150.0, PaymentMethod::Card),
        );

        assert_eq!(
            result,
            Err(BookingError::CapacityExceeded("F001".to_string()))
        );
    }

    #[test]
    fn test_roster_of() {
        let mut catalog = Catalog::new();
        catalog.insert("F002", "London", "Paris", 5, 200.0);
        book(
            &mut catalog,
            "F002",
            Passenger::new("Alice", 200.0, PaymentMethod::Card),
        )
        .unwrap();

        let roster = roster_of(&catalog, "F002").unwrap();
        assert_eq!(roster.len(), 1);
        assert!(matches!(
            roster_of(&catalog, "F404"),
            Err(BookingError::FlightNotFound(_))
        ));
    }
}
