use super::errors::BookingError;
use super::passenger::Passenger;
use super::roster::Roster;

/// Represents a flight in the catalog: its route, its seats and the
/// passengers that booked them.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    flight_number: String,
    origin: String,
    destination: String,
    capacity: u32,
    booked_seats: u32,
    base_ticket_price: f64,
    roster: Roster,
}

impl Flight {
    pub(crate) fn new(
        flight_number: &str,
        origin: &str,
        destination: &str,
        capacity: u32,
        base_ticket_price: f64,
    ) -> Self {
        Flight {
            flight_number: flight_number.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            capacity,
            booked_seats: 0,
            base_ticket_price,
            roster: Roster::new(),
        }
    }

    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn booked_seats(&self) -> u32 {
        self.booked_seats
    }

    /// Seats that can still be booked.
    pub fn available_seats(&self) -> u32 {
        self.capacity - self.booked_seats
    }

    pub fn ticket_base_price(&self) -> f64 {
        self.base_ticket_price
    }

    /// Books a seat for `passenger`, putting them at the front of the roster.
    ///
    /// # Errors
    /// - `BookingError::CapacityExceeded` - If every seat is already booked. The
    ///   seat count and the roster are left unchanged.
    pub fn book_seat(&mut self, passenger: Passenger) -> Result<(), BookingError> {
        if self.booked_seats >= self.capacity {
            return Err(BookingError::CapacityExceeded(self.flight_number.clone()));
        }
        self.booked_seats += 1;
        self.roster.add(passenger);
        Ok(())
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}
