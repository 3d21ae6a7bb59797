//! Text shown by the console for flights, rosters and bookings.

use catalog::{Catalog, Flight, Passenger, Roster};

const FLIGHTS_RULE: &str = "-----------------";
const PASSENGERS_RULE: &str = "-------------------------";

pub fn price(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn flight_line(flight: &Flight) -> String {
    format!(
        "Flight Number: {}, Origin: {}, Destination: {}, Available Seats: {}, Base Ticket Price: {}",
        flight.flight_number(),
        flight.origin(),
        flight.destination(),
        flight.available_seats(),
        price(flight.ticket_base_price())
    )
}

/// Every flight of the catalog, one line each, in flight number order.
pub fn flight_listing(catalog: &Catalog) -> String {
    let mut listing = format!("Available Flights:\n{}\n", FLIGHTS_RULE);
    catalog.for_each_in_order(|flight| {
        listing.push_str(&flight_line(flight));
        listing.push('\n');
    });
    listing.push_str(FLIGHTS_RULE);
    listing.push('\n');
    listing
}

pub fn passenger_line(passenger: &Passenger) -> String {
    format!(
        "{} (Ticket Price: {}, Payment Method: {})",
        passenger.name(),
        price(passenger.ticket_price()),
        passenger.payment_method()
    )
}

/// The passengers of a flight, newest booking first.
pub fn roster_listing(flight_number: &str, roster: &Roster) -> String {
    let mut listing = format!(
        "Passengers on Flight {}:\n{}\n",
        flight_number, PASSENGERS_RULE
    );
    for passenger in roster {
        listing.push_str(&passenger_line(passenger));
        listing.push('\n');
    }
    listing.push_str(PASSENGERS_RULE);
    listing.push('\n');
    listing
}

pub fn booking_confirmation(passenger: &Passenger) -> String {
    format!(
        "Seat booked successfully for passenger {}.\nTicket Price: {}\nPayment Method: {}\n",
        passenger.name(),
        price(passenger.ticket_price()),
        passenger.payment_method()
    )
}
