use std::fmt::{self, Display};

/// How a passenger paid for the ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    Card,
}

impl PaymentMethod {
    /// Converts the `PaymentMethod` variant to its display name.
    pub fn as_str(&self) -> &str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A booked passenger. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    name: String,
    ticket_price: f64,
    payment_method: PaymentMethod,
}

impl Passenger {
    /// Creates a passenger.
    ///
    /// `ticket_price` must be a non-negative number. Callers parsing user input
    /// are expected to reject anything else before getting here; debug builds
    /// panic on a negative or NaN price.
    pub fn new(name: &str, ticket_price: f64, payment_method: PaymentMethod) -> Self {
        debug_assert!(
            ticket_price >= 0.0,
            "ticket price must be non-negative, got {}",
            ticket_price
        );
        Passenger {
            name: name.to_string(),
            ticket_price,
            payment_method,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ticket_price(&self) -> f64 {
        self.ticket_price
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passenger_getters() {
        let passenger = Passenger::new("Alice", 150.0, PaymentMethod::Cash);

        assert_eq!(passenger.name(), "Alice");
        assert_eq!(passenger.ticket_price(), 150.0);
        assert_eq!(passenger.payment_method(), PaymentMethod::Cash);
    }

    #[test]
    fn test_payment_method_display() {
        assert_eq!(PaymentMethod::Cash.to_string(), "Cash");
        assert_eq!(PaymentMethod::Card.to_string(), "Card");
    }

    #[test]
    fn test_free_ticket_is_allowed() {
        let passenger = Passenger::new("Infant", 0.0, PaymentMethod::Cash);
        assert_eq!(passenger.ticket_price(), 0.0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "ticket price must be non-negative")]
    fn test_negative_ticket_price_panics_in_debug() {
        Passenger::new("X", -5.0, PaymentMethod::Cash);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "ticket price must be non-negative")]
    fn test_nan_ticket_price_panics_in_debug() {
        Passenger::new("X", f64::NAN, PaymentMethod::Card);
    }
}
