use std::io::{BufRead, Write};

use catalog::booking::{book, roster_of};
use catalog::{Catalog, Passenger, PaymentMethod};
use logger::{Color, Logger};

use super::console_error::ConsoleError;
use super::render;

const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

/// What the current menu loop does after an action.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Flow {
    Continue,
    Back, // leave the manager menu for the main menu
    Exit,
}

/// Interactive console over a flight catalog.
///
/// Reads one answer per line from `input` and writes menus and results to
/// `output`. Booking errors and malformed answers are reported and the menu is
/// shown again; only I/O errors on the streams end the session. End of input
/// is treated like choosing Exit.
pub struct Console<R: BufRead, W: Write> {
    catalog: Catalog,
    input: R,
    output: W,
    logger: Option<Logger>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(catalog: Catalog, input: R, output: W, logger: Option<Logger>) -> Self {
        Console {
            catalog,
            input,
            output,
            logger,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runs the main menu until the user exits or the input ends.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        loop {
            let step = self.main_menu();
            if self.recover(step)? == Flow::Exit {
                break;
            }
        }

        writeln!(self.output, "Exiting...")?;
        self.output.flush()?;
        self.log_info("Session closed", Color::Blue);
        Ok(())
    }

    fn main_menu(&mut self) -> Result<Flow, ConsoleError> {
        write!(
            self.output,
            "\nUser Type:\n1. Passenger\n2. Manager\n3. Exit\n"
        )?;
        let Some(choice) = self.prompt("Enter user type: ")? else {
            return Ok(Flow::Exit);
        };

        match choice.as_str() {
            "1" => self.passenger_booking(),
            "2" => self.manager_menu(),
            "3" => Ok(Flow::Exit),
            _ => {
                writeln!(self.output, "{}", INVALID_CHOICE)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn manager_menu(&mut self) -> Result<Flow, ConsoleError> {
        loop {
            let step = self.manager_option();
            match self.recover(step)? {
                Flow::Continue => {}
                Flow::Back => return Ok(Flow::Continue),
                Flow::Exit => return Ok(Flow::Exit),
            }
        }
    }

    fn manager_option(&mut self) -> Result<Flow, ConsoleError> {
        write!(
            self.output,
            "\nManager Options:\n1. Display Flights\n2. Display Passengers on Flight\n3. Exit\n"
        )?;
        let Some(choice) = self.prompt("Enter your choice: ")? else {
            return Ok(Flow::Exit);
        };

        match choice.as_str() {
            "1" => {
                let listing = render::flight_listing(&self.catalog);
                write!(self.output, "{}", listing)?;
            }
            "2" => {
                let Some(flight_number) = self.prompt("Enter flight number: ")? else {
                    return Ok(Flow::Exit);
                };
                match roster_of(&self.catalog, &flight_number) {
                    Ok(roster) => {
                        let listing = render::roster_listing(&flight_number, roster);
                        write!(self.output, "{}", listing)?;
                    }
                    Err(e) => self.report(&ConsoleError::Booking(e))?,
                }
            }
            "3" => {
                writeln!(self.output, "Exiting Manager Options...")?;
                return Ok(Flow::Back);
            }
            _ => writeln!(self.output, "{}", INVALID_CHOICE)?,
        }
        Ok(Flow::Continue)
    }

    /// Reports malformed input and keeps the menu going. Any other error ends the session.
    fn recover(&mut self, step: Result<Flow, ConsoleError>) -> Result<Flow, ConsoleError> {
        match step {
            Ok(flow) => Ok(flow),
            Err(e @ ConsoleError::InvalidInput(_)) => {
                self.report(&e)?;
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        }
    }

    fn passenger_booking(&mut self) -> Result<Flow, ConsoleError> {
        let Some(flight_number) = self.prompt("Enter flight number: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self.prompt("Enter passenger name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(price) = self.prompt("Enter ticket price: ")? else {
            return Ok(Flow::Exit);
        };
        write!(self.output, "Select Payment Method:\n1. Cash\n2. Card\n")?;
        let Some(method) = self.prompt("Enter your choice: ")? else {
            return Ok(Flow::Exit);
        };

        let passenger = parse_passenger(&name, &price, &method)?;

        match book(&mut self.catalog, &flight_number, passenger.clone()) {
            Ok(()) => {
                write!(self.output, "{}", render::booking_confirmation(&passenger))?;
                self.log_info(
                    &format!(
                        "Booked {} on flight {} ({}, {})",
                        passenger.name(),
                        flight_number,
                        render::price(passenger.ticket_price()),
                        passenger.payment_method()
                    ),
                    Color::Green,
                );
            }
            Err(e) => self.report(&ConsoleError::Booking(e))?,
        }
        Ok(Flow::Continue)
    }

    /// Shows `prompt` and reads the next line, trimmed. `None` at end of input.
    ///
    /// # Errors
    /// - `ConsoleError::InvalidInput` - If the line is not valid UTF-8. The line is
    ///   consumed, so the next prompt reads the following one.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8(line)
            .map_err(|_| ConsoleError::InvalidInput("line is not valid UTF-8".to_string()))?;
        Ok(Some(line.trim().to_string()))
    }

    fn report(&mut self, error: &ConsoleError) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", error)?;
        self.log_warn(&error.to_string());
        Ok(())
    }

    fn log_info(&self, message: &str, color: Color) {
        if let Some(logger) = &self.logger {
            if let Err(e) = logger.info(message, color) {
                eprintln!("Failed to write log: {}", e);
            }
        }
    }

    fn log_warn(&self, message: &str) {
        if let Some(logger) = &self.logger {
            if let Err(e) = logger.warn(message) {
                eprintln!("Failed to write log: {}", e);
            }
        }
    }
}

/// Builds a passenger from the raw answers of the booking prompts.
///
/// Payment choice `1` is cash and any other number is card.
///
/// # Errors
/// - `ConsoleError::InvalidInput` - If the price is not a non-negative number or
///   the payment choice is not a number.
fn parse_passenger(name: &str, price: &str, method: &str) -> Result<Passenger, ConsoleError> {
    if name.is_empty() {
        return Err(ConsoleError::InvalidInput(
            "passenger name cannot be empty".to_string(),
        ));
    }

    let ticket_price: f64 = price
        .parse()
        .map_err(|_| ConsoleError::InvalidInput(format!("'{}' is not a ticket price", price)))?;
    if !ticket_price.is_finite() || ticket_price < 0.0 {
        return Err(ConsoleError::InvalidInput(format!(
            "'{}' is not a ticket price",
            price
        )));
    }

    let payment_method = match method.parse::<i64>() {
        Ok(1) => PaymentMethod::Cash,
        Ok(_) => PaymentMethod::Card,
        Err(_) => {
            return Err(ConsoleError::InvalidInput(format!(
                "'{}' is not a payment choice",
                method
            )))
        }
    };

    Ok(Passenger::new(name, ticket_price, payment_method))
}
