use std::iter::Rev;
use std::slice::Iter;

use super::passenger::Passenger;

/// The passengers booked on a flight, newest first.
///
/// Entries are stored in booking order and read back reversed, so adding a
/// passenger never shifts the existing ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    passengers: Vec<Passenger>,
}

impl Roster {
    pub fn new() -> Self {
        Roster {
            passengers: Vec::new(),
        }
    }

    /// Puts a passenger at the front of the roster.
    pub(crate) fn add(&mut self, passenger: Passenger) {
        self.passengers.push(passenger);
    }

    /// Iterates over the passengers from the most recent booking to the oldest.
    pub fn iter(&self) -> Rev<Iter<'_, Passenger>> {
        self.passengers.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Passenger;
    type IntoIter = Rev<Iter<'a, Passenger>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
