use std::cmp::Ordering;
use std::fmt;

pub mod booking;
pub mod errors;
pub mod flight;
pub mod passenger;
pub mod roster;

pub use errors::BookingError;
pub use flight::Flight;
pub use passenger::{Passenger, PaymentMethod};
pub use roster::Roster;

/// Handle of a node inside the catalog arena.
type NodeIndex = usize;

#[derive(Clone)]
struct Node {
    flight: Flight,
    left: Option<NodeIndex>,
    right: Option<NodeIndex>,
}

impl Node {
    fn new(flight: Flight) -> Self {
        Node {
            flight,
            left: None,
            right: None,
        }
    }
}

/// Ordered index of flights keyed by flight number.
///
/// The catalog is an unbalanced binary search tree. Nodes live in an arena and
/// refer to their children by index, so the shape of the tree depends only on
/// the order in which flights were inserted. Flights are never removed.
#[derive(Clone, Default)]
pub struct Catalog {
    nodes: Vec<Node>,
    root: Option<NodeIndex>,
}

impl Catalog {
    /// Creates a new, empty `Catalog`.
    pub fn new() -> Self {
        Catalog {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Adds a new flight to the catalog.
    ///
    /// # Parameters
    /// - `flight_number`: The key of the flight. Compared lexicographically.
    /// - `origin`, `destination`: The route of the flight.
    /// - `capacity`: The number of seats that can be booked.
    /// - `base_ticket_price`: The fixed price of a ticket.
    ///
    /// # Returns
    /// * `bool` - `true` if the flight was added, `false` if a flight with the same
    ///   number already exists. In that case the existing flight is left as it was.
    pub fn insert(
        &mut self,
        flight_number: &str,
        origin: &str,
        destination: &str,
        capacity: u32,
        base_ticket_price: f64,
    ) -> bool {
        let new_index = self.nodes.len();

        match self.root {
            None => self.root = Some(new_index),
            Some(mut current) => loop {
                let node = &mut self.nodes[current];
                let slot = match flight_number.cmp(node.flight.flight_number()) {
                    Ordering::Equal => return false,
                    Ordering::Less => &mut node.left,
                    Ordering::Greater => &mut node.right,
                };
                let next = *slot;
                match next {
                    Some(child) => current = child,
                    None => {
                        *slot = Some(new_index);
                        break;
                    }
                }
            },
        }

        self.nodes.push(Node::new(Flight::new(
            flight_number,
            origin,
            destination,
            capacity,
            base_ticket_price,
        )));
        true
    }

    fn position(&self, flight_number: &str) -> Option<NodeIndex> {
        let mut current = self.root;
        while let Some(index) = current {
            let node = &self.nodes[index];
            current = match flight_number.cmp(node.flight.flight_number()) {
                Ordering::Equal => return Some(index),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Looks up a flight by its exact number.
    ///
    /// # Returns
    /// * `Option<&Flight>` - The matching flight, or `None` if there is none.
    pub fn find(&self, flight_number: &str) -> Option<&Flight> {
        self.position(flight_number)
            .map(|index| &self.nodes[index].flight)
    }

    /// Mutable version of [`Catalog::find`].
    pub fn find_mut(&mut self, flight_number: &str) -> Option<&mut Flight> {
        match self.position(flight_number) {
            Some(index) => Some(&mut self.nodes[index].flight),
            None => None,
        }
    }

    /// Visits every flight in ascending flight number order.
    pub fn for_each_in_order<F>(&self, visitor: F)
    where
        F: FnMut(&Flight),
    {
        self.iter().for_each(visitor);
    }

    /// Returns an iterator over the flights in ascending flight number order.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder {
            nodes: &self.nodes,
            stack: Vec::new(),
            current: self.root,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes on the longest path from the root to a leaf.
    ///
    /// # Returns
    /// * `usize` - `0` for an empty catalog, `1` for a single flight.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(NodeIndex, usize)> =
            self.root.map(|root| (root, 1)).into_iter().collect();

        while let Some((index, depth)) = pending.pop() {
            height = height.max(depth);
            let node = &self.nodes[index];
            for child in [node.left, node.right].into_iter().flatten() {
                pending.push((child, depth + 1));
            }
        }
        height
    }
}

/// In-order iterator over the flights of a [`Catalog`].
///
/// Uses an explicit stack, so a degenerate tree built from sorted insertions
/// is walked without recursion.
pub struct InOrder<'a> {
    nodes: &'a [Node],
    stack: Vec<NodeIndex>,
    current: Option<NodeIndex>,
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Flight;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(index) = self.current {
            self.stack.push(index);
            self.current = self.nodes[index].left;
        }
        let index = self.stack.pop()?;
        self.current = self.nodes[index].right;
        Some(&self.nodes[index].flight)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Flight;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Catalog {
    /// Shows the flight numbers in order, e.g. `"F001 -> F002"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numbers: Vec<&str> = self.iter().map(|flight| flight.flight_number()).collect();
        if !numbers.is_empty() {
            write!(f, "{}", numbers.join(" -> "))
        } else {
            write!(f, "No flights available")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::thread_rng;

    fn flight_numbers(catalog: &Catalog) -> Vec<String> {
        catalog
            .iter()
            .map(|flight| flight.flight_number().to_string())
            .collect()
    }

    #[test]
    fn test_insert_and_find() {
        let mut catalog = Catalog::new();
        assert!(catalog.insert("F001", "New York", "Los Angeles", 100, 150.0));
        assert!(catalog.insert("F002", "London", "Paris", 120, 200.0));

        let flight = catalog.find("F002").unwrap();
        assert_eq!(flight.origin(), "London");
        assert_eq!(flight.destination(), "Paris");
        assert_eq!(flight.capacity(), 120);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_find_missing_flight() {
        let mut catalog = Catalog::new();
        assert!(catalog.find("F001").is_none());

        catalog.insert("F001", "New York", "Los Angeles", 100, 150.0);
        assert!(catalog.find("F000").is_none());
        assert!(catalog.find("F999").is_none());
    }

    #[test]
    fn test_find_in_random_insertion_order() {
        let mut numbers: Vec<String> = (1..=200).map(|n| format!("F{:03}", n)).collect();
        numbers.shuffle(&mut thread_rng());

        let mut catalog = Catalog::new();
        for (i, number) in numbers.iter().enumerate() {
            catalog.insert(number, "Origin", &format!("Destination {}", i), 10, i as f64);
        }

        for (i, number) in numbers.iter().enumerate() {
            let flight = catalog.find(number).unwrap();
            assert_eq!(flight.flight_number(), number.as_str());
            assert_eq!(flight.destination(), format!("Destination {}", i));
        }
    }

    #[test]
    fn test_duplicate_insert_is_ignored() {
        let mut catalog = Catalog::new();
        catalog.insert("F001", "New York", "Los Angeles", 1, 150.0);
        catalog
            .find_mut("F001")
            .unwrap()
            .book_seat(Passenger::new("Alice", 150.0, PaymentMethod::Cash))
            .unwrap();

        assert!(!catalog.insert("F001", "Berlin", "Rome", 300, 999.0));

        let flight = catalog.find("F001").unwrap();
        assert_eq!(flight.origin(), "New York");
        assert_eq!(flight.capacity(), 1);
        assert_eq!(flight.ticket_base_price(), 150.0);
        assert_eq!(flight.roster().len(), 1);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_in_order_traversal() {
        let mut catalog = Catalog::new();
        catalog.insert("F003", "Tokyo", "Sydney", 150, 250.0);
        catalog.insert("F001", "New York", "Los Angeles", 100, 150.0);
        catalog.insert("F002", "London", "Paris", 120, 200.0);

        let mut visited = Vec::new();
        catalog.for_each_in_order(|flight| visited.push(flight.flight_number().to_string()));
        assert_eq!(visited, vec!["F001", "F002", "F003"]);
    }

    #[test]
    fn test_in_order_is_strictly_ascending_for_shuffled_keys() {
        let mut numbers: Vec<String> = (0..100).map(|n| format!("K{}", n)).collect();
        numbers.extend(numbers.clone());
        numbers.shuffle(&mut thread_rng());

        let mut catalog = Catalog::new();
        for number in &numbers {
            catalog.insert(number, "A", "B", 1, 1.0);
        }

        let visited = flight_numbers(&catalog);
        assert_eq!(visited.len(), 100);
        assert!(visited.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_lexicographic_ordering() {
        let mut catalog = Catalog::new();
        for number in ["F10", "F9", "F100", "F1"] {
            catalog.insert(number, "A", "B", 1, 1.0);
        }

        assert_eq!(flight_numbers(&catalog), vec!["F1", "F10", "F100", "F9"]);
    }

    #[test]
    fn test_sorted_insertions_are_not_rebalanced() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.height(), 0);

        for n in 1..=20 {
            catalog.insert(&format!("F{:03}", n), "A", "B", 1, 1.0);
        }
        assert_eq!(catalog.height(), 20);

        let mut balanced = Catalog::new();
        for number in ["F004", "F002", "F006", "F001", "F003", "F005", "F007"] {
            balanced.insert(number, "A", "B", 1, 1.0);
        }
        assert_eq!(balanced.height(), 3);
    }

    #[test]
    fn test_deep_tree_traversal() {
        let mut catalog = Catalog::new();
        for n in 0..5_000 {
            catalog.insert(&format!("F{:06}", n), "A", "B", 1, 1.0);
        }

        assert_eq!(catalog.iter().count(), 5_000);
        assert!(catalog.find("F004999").is_some());
    }

    #[test]
    fn test_debug_format() {
        let mut catalog = Catalog::new();
        assert_eq!(format!("{:?}", catalog), "No flights available");

        catalog.insert("F002", "A", "B", 1, 1.0);
        catalog.insert("F001", "A", "B", 1, 1.0);
        assert_eq!(format!("{:?}", catalog), "F001 -> F002");
    }
}
