use catalog::Catalog;
use logger::{Color, Logger, LoggerError};

/// The flights the console starts with: number, origin, destination,
/// capacity and base ticket price.
const SEED_FLIGHTS: [(&str, &str, &str, u32, f64); 20] = [
    ("F001", "New York", "Los Angeles", 100, 150.0),
    ("F002", "London", "Paris", 120, 200.0),
    ("F003", "Tokyo", "Sydney", 150, 250.0),
    ("F004", "Los Angeles", "New York", 100, 180.0),
    ("F005", "Paris", "London", 120, 220.0),
    ("F006", "Sydney", "Tokyo", 150, 270.0),
    ("F007", "Chicago", "Miami", 110, 170.0),
    ("F008", "Berlin", "Rome", 130, 210.0),
    ("F009", "Moscow", "Beijing", 160, 260.0),
    ("F010", "Toronto", "Vancouver", 90, 140.0),
    ("F011", "Madrid", "Barcelona", 100, 155.0),
    ("F012", "Dubai", "Singapore", 140, 230.0),
    ("F013", "Hong Kong", "Shanghai", 180, 290.0),
    ("F014", "Seoul", "Osaka", 120, 195.0),
    ("F015", "Bangkok", "Phuket", 130, 205.0),
    ("F016", "Cairo", "Istanbul", 150, 245.0),
    ("F017", "Mexico City", "Cancun", 110, 175.0),
    ("F018", "Sao Paulo", "Rio de Janeiro", 100, 160.0),
    ("F019", "Buenos Aires", "Santiago", 120, 200.0),
    ("F020", "Amsterdam", "Brussels", 110, 175.0),
];

/// Inserts the seed flights into `catalog`.
///
/// # Returns
/// * `Vec<&str>` - The flight numbers that were skipped because the catalog
///   already had them.
pub fn populate(catalog: &mut Catalog) -> Vec<&'static str> {
    SEED_FLIGHTS
        .iter()
        .filter(|(number, origin, destination, capacity, price)| {
            !catalog.insert(number, origin, destination, *capacity, *price)
        })
        .map(|(number, ..)| *number)
        .collect()
}

/// Seeds `catalog` and logs the outcome: a warning per skipped flight and
/// the resulting catalog size.
pub fn populate_logged(catalog: &mut Catalog, logger: &Logger) -> Result<(), LoggerError> {
    for skipped in populate(catalog) {
        logger.warn(&format!("Flight {} already in the catalog, skipped", skipped))?;
    }
    logger.info(
        &format!("Catalog seeded with {} flights", catalog.len()),
        Color::Cyan,
    )
}
