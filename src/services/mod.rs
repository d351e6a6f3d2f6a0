pub mod airline_resolver;
pub mod airport_directory;
pub mod flight_analyzer;

pub use airline_resolver::{AirlineResolver, AirlineTable, StaticAirlineDirectory};
pub use airport_directory::{AirportDirectory, AirportSource};
pub use flight_analyzer::MissedLandings;
