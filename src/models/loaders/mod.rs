pub mod flight_record;
pub mod jsonl_loader;
pub mod toml_loader;

pub use flight_record::{parse_flight, parse_timestamp};
pub use jsonl_loader::{read_flights, FlightStream};
pub use toml_loader::load_airline_table;
