pub mod airport;
pub mod flight;
pub mod loaders;

pub use airport::AirportInfo;
pub use flight::{Airline, Airplane, Flight};
pub use loaders::{load_airline_table, parse_flight, read_flights, FlightStream};
