//! Airline resolution - capability layer
//!
//! Maps an aircraft registration to the airline operating it. The parser only
//! depends on the `AirlineResolver` trait; callers choose the directory.

use std::collections::HashMap;

use phf::phf_map;

use crate::error::RecordError;
use crate::models::Airline;

/// Resolves a registration to an airline
pub trait AirlineResolver {
    /// Fails with `RecordError::UnknownRegistration` when there is no mapping
    fn resolve(&self, registration: &str) -> Result<Airline, RecordError>;
}

impl<T: AirlineResolver + ?Sized> AirlineResolver for &T {
    fn resolve(&self, registration: &str) -> Result<Airline, RecordError> {
        (**self).resolve(registration)
    }
}

impl<T: AirlineResolver + ?Sized> AirlineResolver for Box<T> {
    fn resolve(&self, registration: &str) -> Result<Airline, RecordError> {
        (**self).resolve(registration)
    }
}

fn unknown(registration: &str) -> RecordError {
    RecordError::UnknownRegistration {
        registration: registration.to_string(),
    }
}

static SAMPLE_REGISTRATIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "HA-AAA" => "Alpha Airlines",
    "HA-AAB" => "Alpha Airlines",
    "HA-AAC" => "Alpha Airlines",

    "D-AAA" => "Delta Freight",
    "D-AAB" => "Delta Freight",
    "D-AAC" => "Delta Freight",

    "OO-AAA" => "Oscar Air",
    "OO-AAB" => "Oscar Air",
    "OO-AAC" => "Oscar Air",
};

/// Built-in sample directory (three airlines, three registrations each)
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAirlineDirectory;

impl AirlineResolver for StaticAirlineDirectory {
    fn resolve(&self, registration: &str) -> Result<Airline, RecordError> {
        SAMPLE_REGISTRATIONS
            .get(registration)
            .map(|name| Airline::new(*name))
            .ok_or_else(|| unknown(registration))
    }
}

/// Owned registration table, usually loaded from a TOML file
#[derive(Debug, Clone, Default)]
pub struct AirlineTable {
    registrations: HashMap<String, String>,
}

impl AirlineTable {
    pub fn new(registrations: HashMap<String, String>) -> Self {
        Self { registrations }
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

impl<R: Into<String>, A: Into<String>> FromIterator<(R, A)> for AirlineTable {
    fn from_iter<I: IntoIterator<Item = (R, A)>>(iter: I) -> Self {
        Self {
            registrations: iter
                .into_iter()
                .map(|(registration, airline)| (registration.into(), airline.into()))
                .collect(),
        }
    }
}

impl AirlineResolver for AirlineTable {
    fn resolve(&self, registration: &str) -> Result<Airline, RecordError> {
        self.registrations
            .get(registration)
            .map(Airline::new)
            .ok_or_else(|| unknown(registration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_directory_known_registration() {
        let airline = StaticAirlineDirectory.resolve("HA-AAC").unwrap();
        assert_eq!(airline.name(), "Alpha Airlines");
        assert_eq!(
            StaticAirlineDirectory.resolve("OO-AAB").unwrap().name(),
            "Oscar Air"
        );
    }

    #[test]
    fn test_static_directory_unknown_registration() {
        let err = StaticAirlineDirectory.resolve("unknown").unwrap_err();
        assert!(matches!(
            err,
            RecordError::UnknownRegistration { ref registration } if registration == "unknown"
        ));
        // Lookup is exact, no case folding.
        assert!(StaticAirlineDirectory.resolve("ha-aaa").is_err());
    }

    #[test]
    fn test_table_resolver() {
        let table: AirlineTable = [("N123AB", "Example Air")].into_iter().collect();
        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve("N123AB").unwrap().name(), "Example Air");
        assert!(table.resolve("HA-AAA").is_err());
    }

    #[test]
    fn test_resolver_through_trait_object() {
        let boxed: Box<dyn AirlineResolver> = Box::new(StaticAirlineDirectory);
        assert_eq!(boxed.resolve("D-AAB").unwrap().name(), "Delta Freight");
    }
}
