use serde::{Deserialize, Serialize};

/// Airport reference data, as published by the AirportsData dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportInfo {
    pub icao: String,
    #[serde(default)]
    pub iata: String,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub country: String,
    #[serde(default)]
    pub elevation: i32,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "tz", default)]
    pub timezone: String,
}
