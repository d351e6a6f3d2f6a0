//! Airport reference lookup - capability layer
//!
//! Downloads the AirportsData dataset (an object keyed by ICAO code) and
//! picks the airports matching a set of IATA codes.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info};

use crate::error::{AirportError, AppResult};
use crate::models::AirportInfo;

/// Default location of the airport dataset
pub const DEFAULT_AIRPORTS_URL: &str =
    "https://raw.githubusercontent.com/soixt/AirportsData/master/airports.json";

/// Read-only source of airport metadata
#[allow(async_fn_in_trait)]
pub trait AirportSource {
    /// Airports for the given IATA codes, or every airport when `iata_codes` is empty
    async fn lookup_airports(&self, iata_codes: &[&str]) -> AppResult<Vec<AirportInfo>>;
}

/// HTTP-backed airport directory
pub struct AirportDirectory {
    client: reqwest::Client,
    url: String,
}

impl AirportDirectory {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Download and decode the whole dataset, ordered by ICAO code
    pub async fn fetch_airports(&self) -> AppResult<Vec<AirportInfo>> {
        info!("downloading airport data from {}", self.url);

        let request_failed = |source| AirportError::RequestFailed {
            url: self.url.clone(),
            source,
        };

        let body = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(request_failed)?
            .text()
            .await
            .map_err(request_failed)?;

        let airports = decode_airports(&body)?;
        debug!("decoded {} airports", airports.len());

        Ok(airports)
    }
}

impl Default for AirportDirectory {
    fn default() -> Self {
        Self::new(DEFAULT_AIRPORTS_URL)
    }
}

impl AirportSource for AirportDirectory {
    async fn lookup_airports(&self, iata_codes: &[&str]) -> AppResult<Vec<AirportInfo>> {
        let airports = self.fetch_airports().await?;
        Ok(select_airports(airports, iata_codes))
    }
}

/// Decode the ICAO-keyed dataset into a list ordered by ICAO code
pub fn decode_airports(body: &str) -> Result<Vec<AirportInfo>, AirportError> {
    let by_icao: BTreeMap<String, AirportInfo> =
        serde_json::from_str(body).map_err(|source| AirportError::DecodeFailed { source })?;
    Ok(by_icao.into_values().collect())
}

/// Pick airports by IATA code
///
/// An empty filter keeps everything. Otherwise airports without an IATA
/// code are skipped and the result follows the order of `iata_codes`.
///
/// # Arguments
/// - `airports`: the full directory
/// - `iata_codes`: codes to keep, in report order
///
/// # Returns
/// Matching airports; unknown codes are left out
pub fn select_airports(
    airports: impl IntoIterator<Item = AirportInfo>,
    iata_codes: &[&str],
) -> Vec<AirportInfo> {
    if iata_codes.is_empty() {
        return airports.into_iter().collect();
    }

    let mut by_iata: HashMap<String, AirportInfo> = HashMap::new();
    for airport in airports.into_iter().filter(|a| !a.iata.is_empty()) {
        by_iata.entry(airport.iata.clone()).or_insert(airport);
    }

    iata_codes
        .iter()
        .filter_map(|code| by_iata.remove(*code))
        .collect()
}
