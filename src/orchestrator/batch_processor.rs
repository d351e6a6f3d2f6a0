//! Batch run - orchestration layer
//!
//! Owns the configuration and the airline resolver, reads the flight file
//! once, runs every query and decorates the report with airport details.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::Config;
use crate::models::{load_airline_table, read_flights};
use crate::orchestrator::report::AnalysisReport;
use crate::services::{AirlineResolver, AirportDirectory, AirportSource, StaticAirlineDirectory};
use crate::utils::logging::{log_flights_loaded, log_startup};

/// Application entry point
pub struct App {
    config: Config,
    resolver: Arc<dyn AirlineResolver + Send + Sync>,
}

impl App {
    /// Build the app, loading the airline table if one is configured
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let resolver: Arc<dyn AirlineResolver + Send + Sync> = match &config.airline_table_path {
            Some(path) => Arc::new(load_airline_table(Path::new(path)).await?),
            None => Arc::new(StaticAirlineDirectory),
        };

        Ok(Self::with_resolver(config, resolver))
    }

    /// Build the app around an existing resolver
    pub fn with_resolver(config: Config, resolver: Arc<dyn AirlineResolver + Send + Sync>) -> Self {
        Self { config, resolver }
    }

    /// Run the batch, looking up airports when enabled
    pub async fn run(&self) -> Result<AnalysisReport> {
        if self.config.lookup_airports {
            let directory = AirportDirectory::new(self.config.airports_url.as_str());
            self.analyze(Some(&directory)).await
        } else {
            self.analyze(None::<&AirportDirectory>).await
        }
    }

    /// Run the batch against the given airport source
    ///
    /// A failing airport lookup is not fatal: the report keeps bare codes.
    pub async fn analyze<A: AirportSource>(&self, airports: Option<&A>) -> Result<AnalysisReport> {
        let path = self.config.input_path.clone();
        let limit = self.config.flight_limit;
        let resolver = Arc::clone(&self.resolver);

        let flights = tokio::task::spawn_blocking(move || {
            read_flights(&path, limit, resolver.as_ref())
        })
        .await
        .context("flight reader task failed")??;

        log_flights_loaded(flights.len(), &self.config.input_path);

        let report = AnalysisReport::build(
            &flights,
            self.config.longest_flights_count,
            self.config.missed_landing_threshold_minutes,
        );

        let Some(source) = airports else {
            return Ok(report);
        };

        let codes = report.airport_codes();
        if codes.is_empty() {
            return Ok(report);
        }

        let requested = codes.len();
        let lookup = source.lookup_airports(&codes).await;

        match lookup {
            Ok(found) => {
                info!("found {} of {} airports", found.len(), requested);
                Ok(report.with_airports(found))
            }
            Err(e) => {
                warn!("airport lookup failed, listing codes only: {}", e);
                Ok(report)
            }
        }
    }
}
