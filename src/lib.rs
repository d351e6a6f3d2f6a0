//! # Flight Analytics
//!
//! Reads a batch of flight events from a JSON Lines file and derives a few
//! facts from it: the longest flights, the airline that most often landed
//! late, the destination with the most overnight stays, and the airports
//! involved, spelled with the NATO phonetic alphabet.
//!
//! ## Layers
//!
//! ### Models
//! - `models/` - immutable value types (`Airline`, `Airplane`, `Flight`, `AirportInfo`)
//! - `models/loaders/` - line decoding, the streaming JSONL reader, TOML airline tables
//!
//! ### Services
//! - `AirlineResolver` - registration -> airline, injectable
//! - `flight_analyzer` - pure queries over `&[Flight]`
//! - `AirportDirectory` - remote airport reference data
//!
//! ### Orchestration
//! - `orchestrator::App` - one batch run from config to `AnalysisReport`
//!
//! ## Module structure

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{read_flights, Airline, Airplane, AirportInfo, Flight};
pub use orchestrator::{AnalysisReport, App};
pub use services::{AirlineResolver, AirlineTable, StaticAirlineDirectory};
