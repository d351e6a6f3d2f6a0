//! Orchestration layer
//!
//! ```text
//! batch_processor::App (one run: config -> flights -> report)
//!     ↓
//! models::loaders (JSONL -> Vec<Flight>, airline table)
//!     ↓
//! services (airline resolution / analytics / airport lookup)
//! ```
//!
//! `report` turns the query results into what the binary prints.

pub mod batch_processor;
pub mod report;

pub use batch_processor::App;
pub use report::{AirlineSummary, AirportEntry, AnalysisReport, FlightSummary};
