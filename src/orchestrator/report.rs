//! Analysis report - presentation of one batch run

use std::fmt;

use crate::models::{AirportInfo, Flight};
use crate::services::flight_analyzer::{
    airline_with_most_missed_landings, destination_with_most_overnight_stays, iata_codes,
    longest_flights, spell_using_phonetic_alphabet,
};

/// One of the longest flights
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightSummary {
    pub from: String,
    pub to: String,
    pub duration_minutes: i64,
}

/// Airline with the most missed landings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirlineSummary {
    pub name: String,
    pub misses: usize,
}

/// One line of the airport section
#[derive(Debug, Clone, PartialEq)]
pub enum AirportEntry {
    /// Airport found in the reference data
    Known { airport: AirportInfo, spelling: String },
    /// Only the code is known (lookup disabled or failed)
    Code { code: String, spelling: String },
}

/// Everything a run reports
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub flight_count: usize,
    pub longest_flights: Vec<FlightSummary>,
    pub worst_airline: Option<AirlineSummary>,
    pub overnight_destination: Option<String>,
    pub airports: Vec<AirportEntry>,
}

impl AnalysisReport {
    /// Run every query over `flights`
    ///
    /// The airport section starts with bare codes; see `with_airports`.
    ///
    /// # Arguments
    /// - `flights`: the batch, in input order
    /// - `longest_count`: how many longest flights to list
    /// - `threshold_minutes`: lateness bound for a missed landing
    pub fn build(flights: &[Flight], longest_count: usize, threshold_minutes: i64) -> Self {
        let longest_flights = longest_flights(flights, longest_count)
            .into_iter()
            .map(|f| FlightSummary {
                from: f.from().to_string(),
                to: f.to().to_string(),
                duration_minutes: f.actual_duration().num_minutes(),
            })
            .collect();

        let worst_airline =
            airline_with_most_missed_landings(flights, threshold_minutes).map(|m| AirlineSummary {
                name: m.airline.name().to_string(),
                misses: m.misses,
            });

        let airports = iata_codes(flights)
            .into_iter()
            .map(|code| AirportEntry::Code {
                code: code.to_string(),
                spelling: spell_using_phonetic_alphabet(code),
            })
            .collect();

        Self {
            flight_count: flights.len(),
            longest_flights,
            worst_airline,
            overnight_destination: destination_with_most_overnight_stays(flights)
                .map(str::to_string),
            airports,
        }
    }

    /// Replace the airport section with looked-up airport details
    pub fn with_airports(mut self, airports: Vec<AirportInfo>) -> Self {
        self.airports = airports
            .into_iter()
            .map(|airport| AirportEntry::Known {
                spelling: spell_using_phonetic_alphabet(&airport.iata),
                airport,
            })
            .collect();
        self
    }

    /// Codes in the airport section, in report order
    pub fn airport_codes(&self) -> Vec<&str> {
        self.airports
            .iter()
            .map(|entry| match entry {
                AirportEntry::Known { airport, .. } => airport.iata.as_str(),
                AirportEntry::Code { code, .. } => code.as_str(),
            })
            .collect()
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Longest flights:")?;
        for (index, flight) in self.longest_flights.iter().enumerate() {
            writeln!(
                f,
                " {}. Flight from {} to {}, duration: {} minutes",
                index + 1,
                flight.from,
                flight.to,
                flight.duration_minutes
            )?;
        }

        writeln!(f, "\nAirline with most missed landings:")?;
        match &self.worst_airline {
            Some(airline) => writeln!(f, " {} ({} missed)", airline.name, airline.misses)?,
            None => writeln!(f, " N/A")?,
        }

        writeln!(f, "\nDestination that had the most overnight stays:")?;
        writeln!(
            f,
            " {}",
            self.overnight_destination.as_deref().unwrap_or("N/A")
        )?;

        writeln!(f, "\nCountries and Radio Spelling:")?;
        for (index, entry) in self.airports.iter().enumerate() {
            match entry {
                AirportEntry::Known { airport, spelling } => writeln!(
                    f,
                    " {}. {} - {} - {} - ({})",
                    index + 1,
                    airport.country,
                    airport.state,
                    airport.name,
                    spelling
                )?,
                AirportEntry::Code { code, spelling } => {
                    writeln!(f, " {}. {} - ({})", index + 1, code, spelling)?
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Airline, Airplane};
    use chrono::{DateTime, Duration};

    fn flight(airline: &str, from: &str, to: &str, start: &str, minutes: i64, late: i64) -> Flight {
        let start = DateTime::parse_from_rfc3339(start).unwrap();
        let end = start + Duration::minutes(minutes);
        Flight::new(
            Airplane::new("X-TEST", Airline::new(airline)),
            from,
            to,
            start,
            end,
            start,
            end + Duration::minutes(late),
        )
    }

    fn sample() -> Vec<Flight> {
        vec![
            flight("Alpha Airlines", "BUD", "CDG", "2024-06-01T08:00:00+00:00", 150, 10),
            flight("Oscar Air", "BRU", "BUD", "2024-06-01T23:30:00+00:00", 120, 0),
            flight("Alpha Airlines", "CDG", "BRU", "2024-06-02T12:00:00+00:00", 60, 30),
        ]
    }

    #[test]
    fn test_build_report() {
        let report = AnalysisReport::build(&sample(), 2, 5);

        assert_eq!(report.flight_count, 3);
        assert_eq!(
            report.longest_flights,
            vec![
                FlightSummary {
                    from: "BUD".to_string(),
                    to: "CDG".to_string(),
                    duration_minutes: 160,
                },
                FlightSummary {
                    from: "BRU".to_string(),
                    to: "BUD".to_string(),
                    duration_minutes: 120,
                },
            ]
        );
        assert_eq!(
            report.worst_airline,
            Some(AirlineSummary {
                name: "Alpha Airlines".to_string(),
                misses: 2,
            })
        );
        assert_eq!(report.overnight_destination.as_deref(), Some("BUD"));
        assert_eq!(report.airport_codes(), vec!["BUD", "CDG", "BRU"]);
    }

    #[test]
    fn test_render_without_answers() {
        let report = AnalysisReport::build(&[], 3, 5);
        let text = report.to_string();
        assert!(text.contains("Airline with most missed landings:\n N/A"));
        assert!(text.contains("Destination that had the most overnight stays:\n N/A"));
    }

    #[test]
    fn test_render_with_airports() {
        let airport = AirportInfo {
            icao: "LHBP".to_string(),
            iata: "BUD".to_string(),
            name: "Budapest Liszt Ferenc International Airport".to_string(),
            city: "Budapest".to_string(),
            state: "Budapest".to_string(),
            country: "HU".to_string(),
            elevation: 495,
            lat: 47.43,
            lon: 19.26,
            timezone: "Europe/Budapest".to_string(),
        };

        let report = AnalysisReport::build(&sample(), 3, 5).with_airports(vec![airport]);
        let text = report.to_string();

        assert!(text.contains(
            " 1. HU - Budapest - Budapest Liszt Ferenc International Airport - (Bravo Uniform Delta)"
        ));
        assert!(text.contains(" 1. Flight from BUD to CDG, duration: 160 minutes"));
        assert_eq!(report.airport_codes(), vec!["BUD"]);
    }

    #[test]
    fn test_render_code_only_airports() {
        let text = AnalysisReport::build(&sample(), 3, 5).to_string();
        assert!(text.contains(" 3. BRU - (Bravo Romeo Uniform)"));
    }
}
