//! Streaming reader for JSON Lines flight files

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{AppError, AppResult, FileError};
use crate::models::loaders::flight_record::parse_flight;
use crate::models::Flight;
use crate::services::AirlineResolver;

/// Lazy, forward-only sequence of flights read from a JSONL file
///
/// Owns the file handle; dropping the stream closes the file. After the
/// first error the stream yields nothing more.
pub struct FlightStream<'r> {
    path: String,
    lines: Lines<BufReader<File>>,
    line_number: usize,
    failed: bool,
    resolver: &'r dyn AirlineResolver,
}

impl<'r> FlightStream<'r> {
    /// Open `path` for streaming
    pub fn open(path: impl AsRef<Path>, resolver: &'r dyn AirlineResolver) -> AppResult<Self> {
        let path = path.as_ref().display().to_string();
        let file = File::open(&path).map_err(|e| AppError::file_access_failed(&path, e))?;
        debug!("opened flight file {}", path);

        Ok(Self {
            path,
            lines: BufReader::new(file).lines(),
            line_number: 0,
            failed: false,
            resolver,
        })
    }

    /// Number of lines consumed so far, blank lines included
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl Iterator for FlightStream<'_> {
    type Item = AppResult<Flight>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let line = self.lines.next()?;
            self.line_number += 1;

            let result = match line {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => parse_flight(&line, self.resolver)
                    .map_err(|source| AppError::record(self.line_number, source)),
                Err(source) => Err(FileError::ReadFailed {
                    path: self.path.clone(),
                    line: self.line_number,
                    source,
                }
                .into()),
            };

            self.failed = result.is_err();
            return Some(result);
        }
    }
}

/// Read flights from a JSONL file, in line order
///
/// `limit == 0` reads every line; otherwise reading stops once `limit`
/// flights were produced. The first bad line fails the whole batch.
///
/// # Arguments
/// - `path`: JSONL input file
/// - `limit`: maximum number of flights, `0` for all
/// - `resolver`: maps each registration to its airline
///
/// # Returns
/// Flights in line order, or the first file or record error
pub fn read_flights(
    path: impl AsRef<Path>,
    limit: usize,
    resolver: &dyn AirlineResolver,
) -> AppResult<Vec<Flight>> {
    let path = path.as_ref();
    let stream = FlightStream::open(path, resolver)?;
    let take = if limit == 0 { usize::MAX } else { limit };

    let flights = stream.take(take).collect::<AppResult<Vec<_>>>()?;
    info!("read {} flights from {}", flights.len(), path.display());

    Ok(flights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{AirlineTable, StaticAirlineDirectory};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn line(registration: &str, from: &str, to: &str) -> String {
        format!(
            r#"{{"registration": "{}", "from": "{}", "to": "{}", "scheduled_start": "2024-02-01T08:00:00+00:00", "scheduled_end": "2024-02-01T10:00:00+00:00", "actual_start": "2024-02-01T08:10:00+00:00", "actual_end": "2024-02-01T10:05:00+00:00"}}"#,
            registration, from, to
        )
    }

    fn write_lines(lines: &[String]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_reads_all_lines_in_order() {
        let file = write_lines(&[
            line("HA-AAA", "BUD", "CDG"),
            String::new(),
            line("OO-AAC", "BRU", "LHR"),
            line("D-AAA", "FRA", "BUD"),
        ]);

        let flights = read_flights(file.path(), 0, &StaticAirlineDirectory).unwrap();
        let routes: Vec<_> = flights.iter().map(|f| (f.from(), f.to())).collect();
        assert_eq!(routes, vec![("BUD", "CDG"), ("BRU", "LHR"), ("FRA", "BUD")]);
    }

    #[test]
    fn test_limit_stops_early() {
        // The third line is garbage, but it is never reached.
        let file = write_lines(&[
            line("HA-AAA", "BUD", "CDG"),
            line("HA-AAB", "CDG", "BUD"),
            "{ broken".to_string(),
        ]);

        let flights = read_flights(file.path(), 2, &StaticAirlineDirectory).unwrap();
        assert_eq!(flights.len(), 2);

        let flights = read_flights(file.path(), 1, &StaticAirlineDirectory).unwrap();
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].airplane().registration(), "HA-AAA");
    }

    #[test]
    fn test_limit_larger_than_file() {
        let file = write_lines(&[line("HA-AAA", "BUD", "CDG")]);
        let flights = read_flights(file.path(), 10, &StaticAirlineDirectory).unwrap();
        assert_eq!(flights.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = read_flights("/definitely/not/here.jsonl", 0, &StaticAirlineDirectory)
            .unwrap_err();
        assert!(err.is_file_access());
        assert!(err.to_string().contains("/definitely/not/here.jsonl"));
    }

    #[test]
    fn test_malformed_line_fails_whole_batch() {
        let missing_to = line("HA-AAA", "BUD", "CDG").replace(r#""to": "CDG", "#, "");
        let file = write_lines(&[
            line("HA-AAA", "BUD", "CDG"),
            line("HA-AAB", "CDG", "BUD"),
            missing_to,
        ]);

        let err = read_flights(file.path(), 0, &StaticAirlineDirectory).unwrap_err();
        assert!(err.is_malformed_input());
        assert!(matches!(err, AppError::Record { line: 3, .. }));
    }

    #[test]
    fn test_unknown_registration_fails_whole_batch() {
        let file = write_lines(&[line("HA-AAA", "BUD", "CDG"), line("G-ABCD", "LHR", "BUD")]);
        let table: AirlineTable = [("HA-AAA", "Alpha Airlines")].into_iter().collect();

        let err = read_flights(file.path(), 0, &table).unwrap_err();
        assert!(err.is_unknown_registration());
    }

    #[test]
    fn test_stream_stops_after_error() {
        let file = write_lines(&[
            "nope".to_string(),
            line("HA-AAA", "BUD", "CDG"),
        ]);

        let mut stream = FlightStream::open(file.path(), &StaticAirlineDirectory).unwrap();
        assert!(stream.next().unwrap().is_err());
        assert!(stream.next().is_none());
        assert_eq!(stream.line_number(), 1);
    }
}
