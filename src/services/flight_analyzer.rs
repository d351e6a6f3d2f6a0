//! Flight analytics - capability layer
//!
//! Pure, order-sensitive queries over a batch of flights. Nothing here
//! mutates its input or keeps state between calls; empty inputs give empty
//! or `None` results rather than errors.

use std::collections::HashSet;

use phf::phf_map;

use crate::models::{Airline, Flight};

/// Default threshold after which a late landing counts as missed
pub const DEFAULT_MISSED_LANDING_MINUTES: i64 = 5;

/// Airline with the most missed landings and how many it had
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissedLandings<'a> {
    pub airline: &'a Airline,
    pub misses: usize,
}

/// The `limit` flights with the longest actual duration, longest first
///
/// Equal durations keep their input order.
pub fn longest_flights(flights: &[Flight], limit: usize) -> Vec<&Flight> {
    let mut ranked: Vec<&Flight> = flights.iter().collect();
    // `sort_by` is stable, which is what keeps ties in input order.
    ranked.sort_by(|a, b| b.actual_duration().cmp(&a.actual_duration()));
    ranked.truncate(limit);
    ranked
}

/// Airline whose flights most often landed more than `threshold_minutes` late
///
/// Airlines are grouped by name. When several airlines share the highest
/// count, the one seen first in `flights` wins.
///
/// # Arguments
/// - `flights`: the batch, in input order
/// - `threshold_minutes`: strict lateness bound; any `i64` is accepted
///
/// # Returns
/// `None` when no flight exceeded the threshold
pub fn airline_with_most_missed_landings(
    flights: &[Flight],
    threshold_minutes: i64,
) -> Option<MissedLandings<'_>> {
    // Milliseconds, saturating: `Duration::minutes` panics past its range.
    let threshold_millis = threshold_minutes.saturating_mul(60_000);

    // first-seen order
    let mut tally: Vec<MissedLandings<'_>> = Vec::new();

    for flight in flights
        .iter()
        .filter(|f| f.arrival_delay().num_milliseconds() > threshold_millis)
    {
        let airline = flight.airline();
        match tally.iter_mut().find(|m| m.airline.name() == airline.name()) {
            Some(entry) => entry.misses += 1,
            None => tally.push(MissedLandings { airline, misses: 1 }),
        }
    }

    tally.into_iter().fold(None, |best, entry| match best {
        Some(best) if best.misses >= entry.misses => Some(best),
        _ => Some(entry),
    })
}

/// Destination with the most overnight stays
///
/// A flight is an overnight stay when its scheduled arrival is on a
/// different local date than its scheduled departure. Ties go to the
/// destination that was seen first.
pub fn destination_with_most_overnight_stays(flights: &[Flight]) -> Option<&str> {
    let mut stays: Vec<(&str, usize)> = Vec::new();

    for flight in flights.iter().filter(|f| f.is_overnight()) {
        match stays.iter_mut().find(|(to, _)| *to == flight.to()) {
            Some((_, count)) => *count += 1,
            None => stays.push((flight.to(), 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (destination, count) in stays {
        if best.map_or(true, |(_, max)| count > max) {
            best = Some((destination, count));
        }
    }

    best.map(|(destination, _)| destination)
}

/// Every departure and arrival code, deduplicated, in first-seen order
pub fn iata_codes(flights: &[Flight]) -> Vec<&str> {
    let mut seen = HashSet::new();
    flights
        .iter()
        .flat_map(|f| [f.from(), f.to()])
        .filter(|code| seen.insert(*code))
        .collect()
}

static PHONETIC_ALPHABET: phf::Map<char, &'static str> = phf_map! {
    'A' => "Alpha", 'B' => "Bravo", 'C' => "Charlie", 'D' => "Delta", 'E' => "Echo",
    'F' => "Foxtrot", 'G' => "Golf", 'H' => "Hotel", 'I' => "India", 'J' => "Juliett",
    'K' => "Kilo", 'L' => "Lima", 'M' => "Mike", 'N' => "November", 'O' => "Oscar",
    'P' => "Papa", 'Q' => "Quebec", 'R' => "Romeo", 'S' => "Sierra", 'T' => "Tango",
    'U' => "Uniform", 'V' => "Victor", 'W' => "Whiskey", 'X' => "X-ray", 'Y' => "Yankee",
    'Z' => "Zulu",
};

/// Spell `code` with the NATO phonetic alphabet, e.g. `"BUD"` -> `"Bravo Uniform Delta"`
///
/// Letters are matched case-insensitively. Any other visible character is
/// kept as it is, so `"A1"` gives `"Alpha 1"`. Whitespace is the one
/// exception and is dropped.
pub fn spell_using_phonetic_alphabet(code: &str) -> String {
    let words: Vec<String> = code
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match PHONETIC_ALPHABET.get(&c.to_ascii_uppercase()) {
            Some(word) => word.to_string(),
            None => c.to_string(),
        })
        .collect();

    words.join(" ")
}
