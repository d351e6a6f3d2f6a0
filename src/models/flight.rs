use chrono::{DateTime, Duration, FixedOffset};

/// Airline, identified by its name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Airline {
    name: String,
}

impl Airline {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Aircraft with the airline it was resolved to at parse time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airplane {
    registration: String,
    airline: Airline,
}

impl Airplane {
    pub fn new(registration: impl Into<String>, airline: Airline) -> Self {
        Self {
            registration: registration.into(),
            airline,
        }
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }

    pub fn airline(&self) -> &Airline {
        &self.airline
    }
}

/// One flight event
///
/// Timestamps keep the offset they were given in, so calendar dates are
/// the local dates of the input rather than UTC dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    airplane: Airplane,
    from: String,
    to: String,
    scheduled_start: DateTime<FixedOffset>,
    scheduled_end: DateTime<FixedOffset>,
    actual_start: DateTime<FixedOffset>,
    actual_end: DateTime<FixedOffset>,
}

impl Flight {
    pub fn new(
        airplane: Airplane,
        from: impl Into<String>,
        to: impl Into<String>,
        scheduled_start: DateTime<FixedOffset>,
        scheduled_end: DateTime<FixedOffset>,
        actual_start: DateTime<FixedOffset>,
        actual_end: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            airplane,
            from: from.into(),
            to: to.into(),
            scheduled_start,
            scheduled_end,
            actual_start,
            actual_end,
        }
    }

    pub fn airplane(&self) -> &Airplane {
        &self.airplane
    }

    pub fn airline(&self) -> &Airline {
        self.airplane.airline()
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn scheduled_start(&self) -> DateTime<FixedOffset> {
        self.scheduled_start
    }

    pub fn scheduled_end(&self) -> DateTime<FixedOffset> {
        self.scheduled_end
    }

    pub fn actual_start(&self) -> DateTime<FixedOffset> {
        self.actual_start
    }

    pub fn actual_end(&self) -> DateTime<FixedOffset> {
        self.actual_end
    }

    /// Time actually spent between departure and arrival
    pub fn actual_duration(&self) -> Duration {
        self.actual_end - self.actual_start
    }

    /// How late the flight landed compared to its schedule (negative when early)
    pub fn arrival_delay(&self) -> Duration {
        self.actual_end - self.scheduled_end
    }

    /// Scheduled arrival falls on a different local calendar day than the scheduled departure
    pub fn is_overnight(&self) -> bool {
        self.scheduled_start.date_naive() != self.scheduled_end.date_naive()
    }
}
