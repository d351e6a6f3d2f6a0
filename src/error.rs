use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Input file could not be opened or read
    #[error("file error: {0}")]
    File(#[from] FileError),
    /// A single flight record failed, annotated with its 1-based line number
    #[error("line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: RecordError,
    },
    /// Airport reference lookup failed
    #[error("airport lookup error: {0}")]
    Airport(#[from] AirportError),
    /// Configuration error
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// File access errors
#[derive(Debug, Error)]
pub enum FileError {
    /// Path is missing or cannot be opened for reading
    #[error("cannot open {path}: {source}")]
    AccessFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Reading failed after the file was opened
    #[error("failed reading {path} at line {line}: {source}")]
    ReadFailed {
        path: String,
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Errors produced while turning one raw line into a `Flight`
#[derive(Debug, Error)]
pub enum RecordError {
    /// Not a JSON object, a required field is absent, or a field has the wrong shape
    #[error("malformed flight record: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },
    /// The airline resolver has no mapping for this registration
    #[error("missing registration mapping for '{registration}'")]
    UnknownRegistration { registration: String },
}

/// Airport reference errors
#[derive(Debug, Error)]
pub enum AirportError {
    /// HTTP request failed
    #[error("request to {url} failed: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// Payload is not the expected airport dataset shape
    #[error("cannot decode airport data: {source}")]
    DecodeFailed {
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable is set but cannot be parsed
    #[error("environment variable {var_name} has value '{value}', expected {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// Airline table file could not be read
    #[error("cannot read airline table {path}: {source}")]
    AirlineTableUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Airline table file is not valid TOML
    #[error("cannot parse airline table {path}: {source}")]
    AirlineTableInvalid {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// Airline table file has no registrations
    #[error("airline table {path} has no registrations")]
    AirlineTableEmpty { path: String },
}

// ========== Conversions ==========

impl From<serde_json::Error> for RecordError {
    fn from(source: serde_json::Error) -> Self {
        RecordError::Malformed { source }
    }
}

// ========== Convenience constructors and predicates ==========

impl AppError {
    /// Create a file access error
    pub fn file_access_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::AccessFailed {
            path: path.into(),
            source,
        })
    }

    /// Attach a line number to a record error
    pub fn record(line: usize, source: RecordError) -> Self {
        AppError::Record { line, source }
    }

    pub fn is_file_access(&self) -> bool {
        matches!(self, AppError::File(_))
    }

    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            AppError::Record {
                source: RecordError::Malformed { .. },
                ..
            }
        )
    }

    pub fn is_unknown_registration(&self) -> bool {
        matches!(
            self,
            AppError::Record {
                source: RecordError::UnknownRegistration { .. },
                ..
            }
        )
    }
}

// ========== Result alias ==========

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_follow_record_kind() {
        let malformed = AppError::record(
            3,
            serde_json::from_str::<serde_json::Value>("{").unwrap_err().into(),
        );
        assert!(malformed.is_malformed_input());
        assert!(!malformed.is_unknown_registration());
        assert!(malformed.to_string().starts_with("line 3:"));

        let unknown = AppError::record(
            1,
            RecordError::UnknownRegistration {
                registration: "N-123".to_string(),
            },
        );
        assert!(unknown.is_unknown_registration());
        assert!(unknown.to_string().contains("N-123"));

        let missing = AppError::file_access_failed(
            "nope.jsonl",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(missing.is_file_access());
        assert!(!missing.is_malformed_input());
    }
}
