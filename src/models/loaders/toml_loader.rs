use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tokio::fs;

use crate::error::ConfigError;
use crate::services::AirlineTable;

/// On-disk layout of an airline table
///
/// ```toml
/// [registrations]
/// "HA-AAA" = "Alpha Airlines"
/// ```
#[derive(Debug, Deserialize)]
struct AirlineTableFile {
    registrations: HashMap<String, String>,
}

/// Load a registration -> airline table from a TOML file
///
/// # Arguments
/// - `path`: TOML file with a `[registrations]` table
///
/// # Returns
/// The table, or `ConfigError` when the file is unreadable, invalid or empty
pub async fn load_airline_table(path: &Path) -> Result<AirlineTable, ConfigError> {
    let path_display = path.display().to_string();

    let content = fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::AirlineTableUnreadable {
            path: path_display.clone(),
            source,
        })?;

    let file: AirlineTableFile =
        toml::from_str(&content).map_err(|source| ConfigError::AirlineTableInvalid {
            path: path_display.clone(),
            source,
        })?;

    if file.registrations.is_empty() {
        return Err(ConfigError::AirlineTableEmpty { path: path_display });
    }

    tracing::info!(
        "loaded {} registrations from {}",
        file.registrations.len(),
        path_display
    );

    Ok(AirlineTable::new(file.registrations))
}
