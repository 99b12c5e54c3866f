//! Settings for the demo page.
//!
//! Stored as JSON in the platform config directory. A missing file means
//! defaults; a malformed one is an error.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use datatable::ColumnSpec;
use log::LevelFilter;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed settings in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown log level '{0}'")]
    InvalidLogLevel(String),
}

/// Page settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DemoSettings {
    /// Format specifiers keyed by property name, for columns without their
    /// own format.
    pub column_formats: BTreeMap<String, String>,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    /// Replaces the built-in column layout when set. Templates are still
    /// attached by property name.
    pub columns: Option<Vec<ColumnSpec>>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        let column_formats = [
            ("Salary", "C2"),
            ("JoiningDate", "dd-MMM-yyyy"),
            ("YearsAtCompany", "N0"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            column_formats,
            log_level: "info".to_string(),
            columns: None,
        }
    }
}

impl DemoSettings {
    /// Load settings from `path`, falling back to defaults if it does not
    /// exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        serde_json::from_str(&contents).map_err(|source| SettingsError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn level_filter(&self) -> Result<LevelFilter, SettingsError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| SettingsError::InvalidLogLevel(self.log_level.clone()))
    }
}
