use std::collections::HashMap;
use std::env;
use std::fs;

use crate::error::{ExportError, ExportResult};

pub const CONFIG_FILE_VAR: &str = "CONFIG_FILE";

pub const API_KEY: &str = "TICKETMASTER_API_KEY";
pub const CITY: &str = "EXPORT_CITY";
pub const COUNTRY_CODE: &str = "EXPORT_COUNTRY_CODE";
pub const OUTPUT: &str = "EXPORT_OUTPUT";
pub const ENDPOINT: &str = "DISCOVERY_ENDPOINT";
pub const LOG_LEVEL: &str = "LOG_LEVEL";

/// Dotenv-style key/value settings. Lookups fall back to the process environment.
#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    values: HashMap<String, String>,
}

impl AppConfig {
    /// Reads the file named by `CONFIG_FILE`, or returns an empty config if unset.
    pub fn load() -> ExportResult<Self> {
        match env::var(CONFIG_FILE_VAR) {
            Ok(path) => Self::from_file(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &str) -> ExportResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ExportError::Config(format!("Cannot read {}: {}", path, e)))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> ExportResult<Self> {
        let mut values = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(ExportError::Config(format!(
                    "Invalid config line {}: {}",
                    idx + 1,
                    line
                )));
            };
            let key = key.trim();
            let mut value = value.trim().to_string();
            if value.len() >= 2
                && ((value.starts_with('"') && value.ends_with('"'))
                    || (value.starts_with('\'') && value.ends_with('\'')))
            {
                value = value[1..value.len() - 1].to_string();
            }
            values.insert(key.to_string(), value);
        }
        Ok(Self { values })
    }

    /// File value first, then the environment variable of the same name.
    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .cloned()
            .or_else(|| env::var(key).ok())
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}
