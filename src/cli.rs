use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use clap::Parser;
use tracing::warn;

use crate::clients::discovery_client::{DISCOVERY_ENDPOINT, HttpDiscoveryClient};
use crate::config::{self, AppConfig};
use crate::error::ExportResult;
use crate::service::exporter::{DEFAULT_OUTPUT, EventExporter, ExportRequest, ExportSummary};

const DEFAULT_CITY: &str = "Calgary";
const DEFAULT_COUNTRY_CODE: &str = "CA";

/// Export discovery API events for a city and date range to CSV.
#[derive(Parser, Debug, Default)]
#[command(version)]
pub struct Cli {
    /// City to search in
    #[arg(long)]
    pub city: Option<String>,

    /// ISO 3166-1 alpha-2 country code
    #[arg(long)]
    pub country: Option<String>,

    /// Range start, YYYY-MM-DDTHH:MM:SS (UTC)
    #[arg(long)]
    pub start: Option<NaiveDateTime>,

    /// Range end, YYYY-MM-DDTHH:MM:SS (UTC)
    #[arg(long)]
    pub end: Option<NaiveDateTime>,

    /// Output CSV path
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Results per page (upstream maximum is 200)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Sort directive, e.g. "date,asc"
    #[arg(long)]
    pub sort: Option<String>,

    /// Log request and page diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log level for this run: debug with `--verbose`, otherwise `LOG_LEVEL` or info.
    pub fn log_level(&self, config: &AppConfig) -> String {
        if self.verbose {
            "debug".to_string()
        } else {
            config.get_or(config::LOG_LEVEL, "info")
        }
    }

    /// Flags override config, config overrides the built-in defaults.
    pub fn build_request(&self, config: &AppConfig) -> ExportRequest {
        let api_key = config.get(config::API_KEY).unwrap_or_default();
        if api_key.is_empty() {
            warn!("{} is not set; the API will reject the request", config::API_KEY);
        }

        let city = self
            .city
            .clone()
            .unwrap_or_else(|| config.get_or(config::CITY, DEFAULT_CITY));
        let country_code = self
            .country
            .clone()
            .unwrap_or_else(|| config.get_or(config::COUNTRY_CODE, DEFAULT_COUNTRY_CODE));

        let mut request = ExportRequest::new(
            api_key,
            city,
            country_code,
            self.start.unwrap_or_else(default_start),
            self.end.unwrap_or_else(default_end),
        );
        request.page_size = self.page_size;
        request.sort = self.sort.clone();
        request.endpoint = config.get_or(config::ENDPOINT, DISCOVERY_ENDPOINT);
        request.output = self
            .out
            .clone()
            .unwrap_or_else(|| PathBuf::from(config.get_or(config::OUTPUT, DEFAULT_OUTPUT)));
        request
    }
}

fn default_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 10, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

fn default_end() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 12, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Runs one export against the live API.
pub async fn run(request: &ExportRequest) -> ExportResult<ExportSummary> {
    let exporter = EventExporter::new(HttpDiscoveryClient::new());
    exporter.export_to_path(request).await
}
