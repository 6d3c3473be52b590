use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::clients::discovery_client::{DISCOVERY_ENDPOINT, DiscoveryClient, RawPage};
use crate::error::{ExportError, ExportResult};
use crate::models::event::PageResponse;
use crate::service::date_normalizer::extract_event_datetime;
use crate::service::params::{QueryParams, build_query_params, format_wire_timestamp};

pub const DEFAULT_OUTPUT: &str = "events.csv";
pub const CSV_HEADER: [&str; 2] = ["event_name", "event_datetime"];

const HTTP_OK: u16 = 200;

/// Everything one export run needs.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub api_key: String,
    pub city: String,
    pub country_code: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub page_size: Option<u32>,
    pub sort: Option<String>,
    pub endpoint: String,
    pub output: PathBuf,
}

impl ExportRequest {
    pub fn new(
        api_key: impl Into<String>,
        city: impl Into<String>,
        country_code: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            city: city.into(),
            country_code: country_code.into(),
            start,
            end,
            page_size: None,
            sort: None,
            endpoint: DISCOVERY_ENDPOINT.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    pub fn query_params(&self) -> QueryParams {
        build_query_params(
            &self.api_key,
            &format_wire_timestamp(&self.start),
            &format_wire_timestamp(&self.end),
            &self.city,
            &self.country_code,
            self.page_size,
            self.sort.as_deref(),
        )
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages: usize,
    pub rows: usize,
}

/// Where the next request goes. Only `Initial` carries query parameters.
enum Cursor {
    Initial,
    Paging(Url),
}

pub struct EventExporter<C: DiscoveryClient> {
    client: C,
}

impl<C: DiscoveryClient> EventExporter<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Creates (or truncates) `request.output` and streams every page into it.
    pub async fn export_to_path(&self, request: &ExportRequest) -> ExportResult<ExportSummary> {
        let file = File::create(&request.output)?;
        let summary = self.export(request, file).await?;
        info!(output = %request.output.display(), "Wrote CSV file");
        Ok(summary)
    }

    /// Streams every page of the search into `sink` as CSV.
    ///
    /// The header goes out first. The sink is flushed on both success and
    /// failure, so rows from pages fetched before an error are kept.
    pub async fn export<W: Write>(
        &self,
        request: &ExportRequest,
        sink: W,
    ) -> ExportResult<ExportSummary> {
        let mut writer = csv::Writer::from_writer(sink);
        writer.write_record(CSV_HEADER)?;

        let result = self.stream_pages(request, &mut writer).await;
        let flushed = writer.flush();

        let summary = result?;
        flushed?;
        info!(
            pages = summary.pages,
            rows = summary.rows,
            "Export finished"
        );
        Ok(summary)
    }

    async fn stream_pages<W: Write>(
        &self,
        request: &ExportRequest,
        writer: &mut csv::Writer<W>,
    ) -> ExportResult<ExportSummary> {
        let base = Url::parse(&request.endpoint).map_err(|e| ExportError::InvalidLink {
            link: request.endpoint.clone(),
            reason: e.to_string(),
        })?;
        let params = request.query_params();
        let mut cursor = Cursor::Initial;
        let mut summary = ExportSummary::default();

        loop {
            let raw = match &cursor {
                Cursor::Initial => self.client.get_page(base.as_str(), Some(&params)).await?,
                Cursor::Paging(url) => self.client.get_page(url.as_str(), None).await?,
            };
            let page = decode_page(raw, matches!(cursor, Cursor::Initial))?;

            let rows = write_page(writer, &page)?;
            summary.pages += 1;
            summary.rows += rows;

            let next = page.next_href();
            debug!(
                page = summary.pages,
                rows,
                has_next = next.is_some(),
                "Page written"
            );

            match next {
                Some(href) => cursor = Cursor::Paging(resolve_link(&base, href)?),
                None => break,
            }
        }

        Ok(summary)
    }
}

/// Checks the status and parses the body. First-page diagnostics are logged here.
fn decode_page(raw: RawPage, first_page: bool) -> ExportResult<PageResponse> {
    if raw.status != HTTP_OK {
        return Err(ExportError::UpstreamRequestFailure {
            status: raw.status,
            body: raw.body,
        });
    }

    let body: Value = serde_json::from_str(&raw.body)?;
    if !first_page {
        return Ok(serde_json::from_value(body)?);
    }

    let keys: Vec<String> = body
        .as_object()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default();
    let has_embedded = keys.iter().any(|k| k == "_embedded");
    let page: PageResponse = serde_json::from_value(body)?;

    debug!(url = %raw.url, "Request URL");
    debug!(?keys, "Top-level keys");
    debug!(page_info = ?page.page, has_embedded, "Page info");
    if let Some(errors) = page.reported_errors() {
        warn!(%errors, "API reported errors");
    }
    Ok(page)
}

fn write_page<W: Write>(writer: &mut csv::Writer<W>, page: &PageResponse) -> ExportResult<usize> {
    let events = page.events();
    for event in events {
        let when = extract_event_datetime(event);
        writer.write_record([event.name(), when.as_str()])?;
    }
    // rows reach the sink before the next request goes out
    writer.flush()?;
    Ok(events.len())
}

/// Absolute links are used as-is; relative ones are joined onto the endpoint.
fn resolve_link(base: &Url, href: &str) -> ExportResult<Url> {
    base.join(href).map_err(|e| ExportError::InvalidLink {
        link: href.to_string(),
        reason: e.to_string(),
    })
}
