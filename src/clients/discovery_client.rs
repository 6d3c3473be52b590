use async_trait::async_trait;

use crate::error::ExportResult;
use crate::service::params::QueryParams;

pub const DISCOVERY_ENDPOINT: &str = "https://app.ticketmaster.com/discovery/v2/events.json";

/// What came back from one GET, before any interpretation.
#[derive(Debug, Clone)]
pub struct RawPage {
    pub status: u16,
    /// Final request URL, query string included.
    pub url: String,
    pub body: String,
}

#[async_trait]
pub trait DiscoveryClient: Send + Sync {
    /// GET `url`, appending `params` to the query string when given.
    async fn get_page(&self, url: &str, params: Option<&QueryParams>) -> ExportResult<RawPage>;
}

pub struct HttpDiscoveryClient {
    http: reqwest::Client,
}

impl HttpDiscoveryClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

impl Default for HttpDiscoveryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DiscoveryClient for HttpDiscoveryClient {
    async fn get_page(&self, url: &str, params: Option<&QueryParams>) -> ExportResult<RawPage> {
        let mut request = self.http.get(url);
        if let Some(params) = params {
            request = request.query(params);
        }
        let response = request.send().await?;

        let status = response.status().as_u16();
        let url = response.url().to_string();
        let body = response.text().await?; // read the body once, even on errors

        Ok(RawPage { status, url, body })
    }
}
