use chrono::NaiveDateTime;

/// Upstream maximum page size.
pub const DEFAULT_PAGE_SIZE: u32 = 200;
pub const DEFAULT_SORT: &str = "date,asc";

const WIRE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Ordered query parameters for the first discovery request.
pub type QueryParams = Vec<(String, String)>;

/// Builds the query string for the initial search request.
///
/// Nothing is validated here. A malformed date or country code goes out as-is
/// and comes back as an upstream error.
pub fn build_query_params(
    api_key: &str,
    start_date_time: &str,
    end_date_time: &str,
    city: &str,
    country_code: &str,
    size: Option<u32>,
    sort: Option<&str>,
) -> QueryParams {
    let size = size.unwrap_or(DEFAULT_PAGE_SIZE);
    let sort = sort.unwrap_or(DEFAULT_SORT);
    vec![
        ("apikey".to_string(), api_key.to_string()),
        ("city".to_string(), city.to_string()),
        ("countryCode".to_string(), country_code.to_string()),
        ("startDateTime".to_string(), start_date_time.to_string()),
        ("endDateTime".to_string(), end_date_time.to_string()),
        ("size".to_string(), size.to_string()),
        ("sort".to_string(), sort.to_string()),
    ]
}

/// Renders `dt` as `YYYY-MM-DDTHH:MM:SSZ`. The value is assumed to already be UTC.
pub fn format_wire_timestamp(dt: &NaiveDateTime) -> String {
    dt.format(WIRE_TIMESTAMP_FORMAT).to_string()
}
