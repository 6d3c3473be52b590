use chrono::NaiveDate;
use eventExporter::service::params::{build_query_params, format_wire_timestamp};

#[test]
fn builds_params_in_order_with_defaults() {
    let params = build_query_params(
        "key",
        "2025-10-01T00:00:00Z",
        "2025-12-01T00:00:00Z",
        "Calgary",
        "CA",
        None,
        None,
    );
    let expected: Vec<(String, String)> = [
        ("apikey", "key"),
        ("city", "Calgary"),
        ("countryCode", "CA"),
        ("startDateTime", "2025-10-01T00:00:00Z"),
        ("endDateTime", "2025-12-01T00:00:00Z"),
        ("size", "200"),
        ("sort", "date,asc"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    assert_eq!(params, expected);
}

#[test]
fn overrides_size_and_sort() {
    let params = build_query_params("k", "a", "b", "Paris", "FR", Some(50), Some("name,desc"));
    assert!(params.contains(&("size".to_string(), "50".to_string())));
    assert!(params.contains(&("sort".to_string(), "name,desc".to_string())));
}

#[test]
fn malformed_inputs_pass_through() {
    let params = build_query_params("", "not-a-date", "", "", "XX", None, None);
    assert!(params.contains(&("startDateTime".to_string(), "not-a-date".to_string())));
    assert!(params.contains(&("apikey".to_string(), String::new())));
}

#[test]
fn wire_timestamp_uses_z_suffix() {
    let dt = NaiveDate::from_ymd_opt(2025, 8, 10)
        .unwrap()
        .and_hms_opt(7, 5, 9)
        .unwrap();
    assert_eq!(format_wire_timestamp(&dt), "2025-08-10T07:05:09Z");
}
