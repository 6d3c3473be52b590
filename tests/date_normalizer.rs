use eventExporter::models::event::EventRecord;
use eventExporter::service::date_normalizer::extract_event_datetime;
use serde_json::json;

fn event(value: serde_json::Value) -> EventRecord {
    serde_json::from_value(value).unwrap()
}

#[test]
fn full_timestamp_is_returned_unchanged() {
    let ev = event(json!({
        "name": "Show A",
        "dates": {"start": {
            "dateTime": "2025-10-05T19:00:00Z",
            "localDate": "2025-10-05",
            "localTime": "13:00:00"
        }}
    }));
    assert_eq!(ev.name(), "Show A");
    assert_eq!(extract_event_datetime(&ev), "2025-10-05T19:00:00Z");
}

#[test]
fn local_date_defaults_to_midnight() {
    let ev = event(json!({"name": "Show B", "dates": {"start": {"localDate": "2025-10-06"}}}));
    assert_eq!(extract_event_datetime(&ev), "2025-10-06T00:00:00");
}

#[test]
fn local_date_and_time_are_joined() {
    let ev = event(json!({"dates": {"start": {"localDate": "2025-10-06", "localTime": "19:30:00"}}}));
    assert_eq!(extract_event_datetime(&ev), "2025-10-06T19:30:00");
}

#[test]
fn empty_values_fall_through_like_missing_ones() {
    let ev = event(json!({"dates": {"start": {
        "dateTime": "",
        "localDate": "2025-10-06",
        "localTime": ""
    }}}));
    assert_eq!(extract_event_datetime(&ev), "2025-10-06T00:00:00");

    let ev = event(json!({"dates": {"start": {"localDate": "", "localTime": "19:30:00"}}}));
    assert_eq!(extract_event_datetime(&ev), "");
}

#[test]
fn missing_structures_yield_empty_string() {
    for value in [
        json!({}),
        json!({"dates": null}),
        json!({"dates": {}}),
        json!({"dates": {"start": {}}}),
        json!({"dates": {"start": {"localTime": "10:00:00"}}}),
        json!({"dates": {"start": {"dateTime": null}}}),
    ] {
        assert_eq!(extract_event_datetime(&event(value)), "");
    }
}

#[test]
fn unrelated_fields_are_ignored() {
    let ev = event(json!({
        "name": "Show C",
        "id": "G5vYZ9",
        "url": "https://example.test/event",
        "dates": {"start": {"dateTime": "2025-11-01T02:00:00Z", "noSpecificTime": false}, "status": {"code": "onsale"}}
    }));
    assert_eq!(extract_event_datetime(&ev), "2025-11-01T02:00:00Z");
}
