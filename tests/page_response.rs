use eventExporter::models::event::PageResponse;
use serde_json::json;

fn page(value: serde_json::Value) -> PageResponse {
    serde_json::from_value(value).unwrap()
}

#[test]
fn reported_errors_reads_errors_key() {
    let p = page(json!({"errors": [{"code": "DIS1004"}]}));
    assert_eq!(p.reported_errors(), Some(&json!([{"code": "DIS1004"}])));
}

#[test]
fn reported_errors_reads_fault_key() {
    let p = page(json!({"fault": {"faultstring": "Invalid ApiKey"}}));
    assert_eq!(
        p.reported_errors(),
        Some(&json!({"faultstring": "Invalid ApiKey"}))
    );
}

#[test]
fn reported_errors_prefers_errors_over_fault() {
    let p = page(json!({"errors": ["e"], "fault": {"faultstring": "f"}}));
    assert_eq!(p.reported_errors(), Some(&json!(["e"])));
}

#[test]
fn null_errors_count_as_absent() {
    let p = page(json!({"errors": null, "fault": {"faultstring": "f"}}));
    assert_eq!(p.reported_errors(), Some(&json!({"faultstring": "f"})));

    let p = page(json!({"errors": null, "fault": null}));
    assert_eq!(p.reported_errors(), None);

    assert_eq!(page(json!({})).reported_errors(), None);
}

#[test]
fn page_block_of_any_shape_is_accepted() {
    let p: PageResponse = serde_json::from_str(
        r#"{"_embedded":{"events":[{"name":"A"}]},"page":{"number":"0"}}"#,
    )
    .unwrap();
    assert_eq!(p.events().len(), 1);
    assert_eq!(p.events()[0].name(), "A");
    assert_eq!(p.page, Some(json!({"number": "0"})));
}

#[test]
fn empty_next_href_ends_pagination() {
    let p = page(json!({"_links": {"next": {"href": ""}}}));
    assert_eq!(p.next_href(), None);
    assert!(p.events().is_empty());
}
