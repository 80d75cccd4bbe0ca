//! Integration coverage for severity errors and record assembly.

use chrono::{TimeZone, Utc};
use scoped_log_domain::{
    BaseFieldPolicy, ErrorValue, LogFields, RecordInput, Severity, SeverityParseError,
    assemble_record,
};
use scoped_log_shared::ErrorEnvelope;
use serde_json::{Value, json};

#[test]
fn severity_errors_map_into_error_envelopes() -> Result<(), Box<dyn std::error::Error>> {
    let error: SeverityParseError = Severity::parse("verbose")
        .err()
        .ok_or("verbose parsed as a severity")?;

    let envelope: ErrorEnvelope = error.into();
    assert_eq!(envelope.code.namespace(), "domain");
    assert_eq!(envelope.code.code(), "invalid_severity");
    assert_eq!(
        envelope.metadata.get("value"),
        Some(&"verbose".to_string())
    );
    Ok(())
}

fn record_with(error: Option<ErrorValue<'_>>) -> Value {
    let timestamp = Utc
        .with_ymd_and_hms(2026, 1, 21, 14, 30, 45)
        .single()
        .unwrap_or_default();
    let metadata: LogFields = [("apiUrl".to_string(), json!("x"))].into_iter().collect();
    assemble_record(RecordInput {
        timestamp,
        namespace: "Graph",
        message: "Failed to fetch graph info",
        metadata: Some(metadata),
        error,
        policy: BaseFieldPolicy::default(),
    })
    .into_value()
}

#[test]
fn error_field_follows_normalization_rules() {
    let cases = [
        (json!({"message": "x"}), Some(json!({"message": "x"}))),
        (json!({"foo": 1}), Some(json!({"message": "{\"foo\":1}"}))),
        (json!("boom"), Some(json!({"message": "boom"}))),
        (json!(42), Some(json!({"message": "42"}))),
        (json!(null), None),
        (json!(false), None),
        (json!(0), None),
    ];

    for (input, expected) in cases {
        let record = record_with(Some(ErrorValue::value(input.clone())));
        assert_eq!(record.get("error").cloned(), expected, "input: {input}");
        assert_eq!(record["apiUrl"], json!("x"));
    }
}

#[test]
fn absent_error_leaves_exactly_base_and_metadata_keys() {
    let record = record_with(None);
    let keys: Vec<&str> = record
        .as_object()
        .map(|fields| fields.keys().map(String::as_str).collect())
        .unwrap_or_default();
    assert_eq!(keys, ["ts", "ns", "msg", "apiUrl"]);
    assert_eq!(record["ts"], json!("2026-01-21T14:30:45.000Z"));
}
