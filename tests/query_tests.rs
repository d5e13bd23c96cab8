//! Integration tests for the query layer.
//!
//! Tests cover:
//! - JSONCompact response parsing
//! - The fixed report query text
//! - Transport failure classification

use promoter_report::cli::commands::fetch::PROMOTERS_QUERY;
use promoter_report::models::config::ClickHouseConfig;
use promoter_report::services::clickhouse::{parse_json_compact, ClickHouseClient};
use promoter_report::Error;

// ========== RESPONSE PARSING TESTS ==========

const SAMPLE_RESPONSE: &str = r#"{
    "meta": [
        {"name": "promoter_code", "type": "String"},
        {"name": "name", "type": "String"},
        {"name": "cellphone", "type": "String"},
        {"name": "city_id", "type": "UInt32"},
        {"name": "birth_date", "type": "String"},
        {"name": "membership_date", "type": "String"}
    ],
    "data": [
        ["P-1001", "Ali Rezaei", "09120000001", 1, "1990-04-12", "2021-01-05"],
        ["P-1002", "Sara Ahmadi", "09120000002", 5, "1988-11-30", "2020-06-17"]
    ],
    "rows": 2,
    "statistics": {"elapsed": 0.001, "rows_read": 2, "bytes_read": 128}
}"#;

#[test]
fn test_parse_response_rows_and_columns() {
    let result = parse_json_compact(SAMPLE_RESPONSE).unwrap();

    assert_eq!(result.rows.len(), 2);
    assert_eq!(
        result.column_names(),
        vec![
            "promoter_code",
            "name",
            "cellphone",
            "city_id",
            "birth_date",
            "membership_date"
        ]
    );
}

#[test]
fn test_parse_response_preserves_cell_order() {
    let result = parse_json_compact(SAMPLE_RESPONSE).unwrap();

    let first = &result.rows[0];
    assert_eq!(first[0], serde_json::json!("P-1001"));
    assert_eq!(first[3], serde_json::json!(1));
    assert_eq!(first[4], serde_json::json!("1990-04-12"));
}

#[test]
fn test_parse_empty_result() {
    let body = r#"{"meta": [{"name": "promoter_code", "type": "String"}], "data": [], "rows": 0}"#;
    let result = parse_json_compact(body).unwrap();

    assert_eq!(result.columns.len(), 1);
    assert!(result.rows.is_empty());
}

#[test]
fn test_parse_rejects_non_json_body() {
    assert!(parse_json_compact("DB::Exception: something broke").is_err());
}

#[test]
fn test_parse_is_deterministic() {
    let first = parse_json_compact(SAMPLE_RESPONSE).unwrap();
    let second = parse_json_compact(SAMPLE_RESPONSE).unwrap();

    assert_eq!(first.rows, second.rows);
    assert_eq!(first.column_names(), second.column_names());
}

// ========== QUERY TEXT TESTS ==========

#[test]
fn test_query_selects_all_six_columns() {
    for column in [
        "promoter_code",
        "name",
        "cellphone",
        "city_id",
        "birth_date",
        "membership_date",
    ] {
        assert!(PROMOTERS_QUERY.contains(column), "missing {}", column);
    }
}

#[test]
fn test_query_filters_invalid_birth_dates() {
    assert!(PROMOTERS_QUERY.contains("birth_date IS NOT NULL"));
    assert!(PROMOTERS_QUERY.contains("birth_date != ''"));
    assert!(PROMOTERS_QUERY.contains("birth_date != '0000-00-00'"));
}

#[test]
fn test_query_is_limited_to_ten_rows() {
    assert!(PROMOTERS_QUERY.contains("LIMIT 10"));
}

#[test]
fn test_query_targets_the_promoters_view() {
    assert!(PROMOTERS_QUERY.contains("FROM dwh.snapp_promoters_info_view"));
}

// ========== TRANSPORT FAILURE TESTS ==========

/// A client pointed at a port nothing listens on, so every request fails
/// at the transport layer.
fn unreachable_client() -> ClickHouseClient {
    ClickHouseClient::new(ClickHouseConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        timeout_secs: 2,
        ..ClickHouseConfig::default()
    })
}

#[tokio::test]
async fn test_ping_unreachable_host_is_connection_error() {
    let err = unreachable_client().ping().await.unwrap_err();
    assert!(matches!(err, Error::Connection(_)));
}

#[tokio::test]
async fn test_execute_against_unreachable_host_is_connection_error() {
    let err = unreachable_client()
        .execute(PROMOTERS_QUERY)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Connection(_)));
}
