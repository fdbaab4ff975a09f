//! Comprehensive integration tests for the Expense Settlement Engine.
//!
//! This test suite covers all settlement scenarios including:
//! - Pure on-site months (company and client days)
//! - Pure home-office months
//! - Mixed days (on-site precedence)
//! - Holiday and leave days
//! - Multiple on-site entries per date (split days)
//! - Memo-driven longest-match fare resolution
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use seisan_engine::api::{AppState, create_router};

// =============================================================================
// Test Helpers
// =============================================================================

const LEDGER_HEADER: &str = "日付,出発,到着,往復,金額/Km,客先請求,申請理由,交通機関,備考";

fn create_test_state() -> AppState {
    AppState::new("./config/seisan/rates.yaml", "./templates/expense.j2")
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn post_seisan(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/seisan")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Builds a TSV attendance sheet from (date, code, start, memo) rows.
fn attendance(rows: &[(&str, &str, &str, &str)]) -> String {
    let mut tsv = String::from("年月日\t勤務区分\t開始\tメモ\n");
    for (date, code, start, memo) in rows {
        tsv.push_str(&format!("{}\t{}\t{}\t{}\n", date, code, start, memo));
    }
    tsv
}

/// Builds a request routed at the verbatim test fixtures: the rates under
/// tests/data and a template that renders the raw CSV and nothing else.
fn create_request(attendance_text: &str) -> Value {
    json!({
        "attendance_text": attendance_text,
        "config_path": "tests/data/rates.yaml",
        "template_path": "tests/data/expense.j2"
    })
}

/// Returns the report of a successful settlement as CSV lines.
fn report_lines(body: &Value) -> Vec<String> {
    body["report"]
        .as_str()
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn assert_row_count(body: &Value, expected: u64) {
    assert_eq!(
        body["row_count"].as_u64().unwrap(),
        expected,
        "unexpected row_count in {body}"
    );
}

// =============================================================================
// SECTION 1: On-site days
// =============================================================================

#[tokio::test]
async fn test_company_onsite_day_yields_commute_row() {
    let router = create_router_for_test();
    let tsv = attendance(&[("20240401", "10", "09:00", "")]);

    let (status, body) = post_seisan(router, create_request(&tsv)).await;

    assert_eq!(status, StatusCode::OK);
    assert_row_count(&body, 1);
    let lines = report_lines(&body);
    assert_eq!(lines[0], LEDGER_HEADER);
    assert_eq!(lines[1], "2024/04/01,自宅,本社,往復,500,なし,通勤費(通常勤務地),電車,");
}

#[tokio::test]
async fn test_client_onsite_day_uses_customer_default() {
    let router = create_router_for_test();
    let tsv = attendance(&[("20240401", "01", "09:00", "")]);

    let (status, body) = post_seisan(router, create_request(&tsv)).await;

    assert_eq!(status, StatusCode::OK);
    let lines = report_lines(&body);
    assert_eq!(lines[1], "2024/04/01,自宅,東京,往復,800,なし,顧客先交通費,電車,");
}

#[tokio::test]
async fn test_multiple_onsite_entries_yield_multiple_rows() {
    let router = create_router_for_test();
    let tsv = attendance(&[
        ("20240401", "10", "09:00", ""),
        ("20240401", "01", "14:00", ""),
    ]);

    let (status, body) = post_seisan(router, create_request(&tsv)).await;

    assert_eq!(status, StatusCode::OK);
    assert_row_count(&body, 2);
    let lines = report_lines(&body);
    assert!(lines[1].contains("通勤費(通常勤務地)"));
    assert!(lines[2].contains("顧客先交通費"));
}

#[tokio::test]
async fn test_memo_longest_match_selects_fare() {
    let router = create_router_for_test();
    let tsv = attendance(&[("20240401", "01", "09:00", "横浜オフィスに直行")]);

    let (status, body) = post_seisan(router, create_request(&tsv)).await;

    assert_eq!(status, StatusCode::OK);
    let lines = report_lines(&body);
    assert_eq!(lines[1], "2024/04/01,自宅,横浜,往復,650,なし,顧客先交通費,電車,");
}

#[tokio::test]
async fn test_memo_without_known_location_falls_back_to_default() {
    let router = create_router_for_test();
    let tsv = attendance(&[("20240401", "01", "09:00", "名古屋出張")]);

    let (status, body) = post_seisan(router, create_request(&tsv)).await;

    assert_eq!(status, StatusCode::OK);
    let lines = report_lines(&body);
    assert!(lines[1].contains("東京"));
    assert!(lines[1].contains("800"));
}

// =============================================================================
// SECTION 2: Home-office days
// =============================================================================

#[tokio::test]
async fn test_home_office_day_yields_flat_charge() {
    let router = create_router_for_test();
    let tsv = attendance(&[("20240402", "11", "09:00", "")]);

    let (status, body) = post_seisan(router, create_request(&tsv)).await;

    assert_eq!(status, StatusCode::OK);
    assert_row_count(&body, 1);
    let lines = report_lines(&body);
    assert_eq!(lines[1], "2024/04/02,,,--,300,なし,在宅チャージ,,");
}

#[tokio::test]
async fn test_many_home_entries_one_charge() {
    let router = create_router_for_test();
    let tsv = attendance(&[
        ("20240402", "11", "09:00", ""),
        ("20240402", "02", "13:00", ""),
        ("20240402", "11", "16:00", ""),
    ]);

    let (status, body) = post_seisan(router, create_request(&tsv)).await;

    assert_eq!(status, StatusCode::OK);
    assert_row_count(&body, 1);
}

#[tokio::test]
async fn test_client_offsite_also_charges_home_rate() {
    let router = create_router_for_test();
    let tsv = attendance(&[("20240402", "02", "09:00", "")]);

    let (status, body) = post_seisan(router, create_request(&tsv)).await;

    assert_eq!(status, StatusCode::OK);
    let lines = report_lines(&body);
    assert!(lines[1].contains("在宅チャージ"));
}

// =============================================================================
// SECTION 3: Mixed and holiday days
// =============================================================================

#[tokio::test]
async fn test_mixed_day_bills_onsite_only() {
    let router = create_router_for_test();
    let tsv = attendance(&[
        ("20240401", "11", "09:00", ""),
        ("20240401", "01", "13:00", ""),
    ]);

    let (status, body) = post_seisan(router, create_request(&tsv)).await;

    assert_eq!(status, StatusCode::OK);
    assert_row_count(&body, 1);
    let lines = report_lines(&body);
    assert!(lines[1].contains("顧客先交通費"));
    assert!(!body["report"].as_str().unwrap().contains("在宅チャージ"));
}

#[tokio::test]
async fn test_holidays_yield_empty_ledger() {
    let router = create_router_for_test();
    let tsv = attendance(&[
        ("20240403", "04", "", ""),
        ("20240404", "03", "", ""),
        ("20240405", "06", "", ""),
        ("20240406", "", "", ""),
    ]);

    let (status, body) = post_seisan(router, create_request(&tsv)).await;

    assert_eq!(status, StatusCode::OK);
    assert_row_count(&body, 0);
    assert_eq!(body["report"].as_str().unwrap(), format!("{}\n", LEDGER_HEADER));
}

#[tokio::test]
async fn test_half_holiday_with_home_work_charges_home_rate() {
    let router = create_router_for_test();
    let tsv = attendance(&[
        ("20240401", "05", "", ""),
        ("20240401", "11", "13:00", ""),
    ]);

    let (status, body) = post_seisan(router, create_request(&tsv)).await;

    assert_eq!(status, StatusCode::OK);
    assert_row_count(&body, 1);
    assert!(body["report"].as_str().unwrap().contains("在宅チャージ"));
}

#[tokio::test]
async fn test_unknown_code_is_skipped_not_rejected() {
    let router = create_router_for_test();
    let tsv = attendance(&[("20240401", "99", "09:00", "")]);

    let (status, body) = post_seisan(router, create_request(&tsv)).await;

    assert_eq!(status, StatusCode::OK);
    assert_row_count(&body, 0);
}

// =============================================================================
// SECTION 4: Whole-month scenarios
// =============================================================================

#[tokio::test]
async fn test_one_month_mixed_attendance() {
    let router = create_router_for_test();
    let tsv = attendance(&[
        ("20240401", "10", "09:00", ""),
        ("20240402", "11", "09:00", ""),
        ("20240403", "01", "09:00", "横浜オフィス"),
        ("20240404", "04", "", ""),
        ("20240405", "10", "09:00", ""),
        ("20240406", "", "", ""),
        ("20240407", "", "", ""),
        ("20240408", "11", "09:00", ""),
        ("20240409", "01", "09:00", ""),
        ("20240410", "03", "", ""),
    ]);

    let (status, body) = post_seisan(router, create_request(&tsv)).await;

    assert_eq!(status, StatusCode::OK);
    // Billable days: 04-01, 04-02, 04-03, 04-05, 04-08, 04-09
    assert_row_count(&body, 6);

    let lines = report_lines(&body);
    assert_eq!(lines[1], "2024/04/01,自宅,本社,往復,500,なし,通勤費(通常勤務地),電車,");
    assert_eq!(lines[2], "2024/04/02,,,--,300,なし,在宅チャージ,,");
    assert_eq!(lines[3], "2024/04/03,自宅,横浜,往復,650,なし,顧客先交通費,電車,");
    assert_eq!(lines[4], "2024/04/05,自宅,本社,往復,500,なし,通勤費(通常勤務地),電車,");
    assert_eq!(lines[5], "2024/04/08,,,--,300,なし,在宅チャージ,,");
    assert_eq!(lines[6], "2024/04/09,自宅,東京,往復,800,なし,顧客先交通費,電車,");
}

#[tokio::test]
async fn test_ledger_order_follows_first_seen_dates() {
    let router = create_router_for_test();
    let tsv = attendance(&[
        ("20240402", "10", "09:00", ""),
        ("20240401", "11", "09:00", ""),
        ("20240402", "01", "14:00", ""),
    ]);

    let (status, body) = post_seisan(router, create_request(&tsv)).await;

    assert_eq!(status, StatusCode::OK);
    let lines = report_lines(&body);
    assert!(lines[1].starts_with("2024/04/02"));
    assert!(lines[2].starts_with("2024/04/02"));
    assert!(lines[3].starts_with("2024/04/01"));
}

#[tokio::test]
async fn test_default_paths_render_shipped_template() {
    let router = create_router_for_test();
    let tsv = attendance(&[("20240401", "10", "09:00", "")]);

    // No overrides: the shipped config and template are used.
    let (status, body) = post_seisan(router, json!({ "attendance_text": tsv })).await;

    assert_eq!(status, StatusCode::OK);
    let report = body["report"].as_str().unwrap();
    assert!(report.contains("交通費精算データ"));
    assert!(report.contains(LEDGER_HEADER));
    assert!(report.contains("2024/04/01,自宅,本社,往復,500"));
}

// =============================================================================
// SECTION 5: Error cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/seisan")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_attendance_text_is_validation_error() {
    let router = create_router_for_test();

    let (status, body) = post_seisan(router, json!({ "config_path": "tests/data/rates.yaml" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_date_is_attendance_parse_error() {
    let router = create_router_for_test();
    let tsv = attendance(&[("2024131", "10", "09:00", "")]);

    let (status, body) = post_seisan(router, create_request(&tsv)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "ATTENDANCE_PARSE_ERROR");
    assert!(body["message"].as_str().unwrap().contains("line 2"));
}

#[tokio::test]
async fn test_missing_config_file_is_config_error() {
    let router = create_router_for_test();
    let tsv = attendance(&[("20240401", "10", "09:00", "")]);
    let request = json!({
        "attendance_text": tsv,
        "config_path": "tests/data/no_such_rates.yaml",
        "template_path": "tests/data/expense.j2"
    });

    let (status, body) = post_seisan(router, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "CONFIG_ERROR");
}

#[tokio::test]
async fn test_missing_template_file_is_config_error() {
    let router = create_router_for_test();
    let tsv = attendance(&[("20240401", "10", "09:00", "")]);
    let request = json!({
        "attendance_text": tsv,
        "config_path": "tests/data/rates.yaml",
        "template_path": "tests/data/no_such_template.j2"
    });

    let (status, body) = post_seisan(router, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "CONFIG_ERROR");
}

#[tokio::test]
async fn test_home_day_without_home_charge_config_fails() {
    let router = create_router_for_test();
    let tsv = attendance(&[("20240402", "11", "09:00", "")]);
    let request = json!({
        "attendance_text": tsv,
        "config_path": "tests/data/rates_no_home.yaml",
        "template_path": "tests/data/expense.j2"
    });

    let (status, body) = post_seisan(router, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "HOME_CHARGE_NOT_FOUND");
}

#[tokio::test]
async fn test_failed_settlement_returns_no_partial_report() {
    let router = create_router_for_test();
    // The first day settles fine; the second needs the missing home charge.
    let tsv = attendance(&[
        ("20240401", "10", "09:00", ""),
        ("20240402", "11", "09:00", ""),
    ]);
    let request = json!({
        "attendance_text": tsv,
        "config_path": "tests/data/rates_no_home.yaml",
        "template_path": "tests/data/expense.j2"
    });

    let (status, body) = post_seisan(router, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.get("report").is_none());
}
