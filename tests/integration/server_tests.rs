//! Integration tests for the HTTP surface
//!
//! Requests are driven through the router with `tower::ServiceExt::oneshot`;
//! the domains being harvested are wiremock servers.

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, Method, Request, StatusCode};
use calamine::{open_workbook_from_rs, Reader, Xlsx};
use mail_harvest::config::Config;
use mail_harvest::output::XLSX_CONTENT_TYPE;
use mail_harvest::server::build_router;
use std::io::Cursor;
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn router() -> axum::Router {
    build_router(Arc::new(Config::default())).expect("Failed to build router")
}

fn form_body(domains: &str) -> Body {
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("domains", domains)
        .finish();
    Body::from(encoded)
}

/// Reads the first sheet of a downloaded workbook as rows of cell text
fn sheet_rows(bytes: Bytes) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes.to_vec()))
        .expect("Response is not a readable workbook");
    let range = workbook
        .worksheet_range_at(0)
        .expect("Workbook has no sheets")
        .expect("Failed to read sheet");
    range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let response = router()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_extract_returns_spreadsheet_download() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<a href="mailto:sales@example.com">Email us</a>"#),
        )
        .mount(&mock_server)
        .await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/extract")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(form_body(&format!("{}\n\n", mock_server.uri())))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        XLSX_CONTENT_TYPE
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"extracted_emails.xlsx\""
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..2], b"PK");

    let domain = mock_server.uri().trim_start_matches("http://").to_string();
    assert_eq!(
        sheet_rows(bytes),
        vec![
            vec!["domain".to_string(), "emails".to_string()],
            vec![domain, "sales@example.com".to_string()],
        ]
    );
}

#[tokio::test]
async fn test_extract_spreadsheet_keeps_input_order() {
    let quiet_server = MockServer::start().await;
    let busy_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/team"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<p>Reach jo@busy.example or al@busy.example</p>"),
        )
        .mount(&busy_server)
        .await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/extract")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(form_body(&format!(
            "{}\n{}\n",
            busy_server.uri(),
            quiet_server.uri()
        )))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let rows = sheet_rows(bytes);

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], vec!["domain", "emails"]);
    assert_eq!(rows[1][0], busy_server.uri().trim_start_matches("http://"));
    assert_eq!(rows[1][1], "al@busy.example, jo@busy.example");
    assert_eq!(rows[2][0], quiet_server.uri().trim_start_matches("http://"));
    assert_eq!(rows[2][1], "");
}

#[tokio::test]
async fn test_extract_with_empty_list() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/extract")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(form_body("\n  \n"))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(sheet_rows(bytes), vec![vec!["domain", "emails"]]);
}

#[tokio::test]
async fn test_extract_requires_domains_field() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/extract")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("other=value"))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/extract")
        .header(header::ORIGIN, "https://frontend.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
