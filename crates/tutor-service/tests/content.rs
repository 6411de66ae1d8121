//! Content endpoint integration tests.

mod common;

use common::TestHarness;

#[tokio::test]
async fn about_returns_markdown_body() {
    let harness = TestHarness::new();

    let response = harness.server.get("/about").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["content"].as_str().unwrap().starts_with("# About"));
}

#[tokio::test]
async fn services_returns_items_with_camel_case_price() {
    let harness = TestHarness::new();

    let response = harness.server.get("/services").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let services = body.as_array().unwrap();
    assert_eq!(services.len(), 2);
    assert_eq!(services[0]["basePrice"], 45.0);
    assert!(services[0].get("base_price").is_none());
}

#[tokio::test]
async fn pricing_returns_plans() {
    let harness = TestHarness::new();

    let response = harness.server.get("/pricing").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let plans = body.as_array().unwrap();
    assert_eq!(plans.len(), 3);
    assert_eq!(plans[2]["discount_pct"], 15.0);
}

#[tokio::test]
async fn testimonials_and_faq_and_lessons_return_arrays() {
    let harness = TestHarness::new();

    for path in ["/testimonials", "/faq", "/lessons"] {
        let response = harness.server.get(path).await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert!(!body.as_array().unwrap().is_empty(), "path={path}");
    }
}

#[tokio::test]
async fn missing_content_file_is_404() {
    let harness = TestHarness::with_files(&[("about.md", common::ABOUT_MD)]);

    let response = harness.server.get("/faq").await;

    response.assert_status_not_found();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn empty_content_list_is_404() {
    let harness = TestHarness::with_files(&[("testimonials.json", "[]")]);

    let response = harness.server.get("/testimonials").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn empty_about_is_404() {
    let harness = TestHarness::with_files(&[("about.md", "   \n")]);

    let response = harness.server.get("/about").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn content_edits_show_up_without_restart() {
    let harness = TestHarness::new();

    std::fs::write(
        harness.content_dir.path().join("faq.json"),
        r#"[{ "question": "New?", "answer": "Yes." }]"#,
    )
    .unwrap();

    let response = harness.server.get("/faq").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["question"], "New?");
}

#[tokio::test]
async fn raw_content_files_are_served() {
    let harness = TestHarness::new();

    std::fs::create_dir(harness.content_dir.path().join("images")).unwrap();
    std::fs::write(
        harness.content_dir.path().join("images/grammar.jpg"),
        b"not really a jpeg",
    )
    .unwrap();

    let response = harness.server.get("/content/images/grammar.jpg").await;
    response.assert_status_ok();

    let response = harness.server.get("/content/about.md").await;
    response.assert_status_ok();
    assert!(response.text().starts_with("# About"));
}

#[tokio::test]
async fn missing_raw_content_file_is_404() {
    let harness = TestHarness::new();

    let response = harness.server.get("/content/images/missing.jpg").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn malformed_content_is_internal_error() {
    let harness = TestHarness::with_files(&[("services.json", "{ not json")]);

    let response = harness.server.get("/services").await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "internal_error");
}
