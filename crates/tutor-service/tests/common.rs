//! Common test utilities for tutor-service integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use tempfile::TempDir;

use tutor_content::FileStore;
use tutor_service::{create_router, AppState, ServiceConfig};

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Temporary content directory (kept alive for test duration).
    pub content_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness with a full set of content fixtures.
    pub fn new() -> Self {
        Self::with_files(&[
            ("about.md", ABOUT_MD),
            ("services.json", SERVICES_JSON),
            ("pricing.json", PRICING_JSON),
            ("testimonials.json", TESTIMONIALS_JSON),
            ("faq.json", FAQ_JSON),
            ("lessons.json", LESSONS_JSON),
        ])
    }

    /// Create a harness with only the given content files present.
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let content_dir = TempDir::new().expect("Failed to create temp directory");
        for (name, body) in files {
            std::fs::write(content_dir.path().join(name), body)
                .expect("Failed to write content fixture");
        }

        let store = FileStore::open(content_dir.path()).expect("Failed to open store");

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            content_dir: content_dir.path().to_string_lossy().to_string(),
            ..ServiceConfig::default()
        };

        let state = AppState::new(Arc::new(store), config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            content_dir,
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

pub const ABOUT_MD: &str = "# About\n\nI have been teaching English for over ten years.\n";

pub const SERVICES_JSON: &str = r#"[
    {
        "id": "individual",
        "icon": "user",
        "title": "Individual Lessons",
        "description": "One-on-one personalized lessons.",
        "basePrice": 45.0
    },
    {
        "id": "group",
        "icon": "users",
        "title": "Group Lessons",
        "description": "Small groups of 3-5 students.",
        "basePrice": 25.0
    }
]"#;

pub const PRICING_JSON: &str = r#"[
    { "name": "Starter", "lessons": 4, "price": 171.0, "discount_pct": 5.0 },
    { "name": "Regular", "lessons": 8, "price": 324.0, "discount_pct": 10.0 },
    { "name": "Intensive", "lessons": 12, "price": 459.0, "discount_pct": 15.0 }
]"#;

pub const TESTIMONIALS_JSON: &str = r#"[
    { "quote": "My English improved so much!", "author": "Maria S." },
    { "quote": "Passed my IELTS on the first try.", "author": "Tomas K." }
]"#;

pub const FAQ_JSON: &str = r#"[
    {
        "question": "How long is each lesson?",
        "answer": "Each lesson is 50 minutes long."
    },
    {
        "question": "Do unused lessons expire?",
        "answer": "Lesson packages are valid for 3 months from the purchase date."
    }
]"#;

pub const LESSONS_JSON: &str = r#"[
    {
        "image_url": "/content/images/grammar.jpg",
        "chips": ["Grammar", "B2"],
        "caption": "Conditionals workshop"
    }
]"#;
