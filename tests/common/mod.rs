//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use ratatui::text::Line;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a mock server standing in for the report-generation service.
pub async fn start_report_mock() -> MockServer {
    MockServer::start().await
}

/// The endpoint URL on a mock server.
pub fn endpoint(server: &MockServer) -> String {
    format!("{}/generate-report", server.uri())
}

/// A representative full payload: two quantitative steps, one qualitative
/// step, ingestion summary, and a narrative.
pub fn sample_result_json() -> serde_json::Value {
    serde_json::json!({
        "ingestion": {
            "status": "Success",
            "rowCount": 12845,
            "columns": ["Region", "Model", "Year", "Sales_Volume"]
        },
        "quantitativeSteps": [
            {
                "section": "Regional Performance",
                "query": "Calculate total Sales_Volume by Region. Sort descending.",
                "code": "df.groupby('Region')['Sales_Volume'].sum()",
                "image": "aGVsbG8=",
                "insight": "Europe leads total sales volume."
            },
            {
                "query": "Average Sales_Volume per Year.",
                "code": "df.groupby('Year')['Sales_Volume'].mean()"
            }
        ],
        "qualitativeSteps": [
            {
                "section": "Regional Context",
                "query": "What regulations impact sales in the top region?",
                "context": "EU emission rules tightened in 2023.",
                "insight": "Regulation is the main qualitative driver."
            }
        ],
        "synthesis": {
            "markdownContent": "# Findings\n\nEurope leads. ![chart](plot.png)\n\nDetails follow."
        }
    })
}

/// Mount a successful generation response.
pub async fn mount_generate_success(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/generate-report"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a domain failure: HTTP 200 whose body carries only an error.
pub async fn mount_generate_error(server: &MockServer, message: &str) {
    let body = serde_json::json!({ "error": message });
    Mock::given(method("POST"))
        .and(path("/generate-report"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a response whose body is not JSON at all.
pub async fn mount_generate_garbage(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/generate-report"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(server)
        .await;
}

/// Flatten rendered lines to plain text for content assertions.
pub fn lines_to_text(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
