//! End-to-end lifecycle tests: App + client + tab controller against a
//! mock generation endpoint.

use std::time::Duration;

use dossier::app::App;
use dossier::lifecycle::GenerationPhase;
use dossier::tabs::SectionTab;

use crate::common::{
    endpoint, mount_generate_error, mount_generate_success, sample_result_json, start_report_mock,
};

/// Poll the app until the in-flight request resolves.
async fn resolve(app: &mut App) {
    for _ in 0..200 {
        app.poll_generation();
        if !app.is_pending() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("generation did not resolve in time");
}

#[tokio::test]
async fn successful_generation_reaches_succeeded_and_jumps_to_report() {
    let server = start_report_mock().await;
    mount_generate_success(&server, sample_result_json()).await;

    let mut app = App::with_endpoint(endpoint(&server));
    app.select_tab(SectionTab::Quantitative);

    app.submit();
    assert!(app.is_pending());

    resolve(&mut app).await;

    assert!(matches!(app.phase(), GenerationPhase::Succeeded(_)));
    assert_eq!(app.selected_tab(), SectionTab::Synthesis);
}

#[tokio::test]
async fn domain_error_reaches_failed_with_verbatim_message() {
    let server = start_report_mock().await;
    mount_generate_error(&server, "Ingestion Failed: bad file").await;

    let mut app = App::with_endpoint(endpoint(&server));
    app.select_tab(SectionTab::Ingestion);
    app.submit();
    resolve(&mut app).await;

    assert_eq!(app.phase().failure(), Some("Ingestion Failed: bad file"));
    // Failure does not move the visible section.
    assert_eq!(app.selected_tab(), SectionTab::Ingestion);
}

#[tokio::test]
async fn transport_failure_reaches_failed() {
    let mut app = App::with_endpoint("http://127.0.0.1:1/generate-report");
    app.submit();
    resolve(&mut app).await;

    assert!(app.phase().failure().is_some());
}

#[tokio::test]
async fn new_start_discards_prior_failure() {
    let server = start_report_mock().await;
    mount_generate_error(&server, "first failure").await;

    let mut app = App::with_endpoint(endpoint(&server));
    app.submit();
    resolve(&mut app).await;
    assert!(app.phase().failure().is_some());

    server.reset().await;
    mount_generate_success(&server, sample_result_json()).await;

    app.submit();
    assert!(app.is_pending());
    assert_eq!(app.phase().failure(), None);

    resolve(&mut app).await;
    assert!(app.result().is_some());
}
