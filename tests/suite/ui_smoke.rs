//! Full-frame draw smoke tests against a test backend.

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use dossier::app::App;
use dossier::tabs::SectionTab;
use dossier::ui;

use crate::common::{endpoint, mount_generate_success, sample_result_json, start_report_mock};

fn backend_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = *buffer.area();
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn draw(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();
    backend_text(&terminal)
}

#[test]
fn idle_frame_shows_tabs_placeholder_and_status() {
    let mut app = App::with_endpoint("http://127.0.0.1:8000/generate-report");
    let text = draw(&mut app);

    for title in ["Ingestion", "Quantitative", "Qualitative", "Report"] {
        assert!(text.contains(title), "missing tab title {title}");
    }
    assert!(text.contains("Ready"));
    assert!(text.contains("Idle"));
    assert!(text.contains("http://127.0.0.1:8000/generate-report"));
}

#[test]
fn every_tab_draws_without_a_result() {
    let mut app = App::with_endpoint("http://127.0.0.1:8000/generate-report");

    for tab in SectionTab::all() {
        app.select_tab(tab);
        let text = draw(&mut app);
        assert!(text.contains(tab.title()), "tab {tab:?} did not draw");
    }

    app.select_tab(SectionTab::Synthesis);
    assert!(draw(&mut app).contains("Report generation pending..."));
}

#[tokio::test]
async fn succeeded_frame_shows_report_badges_and_ready_status() {
    let server = start_report_mock().await;
    mount_generate_success(&server, sample_result_json()).await;

    let mut app = App::with_endpoint(endpoint(&server));
    app.submit();
    for _ in 0..200 {
        app.poll_generation();
        if !app.is_pending() {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    assert!(app.result().is_some(), "generation did not resolve");

    let text = draw(&mut app);
    assert_eq!(app.selected_tab(), SectionTab::Synthesis);
    assert!(text.contains("Insight Report"));
    assert!(text.contains("Report ready"));

    app.select_tab(SectionTab::Ingestion);
    let text = draw(&mut app);
    assert!(text.contains("12,845"));
}

#[test]
fn pending_frame_shows_spinner_text() {
    let mut app = App::with_endpoint("http://127.0.0.1:8000/generate-report");
    app.set_status("A report is already being generated");
    let text = draw(&mut app);
    assert!(text.contains("A report is already being generated"));
}
