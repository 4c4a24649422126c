use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::app::{App, InputMode};
use crate::tabs::SectionTab;

/// Handle terminal events.
/// Returns true if the app should quit.
pub async fn handle_events(app: &mut App) -> Result<bool> {
    if event::poll(Duration::from_millis(100))?
        && let Event::Key(key) = event::read()?
    {
        // Only handle key press events (not release) - matters on Windows.
        if key.kind != KeyEventKind::Press {
            return Ok(app.should_quit());
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(true);
        }

        match app.input_mode() {
            InputMode::Normal => handle_normal_mode(app, key),
            InputMode::Insert => handle_insert_mode(app, key),
        }
    }

    Ok(app.should_quit())
}

/// Start a generation unless one is already in flight.
///
/// This is a UX guard against accidental double submission, not a lock;
/// the lifecycle itself tolerates superseding starts.
fn submit_guarded(app: &mut App) {
    if app.is_pending() {
        app.set_status("A report is already being generated");
    } else {
        app.submit();
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.request_quit();
        }
        KeyCode::Char('i') => {
            app.enter_insert_mode();
            app.clear_status();
        }
        KeyCode::Char('a') => {
            app.enter_insert_mode_at_end();
            app.clear_status();
        }
        KeyCode::Enter => {
            submit_guarded(app);
        }
        // Direct section selection
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(tab) = SectionTab::from_index(c as usize - '1' as usize) {
                app.select_tab(tab);
            }
        }
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => {
            app.select_next_tab();
        }
        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => {
            app.select_prev_tab();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_up();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_down();
        }
        KeyCode::Char('g') => {
            app.scroll_to_top();
        }
        KeyCode::Char('G') => {
            app.scroll_to_bottom();
        }
        _ => {}
    }
}

fn handle_insert_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.enter_normal_mode();
        }
        KeyCode::Enter => {
            app.enter_normal_mode();
            submit_guarded(app);
        }
        KeyCode::Backspace => {
            app.draft_mut().delete_char();
        }
        KeyCode::Delete => {
            app.draft_mut().delete_char_forward();
        }
        KeyCode::Left => {
            app.draft_mut().move_cursor_left();
        }
        KeyCode::Right => {
            app.draft_mut().move_cursor_right();
        }
        KeyCode::Home => {
            app.draft_mut().move_cursor_home();
        }
        KeyCode::End => {
            app.draft_mut().move_cursor_end();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.draft_mut().clear();
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.draft_mut().delete_word_backwards();
        }
        KeyCode::Char(c) => {
            app.draft_mut().enter_char(c);
        }
        _ => {}
    }
}
