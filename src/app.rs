//! Application state: instructions input, request lifecycle, tab
//! controller, and the resolution channel for the in-flight request.

use tokio::sync::mpsc;

use crate::client::{GenerateError, GenerateRequest, ReportClient};
use crate::config;
use crate::lifecycle::{GenerationPhase, Resolved};
use crate::report::ReportResult;
use crate::tabs::{SectionTab, TabController};

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Insert,
}

/// The instructions draft being edited. Cursor is a character index.
#[derive(Debug, Default)]
pub struct DraftInput {
    text: String,
    cursor: usize,
}

impl DraftInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map_or(self.text.len(), |(idx, _)| idx)
    }

    pub fn enter_char(&mut self, ch: char) {
        let idx = self.byte_index();
        self.text.insert(idx, ch);
        self.cursor += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index();
        self.text.remove(idx);
    }

    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.text.chars().count() {
            let idx = self.byte_index();
            self.text.remove(idx);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn delete_word_backwards(&mut self) {
        while self.cursor > 0
            && self
                .text
                .chars()
                .nth(self.cursor - 1)
                .is_some_and(char::is_whitespace)
        {
            self.delete_char();
        }
        while self.cursor > 0
            && self
                .text
                .chars()
                .nth(self.cursor - 1)
                .is_some_and(|c| !c.is_whitespace())
        {
            self.delete_char();
        }
    }
}

type ResolutionReceiver = mpsc::UnboundedReceiver<Result<ReportResult, GenerateError>>;

/// Top-level application state.
///
/// Owns the single lifecycle/result pair; renderers only ever borrow it.
pub struct App {
    client: ReportClient,
    phase: GenerationPhase,
    tabs: TabController,
    draft: DraftInput,
    input_mode: InputMode,
    pending: Option<ResolutionReceiver>,
    status: Option<String>,
    tick_count: usize,
    scroll: [u16; 4],
    scroll_max: u16,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self::with_endpoint(config::resolve_endpoint())
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: ReportClient::new(endpoint),
            phase: GenerationPhase::Idle,
            tabs: TabController::new(),
            draft: DraftInput::default(),
            input_mode: InputMode::Normal,
            pending: None,
            status: None,
            tick_count: 0,
            scroll: [0; 4],
            scroll_max: 0,
            should_quit: false,
        }
    }

    /// Start a generation request with the current draft instructions.
    ///
    /// Starting while a request is in flight installs a fresh resolution
    /// channel, superseding the prior request's eventual effect: its send
    /// lands on a closed channel and is dropped. The input layer guards
    /// against accidental double submission; this method does not.
    pub fn submit(&mut self) {
        let request = GenerateRequest::new(self.draft.text());
        self.phase.begin();
        self.status = None;

        let (tx, rx) = mpsc::unbounded_channel();
        self.pending = Some(rx);

        let client = self.client.clone();
        tokio::spawn(async move {
            let outcome = client.generate(&request).await;
            let _ = tx.send(outcome);
        });
    }

    /// Apply the resolution of the in-flight request, if one has arrived.
    pub fn poll_generation(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };

        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(mpsc::error::TryRecvError::Empty) => return,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                tracing::warn!("generation task dropped its channel without resolving");
                Err(GenerateError::Interrupted)
            }
        };

        self.pending = None;
        if self.phase.resolve(outcome) == Resolved::Succeeded {
            self.tabs.on_generation_succeeded();
        }
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    pub fn phase(&self) -> &GenerationPhase {
        &self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase.is_pending()
    }

    /// The held result, read-only; renderers never mutate it.
    pub fn result(&self) -> Option<&ReportResult> {
        self.phase.result()
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    // --- tabs ---

    pub fn selected_tab(&self) -> SectionTab {
        self.tabs.selected()
    }

    pub fn select_tab(&mut self, tab: SectionTab) {
        self.tabs.select(tab);
    }

    pub fn select_next_tab(&mut self) {
        self.tabs.select_next();
    }

    pub fn select_prev_tab(&mut self) {
        self.tabs.select_prev();
    }

    // --- input ---

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn enter_insert_mode(&mut self) {
        self.input_mode = InputMode::Insert;
    }

    pub fn enter_insert_mode_at_end(&mut self) {
        self.input_mode = InputMode::Insert;
        self.draft.move_cursor_end();
    }

    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn draft(&self) -> &DraftInput {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftInput {
        &mut self.draft
    }

    // --- status ---

    pub fn status_message(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    // --- scrolling (per tab) ---

    pub fn update_scroll_max(&mut self, max: u16) {
        self.scroll_max = max;
        let offset = &mut self.scroll[self.tabs.selected().index()];
        *offset = (*offset).min(max);
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll[self.tabs.selected().index()]
    }

    pub fn scroll_up(&mut self) {
        let offset = &mut self.scroll[self.tabs.selected().index()];
        *offset = offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let offset = &mut self.scroll[self.tabs.selected().index()];
        *offset = offset.saturating_add(1).min(self.scroll_max);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll[self.tabs.selected().index()] = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll[self.tabs.selected().index()] = self.scroll_max;
    }

    // --- quit ---

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }
}
