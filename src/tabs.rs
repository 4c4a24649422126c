//! Section tab navigation.
//!
//! Decoupled from the request lifecycle except for one rule: the instant a
//! generation succeeds, the visible section jumps to the final report.

use crate::report::ReportResult;

/// The four report sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionTab {
    #[default]
    Ingestion,
    Quantitative,
    Qualitative,
    Synthesis,
}

impl SectionTab {
    pub const fn all() -> [SectionTab; 4] {
        [
            SectionTab::Ingestion,
            SectionTab::Quantitative,
            SectionTab::Qualitative,
            SectionTab::Synthesis,
        ]
    }

    pub const fn title(self) -> &'static str {
        match self {
            SectionTab::Ingestion => "Ingestion",
            SectionTab::Quantitative => "Quantitative",
            SectionTab::Qualitative => "Qualitative",
            SectionTab::Synthesis => "Report",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            SectionTab::Ingestion => 0,
            SectionTab::Quantitative => 1,
            SectionTab::Qualitative => 2,
            SectionTab::Synthesis => 3,
        }
    }

    pub const fn from_index(index: usize) -> Option<SectionTab> {
        match index {
            0 => Some(SectionTab::Ingestion),
            1 => Some(SectionTab::Quantitative),
            2 => Some(SectionTab::Qualitative),
            3 => Some(SectionTab::Synthesis),
            _ => None,
        }
    }

    pub const fn next(self) -> SectionTab {
        match self {
            SectionTab::Ingestion => SectionTab::Quantitative,
            SectionTab::Quantitative => SectionTab::Qualitative,
            SectionTab::Qualitative => SectionTab::Synthesis,
            SectionTab::Synthesis => SectionTab::Ingestion,
        }
    }

    pub const fn prev(self) -> SectionTab {
        match self {
            SectionTab::Ingestion => SectionTab::Synthesis,
            SectionTab::Quantitative => SectionTab::Ingestion,
            SectionTab::Qualitative => SectionTab::Quantitative,
            SectionTab::Synthesis => SectionTab::Qualitative,
        }
    }

    /// Step count shown on the tab label, when greater than zero.
    ///
    /// Only the two agent tabs carry badges; zero or absent counts show
    /// nothing.
    pub fn badge(self, result: Option<&ReportResult>) -> Option<usize> {
        let result = result?;
        let count = match self {
            SectionTab::Quantitative => result.quantitative_steps.len(),
            SectionTab::Qualitative => result.qualitative_steps.len(),
            SectionTab::Ingestion | SectionTab::Synthesis => 0,
        };
        (count > 0).then_some(count)
    }
}

/// Tracks which section is visible.
///
/// The user may select any tab at any time, in any lifecycle state; every
/// section renderer handles absent data on its own.
#[derive(Debug, Default)]
pub struct TabController {
    selected: SectionTab,
}

impl TabController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> SectionTab {
        self.selected
    }

    pub fn select(&mut self, tab: SectionTab) {
        self.selected = tab;
    }

    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.prev();
    }

    /// The lifecycle/tab coupling rule: on success, jump straight to the
    /// final report so the user never has to navigate to it.
    pub fn on_generation_succeeded(&mut self) {
        self.selected = SectionTab::Synthesis;
    }
}
