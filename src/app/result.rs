// src/app/result.rs

use crate::core::models::OutcomeKind;

/// What the shared result area currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub kind: OutcomeKind,
    pub message: String,
    pub reason: Option<String>,
}

/// The single result region. Only the scan orchestrator writes to it.
#[derive(Debug, Default)]
pub struct ResultDisplay {
    view: Option<ResultView>,
    scroll: u16,
}

impl ResultDisplay {
    /// Replaces whatever was shown with a fresh block and reveals the region.
    /// An empty `reason` is dropped so no "Reason" line is drawn.
    pub fn render(&mut self, kind: OutcomeKind, message: impl Into<String>, reason: Option<&str>) {
        let reason = reason
            .filter(|r| !r.is_empty())
            .map(str::to_string);
        self.view = Some(ResultView {
            kind,
            message: message.into(),
            reason,
        });
        // Bring the heading back into view.
        self.scroll = 0;
    }

    pub fn view(&self) -> Option<&ResultView> {
        self.view.as_ref()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.view.is_some() {
            self.scroll = self.scroll.saturating_add(1);
        }
    }
}
