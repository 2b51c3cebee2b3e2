// src/app/records.rs

use chrono::NaiveDate;
use ratatui::widgets::TableState;
use tracing::{debug, error, info, warn};

use crate::core::api::ApiError;
use crate::core::models::RecordRow;
use crate::dispatch::{RecordsPurpose, Request, RequestToken, TokenSeq};

pub const NO_DATA_MESSAGE: &str = "No phishing records found.";
pub const LOAD_FAILED_MESSAGE: &str = "Error loading data";
pub const CLEAR_PROMPT: &str =
    "Are you sure you want to clear the entire database? This action cannot be undone.";
pub const MISSING_URL: &str = "N/A";
pub const COLUMN_COUNT: usize = 4;

/// What the table body currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    /// Nothing has settled yet.
    Idle,
    Rows(Vec<RecordRow>),
    /// An empty list: body cleared, no-data message shown.
    Empty,
    /// A single error row spanning every column.
    Failed,
}

/// A record as it is drawn: 1-based index first, fallbacks applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub index: usize,
    pub url: String,
    pub description: String,
    pub date: String,
}

/// Format used for the "today" fallback of a missing date.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

#[derive(Debug)]
pub struct RecordTable {
    view: TableView,
    loading: bool,
    // A load was issued and has not settled as the latest read yet.
    load_pending: bool,
    confirming_clear: bool,
    tokens: TokenSeq,
    pub table_state: TableState,
}

impl Default for RecordTable {
    fn default() -> Self {
        Self {
            view: TableView::Idle,
            loading: false,
            load_pending: false,
            confirming_clear: false,
            tokens: TokenSeq::default(),
            table_state: TableState::default(),
        }
    }
}

impl RecordTable {
    pub fn view(&self) -> &TableView {
        &self.view
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_empty_state_visible(&self) -> bool {
        matches!(self.view, TableView::Empty)
    }

    pub fn is_confirming_clear(&self) -> bool {
        self.confirming_clear
    }

    /// Fetches the full list. Issued on panel entry, at startup and on
    /// refresh; every call goes to the backend, nothing is cached.
    pub fn load(&mut self) -> Request {
        self.issue(RecordsPurpose::Load)
    }

    pub fn refresh(&mut self) -> Request {
        info!("Record refresh requested.");
        self.load()
    }

    /// Asks for confirmation before clearing.
    pub fn clear(&mut self) {
        self.confirming_clear = true;
    }

    pub fn cancel_clear(&mut self) {
        debug!("Clear cancelled.");
        self.confirming_clear = false;
    }

    /// There is no delete endpoint: a confirmed clear only re-reads the list
    /// and shows the empty state if the backend has already been emptied.
    pub fn confirm_clear(&mut self) -> Option<Request> {
        if !self.confirming_clear {
            return None;
        }
        self.confirming_clear = false;
        info!("Clear confirmed, re-reading record list.");
        Some(self.issue(RecordsPurpose::Reconcile))
    }

    fn issue(&mut self, purpose: RecordsPurpose) -> Request {
        self.loading = true;
        if purpose == RecordsPurpose::Load {
            self.load_pending = true;
        }
        Request::Records {
            token: self.tokens.issue(),
            purpose,
        }
    }

    pub fn settle(
        &mut self,
        token: RequestToken,
        purpose: RecordsPurpose,
        result: Result<Vec<RecordRow>, ApiError>,
    ) {
        if !self.tokens.is_latest(token) {
            debug!(token = token.value(), "Discarding superseded record response.");
            return;
        }
        self.loading = false;

        // Load and reconcile share one sequence, so a reconcile issued while a
        // load was in flight supersedes it. Its answer then stands in for the
        // discarded load.
        let purpose = if self.load_pending {
            RecordsPurpose::Load
        } else {
            purpose
        };
        self.load_pending = false;

        match (purpose, result) {
            (_, Ok(rows)) if rows.is_empty() => {
                info!("Record list is empty.");
                self.view = TableView::Empty;
                self.table_state.select(None);
            }
            (RecordsPurpose::Load, Ok(rows)) => {
                info!(rows = rows.len(), "Record list loaded.");
                let selected = self.table_state.selected().map(|i| i.min(rows.len() - 1));
                self.view = TableView::Rows(rows);
                self.table_state.select(selected);
            }
            (RecordsPurpose::Load, Err(e)) => {
                error!(error = %e, "Error loading record list.");
                self.view = TableView::Failed;
                self.table_state.select(None);
            }
            (RecordsPurpose::Reconcile, Ok(rows)) => {
                warn!(rows = rows.len(), "Backend still holds records after clear; table left as is.");
            }
            (RecordsPurpose::Reconcile, Err(e)) => {
                error!(error = %e, "Error re-reading record list after clear.");
            }
        }
    }

    /// Rows ready for drawing, with `today` standing in for missing dates.
    pub fn display_rows(&self, today: NaiveDate) -> Vec<DisplayRow> {
        let TableView::Rows(rows) = &self.view else {
            return Vec::new();
        };
        let today = format_display_date(today);
        rows.iter()
            .enumerate()
            .map(|(i, row)| DisplayRow {
                index: i + 1,
                url: row.url.clone().unwrap_or_else(|| MISSING_URL.to_string()),
                description: row.description.clone(),
                date: row.date.clone().unwrap_or_else(|| today.clone()),
            })
            .collect()
    }

    pub fn row_count(&self) -> usize {
        match &self.view {
            TableView::Rows(rows) => rows.len(),
            _ => 0,
        }
    }

    pub fn select_next(&mut self) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        let next = match self.table_state.selected() {
            Some(i) => (i + 1).min(count - 1),
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.row_count() == 0 {
            return;
        }
        let previous = self.table_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.table_state.select(Some(previous));
    }
}
