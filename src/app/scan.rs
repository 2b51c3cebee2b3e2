// src/app/scan.rs

use tracing::{debug, error, info};

use crate::app::result::ResultDisplay;
use crate::core::api::ApiError;
use crate::core::models::{OutcomeKind, ScanOutcome, ScanRequest};
use crate::dispatch::{Request, RequestToken, TokenSeq};

pub const SCAN_LABEL: &str = "Scan Now";
pub const BUSY_LABEL: &str = "Scanning...";
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter either a URL or text content to scan.";
pub const SCAN_FAILED_MESSAGE: &str = "An error occurred during scanning. Please try again.";

/// Result of pressing the scan button.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Both inputs were blank; a warning was shown and nothing was sent.
    Rejected,
    /// A scan is already in flight and the control is disabled.
    Busy,
    Issued(Request),
}

/// The scan form and its submit control.
#[derive(Debug)]
pub struct ScanForm {
    pub url_input: String,
    pub text_input: String,
    busy: bool,
    button_label: &'static str,
    tokens: TokenSeq,
}

impl Default for ScanForm {
    fn default() -> Self {
        Self {
            url_input: String::new(),
            text_input: String::new(),
            busy: false,
            button_label: SCAN_LABEL,
            tokens: TokenSeq::default(),
        }
    }
}

impl ScanForm {
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn button_label(&self) -> &'static str {
        self.button_label
    }

    pub fn submit(&mut self, display: &mut ResultDisplay) -> SubmitOutcome {
        if self.busy {
            debug!("Scan already in flight, ignoring submit.");
            return SubmitOutcome::Busy;
        }

        let request = ScanRequest::from_input(&self.url_input, &self.text_input);
        if request.is_empty() {
            display.render(OutcomeKind::Warning, EMPTY_INPUT_MESSAGE, None);
            return SubmitOutcome::Rejected;
        }

        self.busy = true;
        self.button_label = BUSY_LABEL;
        let token = self.tokens.issue();
        info!(token = token.value(), "Scan submitted.");
        SubmitOutcome::Issued(Request::Scan { token, request })
    }

    pub fn settle(
        &mut self,
        token: RequestToken,
        result: Result<ScanOutcome, ApiError>,
        display: &mut ResultDisplay,
    ) {
        // Restore the control first so every exit path below leaves it usable.
        self.busy = false;
        self.button_label = SCAN_LABEL;

        if !self.tokens.is_latest(token) {
            debug!(token = token.value(), "Discarding superseded scan response.");
            return;
        }

        match result {
            Ok(outcome) => {
                info!(suspicious = outcome.suspicious, "Scan settled.");
                display.render(
                    OutcomeKind::from_verdict(outcome.suspicious),
                    outcome.message,
                    outcome.reason.as_deref(),
                );
            }
            Err(e) => {
                error!(error = %e, "Scan request failed.");
                display.render(OutcomeKind::Warning, SCAN_FAILED_MESSAGE, None);
            }
        }
    }
}
