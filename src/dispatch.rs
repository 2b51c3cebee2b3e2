// src/dispatch.rs

//! The asynchronous half of the dashboard.
//!
//! Components never talk to the network themselves. They hand back a
//! [`Request`], which is executed here on its own tokio task, and the task
//! reports exactly one [`AppEvent`] (the settle) over a channel that the event
//! loop drains into [`App::apply_event`](crate::app::App::apply_event).

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::core::api::{ApiError, Backend};
use crate::core::models::{RecordRow, ScanOutcome, ScanRequest, WeatherReply};

/// Identifies one issued request within the component that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Per-component, monotonically increasing token source.
///
/// Only the most recently issued token is current: a settle carrying any
/// other token belongs to a superseded request.
#[derive(Debug, Default)]
pub struct TokenSeq {
    latest: u64,
}

impl TokenSeq {
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

/// Why the record list is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordsPurpose {
    /// Initial load, panel entry or an explicit refresh.
    Load,
    /// The re-read that follows a confirmed clear.
    Reconcile,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Scan {
        token: RequestToken,
        request: ScanRequest,
    },
    Records {
        token: RequestToken,
        purpose: RecordsPurpose,
    },
    Weather {
        token: RequestToken,
        location: String,
    },
}

impl Request {
    pub fn name(&self) -> &'static str {
        match self {
            Request::Scan { .. } => "scan",
            Request::Records { .. } => "records",
            Request::Weather { .. } => "weather",
        }
    }
}

#[derive(Debug)]
pub enum AppEvent {
    ScanSettled {
        token: RequestToken,
        result: Result<ScanOutcome, ApiError>,
    },
    RecordsSettled {
        token: RequestToken,
        purpose: RecordsPurpose,
        result: Result<Vec<RecordRow>, ApiError>,
    },
    WeatherSettled {
        token: RequestToken,
        result: Result<WeatherReply, ApiError>,
    },
}

/// Runs one request to completion and wraps its outcome as a settle event.
pub async fn execute(backend: &dyn Backend, request: Request) -> AppEvent {
    match request {
        Request::Scan { token, request } => AppEvent::ScanSettled {
            token,
            result: backend.scan(&request).await,
        },
        Request::Records { token, purpose } => AppEvent::RecordsSettled {
            token,
            purpose,
            result: backend.list_records().await,
        },
        Request::Weather { token, location } => AppEvent::WeatherSettled {
            token,
            result: backend.weather(&location).await,
        },
    }
}

/// Spawns `request` on the runtime. There is no cancellation: a request keeps
/// running even if the user moves on, and its settle is still delivered.
pub fn spawn_request(backend: Arc<dyn Backend>, tx: mpsc::Sender<AppEvent>, request: Request) {
    info!(request = request.name(), "Dispatching request.");
    tokio::spawn(async move {
        let event = execute(backend.as_ref(), request).await;
        if tx.send(event).await.is_err() {
            debug!("Event loop has shut down, dropping settle.");
        }
    });
}
