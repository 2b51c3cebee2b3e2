// src/core/api.rs

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use crate::core::models::{RecordRow, ScanOutcome, ScanRequest, WeatherReply};

/// Anything that can go wrong between issuing a backend call and holding a
/// decoded reply.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// The three calls the dashboard makes against the PhishGuard backend.
#[async_trait]
pub trait Backend: Send + Sync {
    /// `POST /scan`
    async fn scan(&self, request: &ScanRequest) -> Result<ScanOutcome, ApiError>;

    /// `GET /database`. An empty list is a valid answer.
    async fn list_records(&self) -> Result<Vec<RecordRow>, ApiError>;

    /// `GET /weather?q={location}`
    async fn weather(&self, location: &str) -> Result<WeatherReply, ApiError>;
}

/// `Backend` over JSON/HTTP.
///
/// No timeout is configured: a call is bounded only by the transport default.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(base_url.trim())?;
        // `Url::join` replaces the last path segment unless the path ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("PhishGuard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    pub fn weather_url(&self, location: &str) -> Result<Url, ApiError> {
        let mut url = self.endpoint("weather")?;
        url.query_pairs_mut().append_pair("q", location);
        Ok(url)
    }
}

/// Reads the whole body and decodes it, treating any non-2xx status as an error.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    decode_body(status, body)
}

fn decode_body<T: DeserializeOwned>(status: StatusCode, body: String) -> Result<T, ApiError> {
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(serde_json::from_str(&body)?)
}

/// The backend answers lookup failures with 4xx/5xx and an `error` body;
/// those are domain errors, not transport ones.
fn decode_weather(status: StatusCode, body: String) -> Result<WeatherReply, ApiError> {
    match serde_json::from_str::<WeatherReply>(&body) {
        Ok(reply @ WeatherReply::Failure { .. }) => {
            warn!(status = %status, "Weather backend reported an error.");
            Ok(reply)
        }
        Ok(reply) if status.is_success() => Ok(reply),
        Ok(_) => Err(ApiError::Status {
            status: status.as_u16(),
            body,
        }),
        Err(_) if !status.is_success() => Err(ApiError::Status {
            status: status.as_u16(),
            body,
        }),
        Err(e) => Err(e.into()),
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn scan(&self, request: &ScanRequest) -> Result<ScanOutcome, ApiError> {
        let url = self.endpoint("scan")?;
        info!(url = %url, has_url = !request.url.is_empty(), has_text = !request.text.is_empty(), "Sending scan request.");
        let response = self.client.post(url).json(request).send().await?;
        let outcome: ScanOutcome = read_json(response).await?;
        debug!(suspicious = outcome.suspicious, "Scan verdict received.");
        Ok(outcome)
    }

    async fn list_records(&self) -> Result<Vec<RecordRow>, ApiError> {
        let url = self.endpoint("database")?;
        info!(url = %url, "Fetching record list.");
        let response = self.client.get(url).send().await?;
        let rows: Vec<RecordRow> = read_json(response).await?;
        debug!(rows = rows.len(), "Record list received.");
        Ok(rows)
    }

    async fn weather(&self, location: &str) -> Result<WeatherReply, ApiError> {
        let url = self.weather_url(location)?;
        info!(url = %url, "Fetching weather.");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        decode_weather(status, body)
    }
}
