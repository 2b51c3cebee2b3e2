// src/app/weather.rs

use tracing::{debug, error, info};

use crate::core::api::ApiError;
use crate::core::models::WeatherReply;
use crate::dispatch::{Request, RequestToken, TokenSeq};

pub const DEFAULT_LOCATION: &str = "London";
pub const LOADING_MESSAGE: &str = "Loading...";
pub const UNAVAILABLE_MESSAGE: &str = "Unable to fetch weather";
pub const TEMPERATURE_UNIT: &str = "°C";
pub const WINDSPEED_UNIT: &str = " km/h";
const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub enum WeatherView {
    Idle,
    Loading,
    Report {
        location: String,
        temperature: String,
        windspeed: String,
        observed_at: Option<String>,
    },
    /// The backend answered with an `error` field.
    Error(String),
    /// Transport or decode failure.
    Unavailable,
}

impl WeatherView {
    /// The lines the widget draws, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        match self {
            WeatherView::Idle => Vec::new(),
            WeatherView::Loading => vec![LOADING_MESSAGE.to_string()],
            WeatherView::Report {
                location,
                temperature,
                windspeed,
                observed_at,
            } => {
                let mut lines = vec![
                    location.clone(),
                    format!("Temp: {temperature} • Wind: {windspeed}"),
                ];
                lines.extend(observed_at.clone());
                lines
            }
            WeatherView::Error(message) => vec![format!("Error: {message}")],
            WeatherView::Unavailable => vec![UNAVAILABLE_MESSAGE.to_string()],
        }
    }
}

#[derive(Debug)]
pub struct WeatherWidget {
    pub input: String,
    default_location: String,
    view: WeatherView,
    tokens: TokenSeq,
}

impl Default for WeatherWidget {
    fn default() -> Self {
        Self::new(DEFAULT_LOCATION)
    }
}

impl WeatherWidget {
    pub fn new(default_location: impl Into<String>) -> Self {
        Self {
            input: String::new(),
            default_location: default_location.into(),
            view: WeatherView::Idle,
            tokens: TokenSeq::default(),
        }
    }

    pub fn view(&self) -> &WeatherView {
        &self.view
    }

    pub fn default_location(&self) -> &str {
        &self.default_location
    }

    /// Fetches conditions for whatever is in the location input.
    pub fn fetch_from_input(&mut self) -> Request {
        let query = self.input.clone();
        self.fetch(&query)
    }

    /// Shows the loading placeholder, then hands back the request. A blank
    /// query falls back to the default location.
    pub fn fetch(&mut self, query: &str) -> Request {
        let location = match query.trim() {
            "" => self.default_location.clone(),
            trimmed => trimmed.to_string(),
        };
        self.view = WeatherView::Loading;
        let token = self.tokens.issue();
        info!(location = %location, token = token.value(), "Weather requested.");
        Request::Weather { token, location }
    }

    pub fn settle(&mut self, token: RequestToken, result: Result<WeatherReply, ApiError>) {
        if !self.tokens.is_latest(token) {
            debug!(token = token.value(), "Discarding superseded weather response.");
            return;
        }

        self.view = match result {
            Ok(WeatherReply::Failure { error }) => WeatherView::Error(error),
            Ok(WeatherReply::Report { location, current }) => WeatherView::Report {
                location,
                temperature: current
                    .temperature
                    .map(|t| format!("{t}{TEMPERATURE_UNIT}"))
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                windspeed: current
                    .windspeed
                    .map(|w| format!("{w}{WINDSPEED_UNIT}"))
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                observed_at: current.time.filter(|t| !t.is_empty()),
            },
            Err(e) => {
                error!(error = %e, "Weather request failed.");
                WeatherView::Unavailable
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CurrentConditions;

    fn location_of(request: &Request) -> &str {
        match request {
            Request::Weather { location, .. } => location,
            other => panic!("expected a weather request, got {other:?}"),
        }
    }

    fn token_of(request: &Request) -> RequestToken {
        match request {
            Request::Weather { token, .. } => *token,
            other => panic!("expected a weather request, got {other:?}"),
        }
    }

    #[test]
    fn blank_query_uses_the_default_location() {
        let mut widget = WeatherWidget::default();
        let request = widget.fetch("   ");
        assert_eq!(location_of(&request), "London");

        let mut widget = WeatherWidget::new("Lisbon");
        widget.input = "  ".to_string();
        let request = widget.fetch_from_input();
        assert_eq!(location_of(&request), "Lisbon");
    }

    #[test]
    fn loading_is_shown_before_the_request_settles() {
        let mut widget = WeatherWidget::default();
        let _ = widget.fetch(" Paris ");
        assert_eq!(widget.view(), &WeatherView::Loading);
        assert_eq!(widget.view().lines(), vec!["Loading...".to_string()]);
    }

    #[test]
    fn error_payload_is_shown_verbatim() {
        let mut widget = WeatherWidget::default();
        let request = widget.fetch("Atlantis");
        widget.settle(
            token_of(&request),
            Ok(WeatherReply::Failure {
                error: "location not found".to_string(),
            }),
        );
        assert_eq!(widget.view().lines(), vec!["Error: location not found".to_string()]);
    }

    #[test]
    fn report_renders_units_and_fallbacks() {
        let mut widget = WeatherWidget::default();
        let request = widget.fetch("London");
        widget.settle(
            token_of(&request),
            Ok(WeatherReply::Report {
                location: "London, United Kingdom".to_string(),
                current: CurrentConditions {
                    temperature: Some(12.5),
                    windspeed: None,
                    time: Some("2026-10-18T14:00".to_string()),
                },
            }),
        );
        assert_eq!(
            widget.view().lines(),
            vec![
                "London, United Kingdom".to_string(),
                "Temp: 12.5°C • Wind: N/A".to_string(),
                "2026-10-18T14:00".to_string(),
            ]
        );

        let request = widget.fetch("Oslo");
        widget.settle(
            token_of(&request),
            Ok(WeatherReply::Report {
                location: "Oslo, Norway".to_string(),
                current: CurrentConditions {
                    temperature: None,
                    windspeed: Some(20.0),
                    time: None,
                },
            }),
        );
        assert_eq!(
            widget.view().lines(),
            vec!["Oslo, Norway".to_string(), "Temp: N/A • Wind: 20 km/h".to_string()]
        );
    }

    #[test]
    fn transport_failure_shows_the_fixed_message() {
        let mut widget = WeatherWidget::default();
        let request = widget.fetch("London");
        widget.settle(
            token_of(&request),
            Err(ApiError::Status {
                status: 502,
                body: "Bad Gateway".to_string(),
            }),
        );
        assert_eq!(widget.view(), &WeatherView::Unavailable);
        assert_eq!(widget.view().lines(), vec!["Unable to fetch weather".to_string()]);
    }

    #[test]
    fn slower_older_reply_does_not_overwrite_newer_one() {
        let mut widget = WeatherWidget::default();
        let older = widget.fetch("Rome");
        let newer = widget.fetch("Madrid");

        widget.settle(
            token_of(&newer),
            Ok(WeatherReply::Report {
                location: "Madrid, Spain".to_string(),
                current: CurrentConditions::default(),
            }),
        );
        widget.settle(
            token_of(&older),
            Ok(WeatherReply::Failure {
                error: "late".to_string(),
            }),
        );

        assert_eq!(widget.view().lines()[0], "Madrid, Spain");
    }
}
