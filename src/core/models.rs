// src/core/models.rs

use serde::{Deserialize, Deserializer, Serialize};

// --- Scan Models ---

/// Body of `POST /scan`. Absent inputs travel as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRequest {
    pub url: String,
    pub text: String,
}

impl ScanRequest {
    /// Builds a request from raw form input, trimming surrounding whitespace.
    pub fn from_input(url: &str, text: &str) -> Self {
        Self {
            url: url.trim().to_string(),
            text: text.trim().to_string(),
        }
    }

    /// A request may only be sent when at least one field carries content.
    pub fn is_empty(&self) -> bool {
        self.url.is_empty() && self.text.is_empty()
    }
}

/// The backend's verdict for a scanned URL/text pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub suspicious: bool,
    pub message: String,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Which icon and heading the result area uses.
///
/// `Warning` is never produced by the backend: it marks local validation
/// failures and transport or parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Safe,
    Warning,
    Danger,
}

impl OutcomeKind {
    pub fn from_verdict(suspicious: bool) -> Self {
        if suspicious {
            OutcomeKind::Danger
        } else {
            OutcomeKind::Safe
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            OutcomeKind::Safe => "Safe",
            OutcomeKind::Warning => "Warning",
            OutcomeKind::Danger => "Danger",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            OutcomeKind::Safe => "✔",
            OutcomeKind::Warning => "⚠",
            OutcomeKind::Danger => "✖",
        }
    }
}

// --- Record Store Models ---

/// One row of `GET /database`. The backend is authoritative; the client only
/// keeps a render copy that is replaced on every fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRow {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub date: Option<String>,
}

// The record store is CSV-backed, so missing cells come back as `null` or "".
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// --- Weather Models ---

/// Current conditions as relayed by the backend. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub windspeed: Option<f64>,
    #[serde(default)]
    pub time: Option<String>,
}

/// Reply of `GET /weather`.
///
/// A body carrying `error` is always a `Failure`, whatever else it contains,
/// so `current` is never consulted for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeatherReply {
    Failure {
        error: String,
    },
    Report {
        location: String,
        #[serde(default, deserialize_with = "null_as_default")]
        current: CurrentConditions,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_request_trims_and_detects_empty_input() {
        let request = ScanRequest::from_input("   ", "\n\t");
        assert!(request.is_empty());

        let request = ScanRequest::from_input("  http://example.com ", "");
        assert_eq!(request.url, "http://example.com");
        assert!(!request.is_empty());
    }

    #[test]
    fn scan_request_serializes_both_fields() {
        let request = ScanRequest::from_input("", "buy gift cards now");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, serde_json::json!({"url": "", "text": "buy gift cards now"}));
    }

    #[test]
    fn scan_outcome_reason_is_optional() {
        let outcome: ScanOutcome =
            serde_json::from_str(r#"{"suspicious": false, "message": "Content appears safe"}"#)
                .unwrap();
        assert_eq!(outcome.reason, None);
        assert_eq!(OutcomeKind::from_verdict(outcome.suspicious), OutcomeKind::Safe);
    }

    #[test]
    fn record_row_treats_null_and_blank_cells_as_missing() {
        let rows: Vec<RecordRow> = serde_json::from_str(
            r#"[
                {"url": null, "description": "Phishing text pattern detected"},
                {"url": "", "description": null, "date": "  "},
                {"url": "http://10.0.0.1/login", "description": "Suspicious URL pattern detected", "date": "2026-10-01", "extra": 3}
            ]"#,
        )
        .unwrap();

        assert_eq!(rows[0].url, None);
        assert_eq!(rows[0].date, None);
        assert_eq!(rows[1].url, None);
        assert_eq!(rows[1].description, "");
        assert_eq!(rows[1].date, None);
        assert_eq!(rows[2].url.as_deref(), Some("http://10.0.0.1/login"));
        assert_eq!(rows[2].date.as_deref(), Some("2026-10-01"));
    }

    #[test]
    fn weather_error_wins_over_other_fields() {
        let reply: WeatherReply = serde_json::from_str(
            r#"{"error": "location not found", "location": "Nowhere", "current": {}}"#,
        )
        .unwrap();
        assert_eq!(
            reply,
            WeatherReply::Failure {
                error: "location not found".to_string()
            }
        );
    }

    #[test]
    fn weather_report_with_null_or_missing_current_has_no_values() {
        for body in [
            r#"{"location": "Reykjavik, Iceland", "current": null}"#,
            r#"{"location": "Reykjavik, Iceland"}"#,
        ] {
            let reply: WeatherReply = serde_json::from_str(body).unwrap();
            assert_eq!(
                reply,
                WeatherReply::Report {
                    location: "Reykjavik, Iceland".to_string(),
                    current: CurrentConditions::default(),
                }
            );
        }
    }

    #[test]
    fn weather_report_ignores_extra_fields() {
        let reply: WeatherReply = serde_json::from_str(
            r#"{
                "location": "London, United Kingdom",
                "latitude": 51.5,
                "longitude": -0.12,
                "current": {"temperature": 12.5, "windspeed": 9.0, "winddirection": 240, "time": "2026-10-18T14:00"}
            }"#,
        )
        .unwrap();
        match reply {
            WeatherReply::Report { location, current } => {
                assert_eq!(location, "London, United Kingdom");
                assert_eq!(current.temperature, Some(12.5));
                assert_eq!(current.windspeed, Some(9.0));
                assert_eq!(current.time.as_deref(), Some("2026-10-18T14:00"));
            }
            other => panic!("expected a report, got {other:?}"),
        }
    }
}
