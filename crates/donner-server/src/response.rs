//! JSON bodies returned by the HTTP endpoints.

use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use donner_analysis::AnalysisTrace;
use donner_core::types::{RoadStatus, Scores, Verdict};
use serde::Serialize;

use crate::fetch::{AdvisorySource, ConnectivityReport};

pub const DETAIL_UNREACHABLE: &str = "Unable to reach Caltrans website.";
pub const CONNECTIVITY_MESSAGE: &str = "Connectivity test results";

/// Human-readable local time plus the machine timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckTime {
    pub checked_at: String,
    pub timestamp: String,
}

impl CheckTime {
    /// `checked_at` reads like "Jan 5, 2025, 3:04:05 PM"; `timestamp` is
    /// RFC 3339 UTC with milliseconds.
    pub fn at(now: DateTime<Utc>, tz: Tz) -> Self {
        Self {
            checked_at: now
                .with_timezone(&tz)
                .format("%b %-d, %Y, %-I:%M:%S %p")
                .to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn now(tz: Tz) -> Self {
        Self::at(Utc::now(), tz)
    }
}

/// `?debug=true` payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugInfo {
    pub raw_length: usize,
    pub plain_text_length: usize,
    pub plain_text_sample: String,
    pub trace: AnalysisTrace,
}

/// Body of `GET /api/status`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status: RoadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<Scores>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<AdvisorySource>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    pub checked_at: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugInfo>,
}

impl StatusResponse {
    pub fn analyzed(verdict: Verdict, source: AdvisorySource, time: CheckTime) -> Self {
        Self {
            status: verdict.status,
            scores: Some(verdict.scores),
            note: verdict.note,
            source: Some(source),
            details: Vec::new(),
            checked_at: time.checked_at,
            timestamp: time.timestamp,
            debug: None,
        }
    }

    /// Both transports failed.
    pub fn unreachable(time: CheckTime) -> Self {
        Self::unknown_with_detail(DETAIL_UNREACHABLE.to_string(), time)
    }

    /// Anything else went wrong while serving the request.
    pub fn server_error(message: &str, time: CheckTime) -> Self {
        Self::unknown_with_detail(format!("Server error: {message}"), time)
    }

    fn unknown_with_detail(detail: String, time: CheckTime) -> Self {
        Self {
            status: RoadStatus::Unknown,
            scores: None,
            note: None,
            source: None,
            details: vec![detail],
            checked_at: time.checked_at,
            timestamp: time.timestamp,
            debug: None,
        }
    }

    pub fn with_debug(mut self, debug: DebugInfo) -> Self {
        self.debug = Some(debug);
        self
    }
}

/// Body of `GET /api/test`.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectivityResponse {
    pub message: &'static str,
    pub timestamp: String,
    pub results: ConnectivityReport,
}

impl ConnectivityResponse {
    pub fn new(results: ConnectivityReport, time: CheckTime) -> Self {
        Self {
            message: CONNECTIVITY_MESSAGE,
            timestamp: time.timestamp,
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fixed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 20, 4, 5).unwrap() + chrono::Duration::milliseconds(123)
    }

    #[test]
    fn check_time_formats_pacific_and_utc() {
        let time = CheckTime::at(fixed(), chrono_tz::America::Los_Angeles);
        assert_eq!(time.checked_at, "Jan 15, 2025, 12:04:05 PM");
        assert_eq!(time.timestamp, "2025-01-15T20:04:05.123Z");
    }

    #[test]
    fn check_time_uses_daylight_saving() {
        let summer = Utc.with_ymd_and_hms(2025, 7, 4, 8, 30, 0).unwrap();
        let time = CheckTime::at(summer, chrono_tz::America::Los_Angeles);
        assert_eq!(time.checked_at, "Jul 4, 2025, 1:30:00 AM");
    }

    #[test]
    fn unreachable_body_has_details_and_no_scores() {
        let body = StatusResponse::unreachable(CheckTime::at(fixed(), chrono_tz::UTC));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], "unknown");
        assert_eq!(json["details"][0], DETAIL_UNREACHABLE);
        assert!(json.get("scores").is_none());
        assert!(json.get("source").is_none());
        assert_eq!(json["checkedAt"], "Jan 15, 2025, 8:04:05 PM");
    }

    #[test]
    fn server_error_body_uses_full_local_time() {
        let body = StatusResponse::server_error(
            "analysis task panicked",
            CheckTime::at(fixed(), chrono_tz::America::Los_Angeles),
        );
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], "unknown");
        assert_eq!(json["details"], serde_json::json!(["Server error: analysis task panicked"]));
        assert_eq!(json["checkedAt"], "Jan 15, 2025, 12:04:05 PM");
        assert_eq!(json["timestamp"], "2025-01-15T20:04:05.123Z");
        assert!(json.get("scores").is_none());
        assert!(json.get("note").is_none());
        assert!(json.get("debug").is_none());
    }

    #[test]
    fn analyzed_body_carries_verdict() {
        let verdict = Verdict::new(RoadStatus::Open, Scores::new(0, 16));
        let body = StatusResponse::analyzed(verdict, AdvisorySource::CaltransPost, CheckTime::at(fixed(), chrono_tz::UTC));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], "open");
        assert_eq!(json["scores"]["open"], 16);
        assert_eq!(json["source"], "caltrans-post");
        assert!(json.get("note").is_none());
        assert!(json.get("details").is_none());
        assert!(json.get("debug").is_none());
    }
}
