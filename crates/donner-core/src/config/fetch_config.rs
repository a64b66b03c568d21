//! Retrieval configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

const DEFAULT_BASE_URL: &str = "https://roads.dot.ca.gov";
const DEFAULT_PROBE_URL: &str = "https://www.google.com";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";
const DEFAULT_ROAD_NUMBER: &str = "80";

/// Configuration for the Caltrans fetch client.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FetchConfig {
    /// Origin of the road-conditions site. Default: "https://roads.dot.ca.gov".
    pub base_url: Option<String>,
    /// Reference URL for the connectivity probe. Default: "https://www.google.com".
    pub probe_url: Option<String>,
    /// Highway number queried. Default: "80".
    pub road_number: Option<String>,
    /// Per-attempt timeout in milliseconds. Default: 15000.
    pub timeout_ms: Option<u64>,
    /// Probe timeout in milliseconds. Default: 10000.
    pub probe_timeout_ms: Option<u64>,
    /// Bodies at or below this length count as failures. Default: 200.
    pub min_body_len: Option<usize>,
    /// Browser user agent sent with both transports.
    pub user_agent: Option<String>,
}

impl FetchConfig {
    /// Returns the base URL without a trailing slash.
    pub fn effective_base_url(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    pub fn effective_probe_url(&self) -> String {
        self.probe_url.clone().unwrap_or_else(|| DEFAULT_PROBE_URL.to_string())
    }

    pub fn effective_road_number(&self) -> String {
        self.road_number
            .clone()
            .unwrap_or_else(|| DEFAULT_ROAD_NUMBER.to_string())
    }

    pub fn effective_timeout_ms(&self) -> u64 {
        self.timeout_ms.unwrap_or(constants::FETCH_TIMEOUT_MS)
    }

    pub fn effective_probe_timeout_ms(&self) -> u64 {
        self.probe_timeout_ms.unwrap_or(constants::PROBE_TIMEOUT_MS)
    }

    pub fn effective_min_body_len(&self) -> usize {
        self.min_body_len.unwrap_or(constants::MIN_BODY_LEN)
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string())
    }
}
