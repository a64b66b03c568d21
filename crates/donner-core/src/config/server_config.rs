//! HTTP server configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address. Default: "127.0.0.1:8080".
    pub bind_addr: Option<String>,
    /// Shared-cache lifetime in seconds. Default: 90.
    pub cache_max_age_secs: Option<u32>,
    /// Stale-while-revalidate grace in seconds. Default: 30.
    pub stale_while_revalidate_secs: Option<u32>,
    /// IANA zone for the human-readable `checkedAt`. Default: "America/Los_Angeles".
    pub timezone: Option<String>,
    /// Plain-text chars echoed in debug output. Default: 3000.
    pub debug_sample_len: Option<usize>,
}

impl ServerConfig {
    pub fn effective_bind_addr(&self) -> String {
        self.bind_addr
            .clone()
            .unwrap_or_else(|| "127.0.0.1:8080".to_string())
    }

    pub fn effective_cache_max_age_secs(&self) -> u32 {
        self.cache_max_age_secs.unwrap_or(90)
    }

    pub fn effective_stale_while_revalidate_secs(&self) -> u32 {
        self.stale_while_revalidate_secs.unwrap_or(30)
    }

    pub fn effective_timezone(&self) -> String {
        self.timezone
            .clone()
            .unwrap_or_else(|| "America/Los_Angeles".to_string())
    }

    pub fn effective_debug_sample_len(&self) -> usize {
        self.debug_sample_len.unwrap_or(constants::DEBUG_SAMPLE_LEN)
    }

    /// Value of the `Cache-Control` header sent with every status response.
    pub fn cache_control_header(&self) -> String {
        format!(
            "s-maxage={}, stale-while-revalidate={}",
            self.effective_cache_max_age_secs(),
            self.effective_stale_while_revalidate_secs()
        )
    }
}
