//! Caltrans retrieval client.
//!
//! Two transports against the same page: a browser-style GET and, when that
//! fails, a form POST. Each attempt is bounded by the configured timeout and
//! a body at or below the minimum length counts as a failure.

use std::time::Duration;

use donner_core::config::FetchConfig;
use donner_core::errors::DonnerErrorCode;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER, USER_AGENT};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::FetchError;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE_EN_US: &str = "en-US,en;q=0.9";
const ROADS_PATH: &str = "/roadscell.php";
const PROBE_SAMPLE_CHARS: usize = 800;

/// Which transport produced the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdvisorySource {
    CaltransGet,
    CaltransPost,
}

impl AdvisorySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CaltransGet => "caltrans-get",
            Self::CaltransPost => "caltrans-post",
        }
    }
}

/// Raw page plus its provenance.
#[derive(Debug, Clone)]
pub struct FetchedAdvisory {
    pub source: AdvisorySource,
    pub raw: String,
}

/// Result of one connectivity probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProbeOutcome {
    Reachable {
        status: u16,
        ok: bool,
    },
    Page {
        status: u16,
        length: usize,
        #[serde(rename = "first800")]
        head: String,
    },
    Failed {
        error: String,
    },
}

/// Connectivity report for the reference site and both transports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectivityReport {
    #[serde(rename = "google")]
    pub reference: ProbeOutcome,
    #[serde(rename = "caltransMain")]
    pub caltrans_get: ProbeOutcome,
    #[serde(rename = "caltransPost")]
    pub caltrans_post: ProbeOutcome,
}

/// HTTP client for roads.dot.ca.gov.
#[derive(Debug, Clone)]
pub struct CaltransClient {
    client: Client,
    base_url: String,
    probe_url: String,
    road_number: String,
    user_agent: String,
    min_body_len: usize,
    probe_timeout: Duration,
}

impl CaltransClient {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let timeout = Duration::from_millis(config.effective_timeout_ms());
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: config.effective_base_url(),
            probe_url: config.effective_probe_url(),
            road_number: config.effective_road_number(),
            user_agent: config.effective_user_agent(),
            min_body_len: config.effective_min_body_len(),
            probe_timeout: Duration::from_millis(config.effective_probe_timeout_ms()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_request(&self) -> RequestBuilder {
        self.client
            .get(format!("{}{ROADS_PATH}", self.base_url))
            .query(&[("roadnumber", self.road_number.as_str())])
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, ACCEPT_HTML)
            .header(ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_EN_US)
            .header(REFERER, format!("{}/", self.base_url))
    }

    fn post_request(&self) -> RequestBuilder {
        self.client
            .post(format!("{}{ROADS_PATH}", self.base_url))
            .header(USER_AGENT, &self.user_agent)
            .header(REFERER, format!("{}/", self.base_url))
            .header(ORIGIN, &self.base_url)
            .form(&[("roadnumber", self.road_number.as_str()), ("submit", "Search")])
    }

    /// Primary transport.
    pub async fn fetch_get(&self) -> Result<String, FetchError> {
        let response = self.get_request().send().await?;
        self.accept_page(response).await
    }

    /// Fallback transport.
    pub async fn fetch_post(&self) -> Result<String, FetchError> {
        let response = self.post_request().send().await?;
        self.accept_page(response).await
    }

    async fn accept_page(&self, response: Response) -> Result<String, FetchError> {
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        let len = body.chars().count();
        if len <= self.min_body_len {
            return Err(FetchError::TooShort {
                len,
                min: self.min_body_len,
            });
        }
        Ok(body)
    }

    /// GET, then POST. `None` when both transports fail.
    pub async fn fetch_advisory(&self) -> Option<FetchedAdvisory> {
        match self.fetch_get().await {
            Ok(raw) => return Some(self.fetched(AdvisorySource::CaltransGet, raw)),
            Err(e) => warn!(
                target: "donner::fetch",
                code = e.error_code(),
                error = %e,
                "caltrans GET failed, trying POST"
            ),
        }

        match self.fetch_post().await {
            Ok(raw) => Some(self.fetched(AdvisorySource::CaltransPost, raw)),
            Err(e) => {
                warn!(
                    target: "donner::fetch",
                    code = e.error_code(),
                    error = %e,
                    "caltrans POST failed, all sources exhausted"
                );
                None
            }
        }
    }

    fn fetched(&self, source: AdvisorySource, raw: String) -> FetchedAdvisory {
        info!(
            target: "donner::fetch",
            source = source.as_str(),
            length = raw.len(),
            "fetched advisory page"
        );
        FetchedAdvisory { source, raw }
    }

    /// Probe the reference URL and both transports without validating bodies.
    pub async fn probe(&self) -> ConnectivityReport {
        let reference = match self
            .client
            .get(&self.probe_url)
            .timeout(self.probe_timeout)
            .send()
            .await
        {
            Ok(r) => ProbeOutcome::Reachable {
                status: r.status().as_u16(),
                ok: r.status().is_success(),
            },
            Err(e) => ProbeOutcome::Failed {
                error: e.to_string(),
            },
        };
        let caltrans_get = page_outcome(self.get_request().send().await).await;
        let caltrans_post = page_outcome(self.post_request().send().await).await;

        info!(target: "donner::fetch", base_url = %self.base_url, "connectivity probe finished");

        ConnectivityReport {
            reference,
            caltrans_get,
            caltrans_post,
        }
    }
}

async fn page_outcome(result: Result<Response, reqwest::Error>) -> ProbeOutcome {
    let response = match result {
        Ok(r) => r,
        Err(e) => {
            return ProbeOutcome::Failed {
                error: e.to_string(),
            }
        }
    };
    let status = response.status().as_u16();
    match response.text().await {
        Ok(text) => ProbeOutcome::Page {
            status,
            length: text.chars().count(),
            head: text.chars().take(PROBE_SAMPLE_CHARS).collect(),
        },
        Err(e) => ProbeOutcome::Failed {
            error: e.to_string(),
        },
    }
}
