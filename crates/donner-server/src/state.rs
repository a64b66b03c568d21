//! Shared application state for the axum router.

use std::sync::Arc;

use chrono_tz::Tz;
use donner_analysis::AdvisoryAnalyzer;
use donner_core::DonnerConfig;

use crate::errors::ServerError;
use crate::fetch::CaltransClient;
use crate::response::CheckTime;

#[derive(Debug, Clone)]
pub struct AppState {
    pub analyzer: Arc<AdvisoryAnalyzer>,
    pub client: Arc<CaltransClient>,
    pub timezone: Tz,
    pub cache_control: String,
    pub debug_sample_len: usize,
}

impl AppState {
    /// Compile the signal pack, build the HTTP client and resolve the timezone.
    pub fn from_config(config: &DonnerConfig) -> Result<Self, ServerError> {
        let analyzer = AdvisoryAnalyzer::from_config(&config.analysis)?;
        let client = CaltransClient::new(&config.fetch)?;
        let zone = config.server.effective_timezone();
        let timezone: Tz = zone.parse().map_err(|_| ServerError::Timezone(zone.clone()))?;

        Ok(Self {
            analyzer: Arc::new(analyzer),
            client: Arc::new(client),
            timezone,
            cache_control: config.server.cache_control_header(),
            debug_sample_len: config.server.effective_debug_sample_len(),
        })
    }

    pub fn now(&self) -> CheckTime {
        CheckTime::now(self.timezone)
    }
}
