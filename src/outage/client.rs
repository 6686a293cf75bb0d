//! HTTP client for the planned-outages feed

use super::types::{OutageSchedule, RawGroupSchedule};
use crate::config::OutagesConfig;
use crate::error::{HestiaError, Result};
use crate::logging::get_logger;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Capability interface for fetching a group's outage schedule.
///
/// The driver consumes this trait so tests can substitute a fake feed.
#[async_trait]
pub trait ScheduleProvider: Send + Sync {
    async fn fetch(&self, group: &str) -> Result<OutageSchedule>;
}

/// Client for the DTEK/Yasno blackout-service API
pub struct DtekClient {
    endpoint: String,
    http: reqwest::Client,
    logger: crate::logging::StructuredLogger,
}

impl DtekClient {
    /// Create a new feed client from configuration
    pub fn new(config: &OutagesConfig) -> Result<Self> {
        let logger = get_logger("outage");
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()?;
        Ok(Self {
            endpoint: config.endpoint(),
            http,
            logger,
        })
    }
}

#[async_trait]
impl ScheduleProvider for DtekClient {
    async fn fetch(&self, group: &str) -> Result<OutageSchedule> {
        self.logger
            .debug(&format!("Fetching outage schedule from {}", self.endpoint));

        let resp = self.http.get(&self.endpoint).send().await?;
        if !resp.status().is_success() {
            return Err(HestiaError::schedule_unavailable(format!(
                "Feed returned HTTP {}",
                resp.status()
            )));
        }

        // The feed maps group ids to per-day slot lists
        let groups: HashMap<String, RawGroupSchedule> = resp
            .json()
            .await
            .map_err(|e| HestiaError::schedule_unavailable(format!("Malformed feed: {}", e)))?;
        let raw = groups
            .get(group)
            .ok_or_else(|| HestiaError::group_not_found(group))?;

        Ok(OutageSchedule::from_raw(raw))
    }
}
