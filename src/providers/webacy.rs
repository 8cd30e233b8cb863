//! Webacy API Client - the upstream risk oracle
//!
//! One endpoint matters here:
//!   GET {base}/addresses/{address}?chain={code}
//! with an `x-api-key` header. Success is HTTP 200 with a JSON body in
//! the (loosely specified) `AuditResponse` shape.
//!
//! Failure handling is deliberate and final: there is NO retry logic.
//! A timeout, connect failure, non-200 status, or unparsable body each
//! map to a distinct error code and terminate the audit. The body text
//! of a non-200 response is preserved so the user sees what the API said.

use std::time::Duration;
use tracing::{info, warn};

use crate::models::config::{Chain, GuardConfig};
use crate::models::errors::{AppError, AppResult};
use crate::models::types::AuditResponse;

/// Webacy address-lookup client
#[derive(Debug)]
pub struct WebacyClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl WebacyClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout,
        }
    }

    pub fn from_config(config: &GuardConfig) -> Self {
        Self::new(
            config.base_url.clone(),
            config.api_key.clone(),
            config.request_timeout,
        )
    }

    /// Fetch the risk assessment for one address on one chain.
    pub async fn address_risk(&self, address: &str, chain: Chain) -> AppResult<AuditResponse> {
        let url = format!("{}/addresses/{}", self.base_url, address);

        info!("🔍 Webacy: Fetching risk for {} on {}", address, chain.display_name());

        let response = self
            .client
            .get(&url)
            .query(&[("chain", chain.code())])
            .header("x-api-key", &self.api_key)
            .header("accept", "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(AppError::from)?;

        let status = response.status();
        let body = response.text().await.map_err(AppError::from)?;

        if !status.is_success() {
            warn!("⚠️ Webacy: HTTP {} for {}", status.as_u16(), address);
            return Err(AppError::upstream(status.as_u16(), &body));
        }

        let data: AuditResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::invalid_json(format!("Webacy response is not valid JSON: {}", e)))?;

        info!("📊 Webacy: {} issues reported", data.issue_count());

        Ok(data)
    }
}
