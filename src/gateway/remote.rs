//! Remote Gateway trait and configuration

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{Site, StoreResult, TimelinePatch};

const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Backend connection settings
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// API base URL, e.g. "http://localhost:3000/api"
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GatewayConfig {
    /// Read the base URL from `SITE_API_BASE_URL`, falling back to the
    /// local development default.
    pub fn from_env() -> Self {
        let base_url = std::env::var("SITE_API_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        GatewayConfig {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Abstract backend operations
///
/// Implementations return already-normalized site data; envelope handling
/// never leaks past this boundary.
#[async_trait]
pub trait RemoteGateway: Send + Sync {
    /// List all sites
    async fn fetch_all_sites(&self) -> StoreResult<Vec<Site>>;

    /// Fetch one site (the whole site, checklist included)
    async fn fetch_site(&self, site_id: &str) -> StoreResult<Site>;

    /// Push a partial timeline item update
    async fn patch_timeline_item(
        &self,
        site_id: &str,
        item_id: u32,
        patch: &TimelinePatch,
    ) -> StoreResult<()>;

    /// Push a checklist item checked-state update
    async fn patch_checklist_item(
        &self,
        site_id: &str,
        item_id: u32,
        checked: bool,
    ) -> StoreResult<()>;
}
