//! HTTP Remote Gateway - reqwest implementation
//!
//! Talks JSON to the backend REST API. The backend historically answers
//! either enveloped (`{"sites": [...]}`, `{"site": {...}}`) or bare; both
//! shapes are decoded here and normalized before they reach the store.
//! Anything else is an invalid-response error.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::{Site, StoreError, StoreResult, TimelinePatch};

use super::remote::{GatewayConfig, RemoteGateway};

/// Accepted shapes of `GET /sites`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SitesResponse {
    Enveloped { sites: Vec<Site> },
    Bare(Vec<Site>),
}

impl SitesResponse {
    fn into_sites(self) -> Vec<Site> {
        match self {
            SitesResponse::Enveloped { sites } => sites,
            SitesResponse::Bare(sites) => sites,
        }
    }
}

/// Accepted shapes of `GET /sites/{id}/timeline`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SiteResponse {
    Bare(Site),
    Enveloped { site: Site },
}

impl SiteResponse {
    fn into_site(self) -> Site {
        match self {
            SiteResponse::Bare(site) => site,
            SiteResponse::Enveloped { site } => site,
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> StoreResult<T> {
    serde_json::from_value(value).map_err(|e| StoreError::InvalidResponse(e.to_string()))
}

/// reqwest-backed gateway
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> StoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::Network(e.to_string()))?;
        Ok(HttpGateway {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json(&self, path: &str) -> StoreResult<Value> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?
            .error_for_status()
            .map_err(|e| StoreError::Network(e.to_string()))?;
        response
            .json::<Value>()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))
    }

    async fn patch_json(&self, path: &str, body: &Value) -> StoreResult<()> {
        self.client
            .patch(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?
            .error_for_status()
            .map_err(|e| StoreError::Network(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl RemoteGateway for HttpGateway {
    async fn fetch_all_sites(&self) -> StoreResult<Vec<Site>> {
        let value = self.get_json("/sites").await?;
        decode::<SitesResponse>(value).map(SitesResponse::into_sites)
    }

    async fn fetch_site(&self, site_id: &str) -> StoreResult<Site> {
        let value = self.get_json(&format!("/sites/{}/timeline", site_id)).await?;
        decode::<SiteResponse>(value).map(SiteResponse::into_site)
    }

    async fn patch_timeline_item(
        &self,
        site_id: &str,
        item_id: u32,
        patch: &TimelinePatch,
    ) -> StoreResult<()> {
        let body = serde_json::to_value(patch)
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;
        self.patch_json(&format!("/sites/{}/timeline/{}", site_id, item_id), &body)
            .await
    }

    async fn patch_checklist_item(
        &self,
        site_id: &str,
        item_id: u32,
        checked: bool,
    ) -> StoreResult<()> {
        let body = serde_json::json!({ "checked": checked });
        self.patch_json(&format!("/sites/{}/checklist/{}", site_id, item_id), &body)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sites_response_accepts_envelope_and_bare_array() {
        let enveloped = serde_json::json!({ "sites": [] });
        let sites = decode::<SitesResponse>(enveloped).unwrap().into_sites();
        assert!(sites.is_empty());

        let bare = serde_json::json!([{ "id": "a", "name": "A" }]);
        let sites = decode::<SitesResponse>(bare).unwrap().into_sites();
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].id, "a");
    }

    #[test]
    fn site_response_accepts_envelope_and_bare_object() {
        let bare = serde_json::json!({ "id": "a", "name": "A" });
        let site = decode::<SiteResponse>(bare).unwrap().into_site();
        assert_eq!(site.id, "a");

        let enveloped = serde_json::json!({ "site": { "id": "b", "name": "B" } });
        let site = decode::<SiteResponse>(enveloped).unwrap().into_site();
        assert_eq!(site.id, "b");
    }

    #[test]
    fn unexpected_shapes_are_invalid_responses() {
        let err = decode::<SitesResponse>(serde_json::json!({ "data": 1 })).unwrap_err();
        assert!(matches!(err, StoreError::InvalidResponse(_)));

        let err = decode::<SiteResponse>(serde_json::json!(42)).unwrap_err();
        assert!(matches!(err, StoreError::InvalidResponse(_)));
    }
}
