//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use featurelayer_core::core::config::{HttpCfg, LayerCfg};
use featurelayer_core::core::error::{FetchError, RequestStage};
use featurelayer_core::fetch::service_url::QueryParams;
use featurelayer_core::fetch::{FeaturePage, ServiceReference};
use featurelayer_core::metadata::LayerMetadata;
use std::time::Duration;

/// HTTP access to one feature layer
#[derive(Clone, Debug)]
pub struct FeatureServerClient {
    http: reqwest::Client,
    pub service: ServiceReference,
    pub query: QueryParams,
}

impl FeatureServerClient {
    pub fn new(layer_cfg: &LayerCfg, http_cfg: &HttpCfg) -> Result<FeatureServerClient, FetchError> {
        let service = ServiceReference::parse(&layer_cfg.url)?;
        let user_agent = http_cfg
            .user_agent
            .clone()
            .unwrap_or_else(|| format!("featurelayer/{}", env!("CARGO_PKG_VERSION")));
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(http_cfg.timeout))
            .user_agent(user_agent)
            .build()
            .map_err(|e| FetchError::Config(format!("HTTP client setup failed: {}", e)))?;
        Ok(FeatureServerClient {
            http,
            service,
            query: QueryParams {
                filter: layer_cfg.filter().to_string(),
                record_count: layer_cfg.features_per_request,
            },
        })
    }

    async fn get(&self, url: &str, stage: RequestStage) -> Result<String, FetchError> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::transport(stage, e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::transport(stage, format!("HTTP status {}", status)));
        }
        response
            .text()
            .await
            .map_err(|e| FetchError::transport(stage, e))
    }

    pub async fn load_metadata(&self) -> Result<LayerMetadata, FetchError> {
        let body = self
            .get(&self.service.metadata_url(), RequestStage::Metadata)
            .await?;
        LayerMetadata::from_json(&body)
    }

    /// Query one page of features. `None` requests all features without paging parameters.
    pub async fn fetch_page(&self, offset: Option<u64>) -> Result<FeaturePage, FetchError> {
        let stage = RequestStage::Page(offset);
        let url = self.service.query_url(&self.query, offset);
        let body = self.get(&url, stage).await?;
        FeaturePage::from_json(&body, stage)
    }
}
