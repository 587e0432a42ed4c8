//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Feature service URLs
//!
//! See https://developers.arcgis.com/rest/services-reference/enterprise/query-feature-service-layer-.htm

use crate::core::error::FetchError;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'*');

/// Feature layer of a feature service
#[derive(PartialEq, Clone, Debug)]
pub struct ServiceReference {
    /// Layer URL without query string
    pub layer_url: String,
    /// Service URL ending with `FeatureServer`
    pub service_url: String,
    pub layer_id: u32,
}

/// Parameters of a feature query
#[derive(PartialEq, Clone, Debug)]
pub struct QueryParams {
    pub filter: String,
    /// Page size of paginated requests
    pub record_count: u64,
}

impl ServiceReference {
    /// Split a layer URL into service URL and layer id
    pub fn parse(url: &str) -> Result<ServiceReference, FetchError> {
        let layer_url = url
            .split(&['?', '#'][..])
            .next()
            .unwrap_or("")
            .trim_end_matches('/');
        let re = Regex::new(r"^(.*FeatureServer)/(\d+)").unwrap();
        let caps = re
            .captures(layer_url)
            .ok_or_else(|| FetchError::InvalidServiceReference(url.to_string()))?;
        let layer_id = caps[2]
            .parse::<u32>()
            .map_err(|_| FetchError::InvalidServiceReference(url.to_string()))?;
        Ok(ServiceReference {
            layer_url: layer_url.to_string(),
            service_url: caps[1].to_string(),
            layer_id,
        })
    }

    pub fn metadata_url(&self) -> String {
        format!("{}?f=json", self.layer_url)
    }

    /// Query URL, with paging parameters if `offset` is given
    pub fn query_url(&self, params: &QueryParams, offset: Option<u64>) -> String {
        let mut query = vec![
            ("f", "json".to_string()),
            ("where", params.filter.clone()),
            ("outFields", "*".to_string()),
            ("outSR", "4326".to_string()),
        ];
        if let Some(offset) = offset {
            query.push(("resultRecordCount", params.record_count.to_string()));
            query.push(("resultOffset", offset.to_string()));
        }
        let query = query
            .iter()
            .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_VALUE)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}/query?{}", self.layer_url, query)
    }
}
