//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Feature layer metadata (`<layer url>?f=json`)

use crate::core::error::{FetchError, RequestStage};
use crate::fetch::page::check_service_error;
use esri_symbology::Renderer;

#[derive(Deserialize, Clone, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LayerMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    pub copyright_text: Option<String>,
    pub document_info: Option<DocumentInfo>,
    pub drawing_info: Option<DrawingInfo>,
    /// Layer extent in the spatial reference of the service
    pub extent: Option<Extent>,
    pub max_scale: Option<f64>,
    pub advanced_query_capabilities: Option<AdvancedQueryCapabilities>,
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct DocumentInfo {
    #[serde(rename = "Author")]
    pub author: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DrawingInfo {
    /// Untyped renderer, see `esri_symbology::Renderer::from_json`
    pub renderer: Option<serde_json::Value>,
}

/// Extent as received. Empty layers report null or `"NaN"` coordinates, which are kept as `None`.
#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Extent {
    #[serde(default, deserialize_with = "lenient_coord")]
    pub xmin: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coord")]
    pub ymin: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coord")]
    pub xmax: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coord")]
    pub ymax: Option<f64>,
    pub spatial_reference: Option<SpatialReference>,
}

fn lenient_coord<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|v| v.is_finite()))
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SpatialReference {
    pub wkid: Option<u32>,
    pub latest_wkid: Option<u32>,
}

#[derive(Deserialize, Clone, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedQueryCapabilities {
    #[serde(default)]
    pub supports_pagination: bool,
}

impl LayerMetadata {
    pub fn from_json(body: &str) -> Result<LayerMetadata, FetchError> {
        let stage = RequestStage::Metadata;
        let json: serde_json::Value =
            serde_json::from_str(body).map_err(|e| FetchError::transport(stage, e))?;
        check_service_error(&json, stage)?;
        serde_json::from_value(json).map_err(|e| FetchError::transport(stage, e))
    }

    /// Layer name with underscores replaced by spaces
    pub fn display_name(&self) -> Option<String> {
        self.name
            .as_ref()
            .filter(|name| !name.is_empty())
            .map(|name| name.replace('_', " "))
    }

    pub fn data_custodian(&self) -> Option<&str> {
        self.document_info
            .as_ref()
            .and_then(|info| info.author.as_deref())
            .filter(|author| !author.is_empty())
    }

    pub fn supports_pagination(&self) -> bool {
        self.advanced_query_capabilities
            .as_ref()
            .map_or(false, |caps| caps.supports_pagination)
    }

    /// Renderer of the layer, if the service declares one
    pub fn renderer(&self) -> Option<Renderer> {
        self.drawing_info
            .as_ref()
            .and_then(|info| info.renderer.as_ref())
            .map(Renderer::from_json)
    }
}
