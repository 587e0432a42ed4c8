//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::layer_service::StyledLayer;
use esri_symbology::FeatureStyle;
use serde_json;

type JsonResult = Result<serde_json::Value, serde_json::error::Error>;

/// Layer description with feature ids and resolved styles
pub fn layer_summary(layer: &StyledLayer, with_geometry: bool) -> JsonResult {
    #[derive(Serialize)]
    struct FeatureInfo<'a> {
        id: Option<String>,
        visible: bool,
        style: &'a FeatureStyle,
        #[serde(skip_serializing_if = "Option::is_none")]
        geometry: Option<&'a serde_json::Value>,
    }

    let features: Vec<FeatureInfo> = layer
        .features
        .iter()
        .zip(layer.styles.iter())
        .map(|(feature, style)| FeatureInfo {
            id: feature.fid(),
            visible: style.is_visible(),
            style,
            geometry: if with_geometry {
                feature.geometry.as_ref()
            } else {
                None
            },
        })
        .collect();
    let hidden = layer.styles.iter().filter(|s| !s.is_visible()).count();
    let meta = &layer.metadata;
    Ok(json!({
        "name": layer.name,
        "description": meta.description,
        "attribution": meta.copyright_text,
        "custodian": meta.data_custodian(),
        "maxScale": meta.max_scale,
        "pagination": meta.supports_pagination(),
        "renderer": layer.renderer.as_ref().map(|r| r.type_name()),
        "featureCount": layer.features.len(),
        "hiddenCount": hidden,
        "reachedMaxFeatures": layer.reached_max_features,
        "features": serde_json::to_value(features)?
    }))
}
