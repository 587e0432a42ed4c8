//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::error::{FetchError, RequestStage};
use crate::core::feature::{Feature, FeatureId};

/// One response of a feature query
#[derive(Deserialize, Clone, PartialEq, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FeaturePage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub features: Vec<Feature>,
    /// More features match the query than returned in this response
    #[serde(default)]
    pub exceeded_transfer_limit: bool,
}

#[derive(Deserialize, Debug)]
struct ServiceErrorResponse {
    error: ServiceError,
}

#[derive(Deserialize, Debug)]
struct ServiceError {
    code: Option<i64>,
    message: Option<String>,
    #[serde(default)]
    details: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Feature>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    Ok(Option::<Vec<Feature>>::deserialize(deserializer)?.unwrap_or_default())
}

impl FeaturePage {
    pub fn new(features: Vec<Feature>, exceeded_transfer_limit: bool) -> FeaturePage {
        FeaturePage {
            features,
            exceeded_transfer_limit,
        }
    }

    /// Parse a query response. Service error documents are returned as transport errors.
    pub fn from_json(body: &str, stage: RequestStage) -> Result<FeaturePage, FetchError> {
        let json: serde_json::Value =
            serde_json::from_str(body).map_err(|e| FetchError::transport(stage, e))?;
        check_service_error(&json, stage)?;
        serde_json::from_value(json).map_err(|e| FetchError::transport(stage, e))
    }

    /// Identifiers of all features in this page
    pub fn fids(&self) -> Vec<Option<FeatureId>> {
        self.features.iter().map(|f| f.feature_id()).collect()
    }
}

/// Feature services report errors with HTTP status 200 and an `error` object
pub fn check_service_error(json: &serde_json::Value, stage: RequestStage) -> Result<(), FetchError> {
    if json.get("error").is_none() {
        return Ok(());
    }
    let response: ServiceErrorResponse =
        serde_json::from_value(json.clone()).map_err(|e| FetchError::transport(stage, e))?;
    let err = response.error;
    let mut message = format!(
        "Service error {}: {}",
        err.code.map_or("?".to_string(), |c| c.to_string()),
        err.message.unwrap_or_default()
    );
    if !err.details.is_empty() {
        message.push_str(&format!(" ({})", err.details.join(", ")));
    }
    Err(FetchError::Transport { stage, message })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_page() {
        let body = r#"{
            "objectIdFieldName": "OBJECTID",
            "geometryType": "esriGeometryPoint",
            "spatialReference": {"wkid": 4326},
            "exceededTransferLimit": true,
            "features": [
                {"attributes": {"OBJECTID": 1, "NAME": "a"}, "geometry": {"x": 7.4, "y": 46.9}},
                {"attributes": {"OBJECTID": 2, "NAME": "b"}, "geometry": {"x": 7.5, "y": 46.8}}
            ]
        }"#;
        let page = FeaturePage::from_json(body, RequestStage::Page(Some(0))).unwrap();
        assert!(page.exceeded_transfer_limit);
        assert_eq!(page.features.len(), 2);
        assert_eq!(
            page.fids(),
            vec![
                Some(FeatureId::Number("1".to_string())),
                Some(FeatureId::Number("2".to_string()))
            ]
        );

        let page = FeaturePage::from_json(r#"{"features": null}"#, RequestStage::Page(None)).unwrap();
        assert_eq!(page, FeaturePage::default());
        let page = FeaturePage::from_json("{}", RequestStage::Page(None)).unwrap();
        assert!(page.features.is_empty());
        assert!(!page.exceeded_transfer_limit);
    }

    #[test]
    fn service_errors() {
        let body = r#"{"error": {"code": 400, "message": "Unable to complete operation.", "details": ["Invalid query parameters."]}}"#;
        let err = FeaturePage::from_json(body, RequestStage::Page(Some(1000))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "feature request (offset 1000) failed - Service error 400: Unable to complete operation. (Invalid query parameters.)"
        );

        match FeaturePage::from_json("<html>", RequestStage::Page(Some(0))) {
            Err(FetchError::Transport { stage, .. }) => {
                assert_eq!(stage, RequestStage::Page(Some(0)))
            }
            r => panic!("unexpected result {:?}", r),
        }
    }
}
