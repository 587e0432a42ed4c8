//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::error::{FetchError, RequestStage};
use crate::metadata::LayerMetadata;
use esri_symbology::Renderer;

const LAYER_JSON: &str = r#"{
    "currentVersion": 10.81,
    "id": 0,
    "name": "Fire_Hydrants",
    "type": "Feature Layer",
    "description": "Hydrant locations",
    "copyrightText": "City Water Department",
    "documentInfo": {"Author": "Water GIS Team"},
    "geometryType": "esriGeometryPoint",
    "maxScale": 0,
    "extent": {
        "xmin": 2590000.5, "ymin": 1195000.25, "xmax": 2610000.0, "ymax": 1210000.0,
        "spatialReference": {"wkid": 21781, "latestWkid": 2056}
    },
    "drawingInfo": {
        "renderer": {
            "type": "uniqueValue",
            "field1": "STATUS",
            "uniqueValueInfos": [
                {"value": "active", "label": "Active",
                 "symbol": {"type": "esriSMS", "style": "esriSMSCircle", "color": [255, 0, 0, 255], "size": 6}}
            ],
            "defaultSymbol": null
        },
        "transparency": 0
    },
    "advancedQueryCapabilities": {"supportsPagination": true, "supportsStatistics": true},
    "maxRecordCount": 2000
}"#;

#[test]
fn test_layer_metadata() {
    let meta = LayerMetadata::from_json(LAYER_JSON).unwrap();
    assert_eq!(meta.display_name(), Some("Fire Hydrants".to_string()));
    assert_eq!(meta.description, Some("Hydrant locations".to_string()));
    assert_eq!(meta.copyright_text, Some("City Water Department".to_string()));
    assert_eq!(meta.data_custodian(), Some("Water GIS Team"));
    assert_eq!(meta.max_scale, Some(0.0));
    assert!(meta.supports_pagination());
    let extent = meta.extent.as_ref().unwrap();
    assert_eq!(extent.xmin, Some(2590000.5));
    assert_eq!(extent.ymax, Some(1210000.0));
    let sr = extent.spatial_reference.as_ref().unwrap();
    assert_eq!((sr.wkid, sr.latest_wkid), (Some(21781), Some(2056)));

    match meta.renderer() {
        Some(Renderer::UniqueValue(uv)) => {
            assert_eq!(uv.field1, "STATUS");
            assert_eq!(uv.unique_value_infos.len(), 1);
            assert_eq!(uv.default_symbol, None);
        }
        r => panic!("unexpected renderer {:?}", r),
    }
}

#[test]
fn test_minimal_metadata() {
    let meta = LayerMetadata::from_json(r#"{"name": "", "documentInfo": {"Author": ""}}"#).unwrap();
    assert_eq!(meta.display_name(), None);
    assert_eq!(meta.data_custodian(), None);
    assert!(!meta.supports_pagination());
    assert!(meta.renderer().is_none());

    let meta = LayerMetadata::from_json(
        r#"{"drawingInfo": {"renderer": {"type": "dictionary"}}, "advancedQueryCapabilities": {}}"#,
    )
    .unwrap();
    assert_eq!(meta.renderer(), Some(Renderer::Unsupported));
    assert!(!meta.supports_pagination());
}

#[test]
fn test_empty_layer_extent() {
    let meta = LayerMetadata::from_json(
        r#"{
            "name": "Empty_Layer",
            "extent": {"xmin": null, "ymin": null, "xmax": null, "ymax": null,
                       "spatialReference": {"wkid": 4326}},
            "advancedQueryCapabilities": {"supportsPagination": true}
        }"#,
    )
    .unwrap();
    let extent = meta.extent.as_ref().unwrap();
    assert_eq!(extent.xmin, None);
    assert_eq!(extent.ymax, None);
    assert!(meta.supports_pagination());

    let meta = LayerMetadata::from_json(
        r#"{"extent": {"xmin": "NaN", "ymin": "NaN", "xmax": "NaN", "ymax": "NaN"}}"#,
    )
    .unwrap();
    let extent = meta.extent.unwrap();
    assert_eq!((extent.xmin, extent.xmax), (None, None));
    assert_eq!(extent.spatial_reference, None);
}

#[test]
fn test_metadata_errors() {
    let body = r#"{"error": {"code": 499, "message": "Token Required", "details": []}}"#;
    match LayerMetadata::from_json(body) {
        Err(FetchError::Transport { stage, message }) => {
            assert_eq!(stage, RequestStage::Metadata);
            assert_eq!(message, "Service error 499: Token Required");
        }
        r => panic!("unexpected result {:?}", r),
    }
    assert!(LayerMetadata::from_json("not json").is_err());
}
