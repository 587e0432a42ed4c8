//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{read_config, ApplicationCfg, LayerCfg, DEFAULT_CONFIG};
use crate::core::parse_config;

#[test]
fn test_load_config() {
    let config = read_config("src/test/example.toml");
    println!("{:#?}", config);
    let config: ApplicationCfg = config.expect("load_config returned Err");
    assert_eq!(config.http.timeout, 10);
    assert_eq!(config.http.user_agent, Some("featurelayer-test".to_string()));
    assert_eq!(config.layers.len(), 2);

    let layer = &config.layers[0];
    assert_eq!(layer.name, Some("hydrants".to_string()));
    assert_eq!(layer.features_per_request, 500);
    assert_eq!(layer.max_features, 2000);
    assert!(layer.use_style_information);
    assert_eq!(layer.filter(), "1=1");

    let layer = &config.layers[1];
    assert_eq!(layer.features_per_request, 1000);
    assert_eq!(layer.max_features, 5000);
    assert!(!layer.use_style_information);
    assert_eq!(layer.filter(), "AREA > 100");
}

#[test]
fn test_parse_error() {
    let config: Result<ApplicationCfg, _> = read_config("src/core/mod.rs");
    assert_eq!(
        "src/core/mod.rs - unexpected character found: `/` at line 1",
        config.err().unwrap()
    );

    let config: Result<ApplicationCfg, _> = read_config("wrongfile");
    assert_eq!("Could not find config file!", config.err().unwrap());

    let config: Result<ApplicationCfg, _> = parse_config("[[layer]]\nname = \"x\"".to_string(), "");
    assert!(config.err().unwrap().contains("missing field `url`"));
}

#[test]
fn test_default_config() {
    let config: ApplicationCfg = parse_config(DEFAULT_CONFIG.to_string(), "").unwrap();
    assert_eq!(config.http.timeout, 30);
    assert_eq!(config.layers.len(), 1);
    assert_eq!(config.layers[0].url, "");
}

#[test]
fn test_where_precedence() {
    let toml = r#"
        url = "https://host/arcgis/rest/services/X/FeatureServer/1"
        where = "STATUS = 'open'"
        layer_def = "AREA > 100"
        "#;
    let layer: LayerCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(layer.filter(), "STATUS = 'open'");

    let layer = LayerCfg::new("https://host/arcgis/rest/services/X/FeatureServer/1");
    assert_eq!(layer.filter(), "1=1");
}

#[test]
fn test_env_template() {
    use std::env;

    env::set_var("FEATURELAYER_TEST_HOST", "gis.example.org");
    let toml = r#"
        url = "https://{{env.FEATURELAYER_TEST_HOST}}/arcgis/rest/services/X/FeatureServer/1"
        "#;
    let layer: LayerCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(
        layer.url,
        "https://gis.example.org/arcgis/rest/services/X/FeatureServer/1"
    );

    let toml = r#"url = "https://${HOST}/FeatureServer/1""#;
    let layer: Result<LayerCfg, _> = parse_config(toml.to_string(), "");
    assert_eq!(
        layer.err().unwrap(),
        "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`"
    );
}
