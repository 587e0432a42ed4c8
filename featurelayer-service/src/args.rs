//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::layer_service::FeatureLayerService;
use clap::ArgMatches;
use featurelayer_core::core::config::{ApplicationCfg, HttpCfg, LayerCfg};
use featurelayer_core::core::{read_config, Config};
use std::str::FromStr;

fn parse_arg<T: FromStr>(args: &ArgMatches, name: &str) -> Result<Option<T>, String> {
    match args.value_of(name) {
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| format!("Invalid value '{}' for '{}'", value, name)),
        None => Ok(None),
    }
}

fn apply_layer_args(layer: &mut LayerCfg, args: &ArgMatches) -> Result<(), String> {
    if let Some(filter) = args.value_of("where") {
        layer.where_ = filter.to_string();
    }
    if let Some(count) = parse_arg(args, "features-per-request")? {
        layer.features_per_request = count;
    }
    if let Some(max) = parse_arg(args, "max-features")? {
        layer.max_features = max;
    }
    if let Some(use_style) = parse_arg(args, "use-style")? {
        layer.use_style_information = use_style;
    }
    Ok(())
}

/// Configuration from config file or from `--url`. Command line options override file settings.
pub fn config_from_args(args: &ArgMatches) -> Result<ApplicationCfg, String> {
    let mut config = if let Some(cfgpath) = args.value_of("config") {
        info!("Reading configuration from '{}'", cfgpath);
        if args.value_of("url").is_some() {
            warn!("Ignoring argument `url`");
        }
        read_config(cfgpath)?
    } else if let Some(url) = args.value_of("url") {
        ApplicationCfg {
            http: HttpCfg::default(),
            layers: vec![LayerCfg::new(url)],
        }
    } else {
        return Err("Either 'config' or 'url' is required".to_string());
    };
    if let Some(timeout) = parse_arg(args, "timeout")? {
        config.http.timeout = timeout;
    }
    for layer in config.layers.iter_mut() {
        apply_layer_args(layer, args)?;
    }
    Ok(config)
}

pub fn service_from_args(args: &ArgMatches) -> Result<FeatureLayerService, String> {
    let config = config_from_args(args)?;
    FeatureLayerService::from_config(&config)
}

/// Configuration template. With `--config` or `--url` the effective runtime configuration.
pub fn gen_config(args: &ArgMatches) -> Result<String, String> {
    let mut config = "# featurelayer configuration\n".to_string();
    if args.value_of("config").is_some() || args.value_of("url").is_some() {
        let service = service_from_args(args)?;
        config.push_str(&service.gen_runtime_config());
    } else {
        config.push_str(&FeatureLayerService::gen_config());
    }
    Ok(config)
}
