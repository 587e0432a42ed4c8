//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use regex::Regex;
use serde::Deserialize;
use std;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
    /// Generate configuration template with runtime information
    fn gen_runtime_config(&self) -> String {
        Self::gen_config()
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    #[serde(default)]
    pub http: HttpCfg,
    #[serde(rename = "layer")]
    pub layers: Vec<LayerCfg>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct HttpCfg {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    pub user_agent: Option<String>,
}

impl Default for HttpCfg {
    fn default() -> Self {
        HttpCfg {
            timeout: default_timeout(),
            user_agent: None,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct LayerCfg {
    pub name: Option<String>,
    /// Feature layer URL, e.g. `https://host/arcgis/rest/services/Name/FeatureServer/0`
    pub url: String,
    /// Query filter
    #[serde(rename = "where", default = "default_filter")]
    pub where_: String,
    /// Legacy filter, used when `where` is not set
    #[serde(default = "default_filter")]
    pub layer_def: String,
    /// Page size of paginated requests
    #[serde(default = "default_features_per_request")]
    pub features_per_request: u64,
    /// Stop paging once more features than this were received
    #[serde(default = "default_max_features")]
    pub max_features: usize,
    /// Style features with the renderer of the service
    #[serde(default = "default_use_style")]
    pub use_style_information: bool,
}

pub const DEFAULT_FILTER: &str = "1=1";

pub fn default_filter() -> String {
    DEFAULT_FILTER.to_string()
}

pub fn default_features_per_request() -> u64 {
    1000
}

pub fn default_max_features() -> usize {
    5000
}

fn default_use_style() -> bool {
    true
}

fn default_timeout() -> u64 {
    30
}

impl LayerCfg {
    pub fn new(url: &str) -> LayerCfg {
        LayerCfg {
            name: None,
            url: url.to_string(),
            where_: default_filter(),
            layer_def: default_filter(),
            features_per_request: default_features_per_request(),
            max_features: default_max_features(),
            use_style_information: default_use_style(),
        }
    }

    /// Effective query filter. `where` takes precedence unless it is the default.
    pub fn filter(&self) -> &str {
        if self.where_ == DEFAULT_FILTER {
            &self.layer_def
        } else {
            &self.where_
        }
    }
}

pub const DEFAULT_CONFIG: &'static str = r#"
[http]
timeout = 30

[[layer]]
url = ""
"#;

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    // Check for old ${var} expressions
    let re = Regex::new(r"\$\{([[:alnum:]]+)\}").unwrap();
    if re.is_match(&config_toml) {
        return Err(
            "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        );
    }

    // Parse template
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("Template error: {}", e))?;
    let mut context = Context::new();
    let env: HashMap<String, String> = env::vars().collect();
    context.insert("env", &env);
    let toml = tera.render(path, &context).map_err(|e| match e.source() {
        Some(source) => format!("Template error: {}", source),
        None => format!("Template error: {}", e),
    })?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
