//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::client::FeatureServerClient;
use esri_symbology::{resolve, FeatureStyle, Renderer};
use featurelayer_core::core::config::{ApplicationCfg, HttpCfg, LayerCfg};
use featurelayer_core::core::error::FetchError;
use featurelayer_core::core::feature::FeatureCollection;
use featurelayer_core::core::Config;
use featurelayer_core::fetch::{fetch_all, FetchParams};
use featurelayer_core::metadata::LayerMetadata;

/// Configured feature layer
#[derive(Clone, Debug)]
pub struct FeatureLayer {
    pub name: String,
    pub cfg: LayerCfg,
    client: FeatureServerClient,
}

/// Loaded layer with one style per feature
#[derive(Debug)]
pub struct StyledLayer {
    pub name: String,
    pub metadata: LayerMetadata,
    /// Renderer used for styling, None if styling from the service is disabled
    pub renderer: Option<Renderer>,
    pub features: FeatureCollection,
    /// Styles in the order of `features`
    pub styles: Vec<FeatureStyle>,
    pub reached_max_features: bool,
}

pub struct FeatureLayerService {
    pub http: HttpCfg,
    pub layers: Vec<FeatureLayer>,
}

impl FeatureLayer {
    pub fn new(cfg: &LayerCfg, http: &HttpCfg) -> Result<FeatureLayer, FetchError> {
        let client = FeatureServerClient::new(cfg, http)?;
        let name = cfg
            .name
            .clone()
            .unwrap_or_else(|| format!("layer{}", client.service.layer_id));
        Ok(FeatureLayer {
            name,
            cfg: cfg.clone(),
            client,
        })
    }

    pub fn fetch_params(&self, metadata: &LayerMetadata) -> FetchParams {
        FetchParams {
            page_size: self.cfg.features_per_request,
            max_features: self.cfg.max_features,
            pagination_supported: metadata.supports_pagination(),
        }
    }

    /// Load metadata and all features, then resolve feature styles
    pub async fn load(&self) -> Result<StyledLayer, FetchError> {
        info!("Loading layer '{}' from {}", self.name, self.client.service.layer_url);
        let metadata = self.client.load_metadata().await?;
        let params = self.fetch_params(&metadata);
        let client = &self.client;
        let features = fetch_all(move |offset| client.fetch_page(offset), &params).await?;
        let reached_max_features = features.len() >= self.cfg.max_features;
        if reached_max_features {
            warn!(
                "Layer '{}': maximum number of features ({}) reached",
                self.name, self.cfg.max_features
            );
        }
        let renderer = if self.cfg.use_style_information {
            metadata.renderer()
        } else {
            None
        };
        let styles = style_features(renderer.as_ref(), &features);
        info!(
            "Layer '{}': {} features loaded ({} renderer)",
            self.name,
            features.len(),
            renderer.as_ref().map_or("no", |r| r.type_name())
        );
        Ok(StyledLayer {
            name: self
                .cfg
                .name
                .clone()
                .or_else(|| metadata.display_name())
                .unwrap_or_else(|| self.name.clone()),
            metadata,
            renderer,
            features,
            styles,
            reached_max_features,
        })
    }
}

/// Resolve the style of every feature. Without renderer all features keep their default style.
pub fn style_features(renderer: Option<&Renderer>, features: &FeatureCollection) -> Vec<FeatureStyle> {
    match renderer {
        Some(renderer) => features
            .iter()
            .map(|f| FeatureStyle::from_resolution(resolve(renderer, f.attributes.as_ref())))
            .collect(),
        None => vec![FeatureStyle::Unstyled; features.len()],
    }
}

impl FeatureLayerService {
    pub fn layer(&self, name: &str) -> Option<&FeatureLayer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Load all layers, or the layer `name`
    pub async fn load(&self, name: Option<&str>) -> Result<Vec<StyledLayer>, FetchError> {
        let layers: Vec<&FeatureLayer> = match name {
            Some(name) => vec![self
                .layer(name)
                .ok_or_else(|| FetchError::Config(format!("Layer '{}' not found", name)))?],
            None => self.layers.iter().collect(),
        };
        let mut loaded = Vec::new();
        for layer in layers {
            loaded.push(layer.load().await?);
        }
        Ok(loaded)
    }
}

impl<'a> Config<'a, ApplicationCfg> for FeatureLayerService {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let layers = config
            .layers
            .iter()
            .map(|cfg| FeatureLayer::new(cfg, &config.http).map_err(|e| e.to_string()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FeatureLayerService {
            http: config.http.clone(),
            layers,
        })
    }

    fn gen_config() -> String {
        let toml = r#"
[http]
timeout = 30
#user_agent = "featurelayer"

[[layer]]
name = "layer"
url = "https://services.arcgis.com/<org>/arcgis/rest/services/<name>/FeatureServer/0"
#where = "1=1"
#features_per_request = 1000
#max_features = 5000
#use_style_information = true
"#;
        toml.to_string()
    }

    fn gen_runtime_config(&self) -> String {
        let mut lines = vec!["[http]".to_string()];
        lines.push(format!("timeout = {}", self.http.timeout));
        match self.http.user_agent {
            Some(ref user_agent) => lines.push(format!(r#"user_agent = "{}""#, user_agent)),
            None => lines.push(r#"#user_agent = "featurelayer""#.to_string()),
        }
        for layer in &self.layers {
            lines.push("\n[[layer]]".to_string());
            lines.push(format!(r#"name = "{}""#, layer.name));
            lines.push(format!(r#"url = "{}""#, layer.cfg.url));
            lines.push(format!(r#"where = "{}""#, layer.cfg.where_.replace('"', "\\\"")));
            if layer.cfg.layer_def != "1=1" {
                lines.push(format!(
                    r#"layer_def = "{}""#,
                    layer.cfg.layer_def.replace('"', "\\\"")
                ));
            }
            lines.push(format!(
                "features_per_request = {}",
                layer.cfg.features_per_request
            ));
            lines.push(format!("max_features = {}", layer.cfg.max_features));
            lines.push(format!(
                "use_style_information = {}",
                layer.cfg.use_style_information
            ));
        }
        lines.join("\n") + "\n"
    }
}
