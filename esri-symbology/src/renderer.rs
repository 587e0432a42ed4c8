//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Esri renderer definitions (`drawingInfo.renderer`)

use crate::symbol::Symbol;
use crate::value::AttrValue;
use serde::{Deserialize, Deserializer};
use serde_json;

#[derive(Deserialize, PartialEq, Clone, Debug)]
#[serde(tag = "type")]
pub enum Renderer {
    /// One symbol for all features
    #[serde(rename = "simple")]
    Simple(SimpleRenderer),
    /// Symbol by exact match on up to three attribute fields
    #[serde(rename = "uniqueValue")]
    UniqueValue(UniqueValueRenderer),
    /// Symbol by numeric class ranges of one attribute field
    #[serde(rename = "classBreaks")]
    ClassBreaks(ClassBreaksRenderer),
    /// Any other renderer type. No styling is applied.
    #[serde(other)]
    Unsupported,
}

#[derive(Deserialize, PartialEq, Clone, Default, Debug)]
pub struct SimpleRenderer {
    pub label: Option<String>,
    pub description: Option<String>,
    pub symbol: Option<Symbol>,
}

#[derive(Deserialize, PartialEq, Clone, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UniqueValueRenderer {
    pub field1: String,
    pub field2: Option<String>,
    pub field3: Option<String>,
    pub field_delimiter: Option<String>,
    #[serde(default)]
    pub unique_value_infos: Vec<UniqueValueInfo>,
    pub default_symbol: Option<Symbol>,
    pub default_label: Option<String>,
}

#[derive(Deserialize, PartialEq, Clone, Debug)]
pub struct UniqueValueInfo {
    #[serde(deserialize_with = "string_or_number")]
    pub value: String,
    pub label: Option<String>,
    pub description: Option<String>,
    pub symbol: Option<Symbol>,
}

#[derive(Deserialize, PartialEq, Clone, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ClassBreaksRenderer {
    pub field: String,
    pub min_value: Option<f64>,
    #[serde(default)]
    pub class_break_infos: Vec<ClassBreakInfo>,
    pub default_symbol: Option<Symbol>,
    pub default_label: Option<String>,
}

#[derive(Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ClassBreakInfo {
    /// Informational only, breaks are matched by upper bound
    pub class_min_value: Option<f64>,
    pub class_max_value: f64,
    pub label: Option<String>,
    pub description: Option<String>,
    pub symbol: Option<Symbol>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        // Same text form as attribute values, so `1.0` matches an attribute `1`
        serde_json::Value::Number(n) => Ok(match (n.as_i64(), n.as_f64()) {
            (Some(v), _) => AttrValue::Int(v).to_string(),
            (None, Some(v)) => AttrValue::Double(v).to_string(),
            (None, None) => n.to_string(),
        }),
        other => Err(D::Error::custom(format!(
            "invalid unique value `{}`, expected a string or number",
            other
        ))),
    }
}

impl Renderer {
    /// Read a renderer from an untyped JSON document.
    ///
    /// Unknown renderer types as well as malformed renderers result in
    /// `Renderer::Unsupported`.
    pub fn from_json(json: &serde_json::Value) -> Renderer {
        match Renderer::deserialize(json) {
            Ok(renderer) => {
                if renderer == Renderer::Unsupported {
                    info!(
                        "Renderer type {} not supported - no styling applied",
                        json.get("type").unwrap_or(&serde_json::Value::Null)
                    );
                }
                renderer
            }
            Err(e) => {
                warn!("Invalid renderer definition - {}", e);
                Renderer::Unsupported
            }
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Renderer::Simple(_) => "simple",
            Renderer::UniqueValue(_) => "uniqueValue",
            Renderer::ClassBreaks(_) => "classBreaks",
            Renderer::Unsupported => "unsupported",
        }
    }
}
