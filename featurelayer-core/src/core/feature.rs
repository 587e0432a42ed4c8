//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub use esri_symbology::{AttrValue, Attributes};

/// Name of the identifier attribute of feature services
pub const FID_FIELD: &str = "OBJECTID";

/// Feature as returned by a feature service query
#[derive(Deserialize, Serialize, Clone, PartialEq, Debug)]
pub struct Feature {
    /// Esri JSON geometry, passed through unchanged
    #[serde(default)]
    pub geometry: Option<serde_json::Value>,
    #[serde(default)]
    pub attributes: Option<Attributes>,
}

impl Feature {
    pub fn new(attributes: Attributes) -> Feature {
        Feature {
            geometry: None,
            attributes: Some(attributes),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.as_ref().and_then(|attrs| attrs.get(name))
    }

    fn fid_value(&self) -> Option<&AttrValue> {
        let attrs = self.attributes.as_ref()?;
        attrs
            .get(FID_FIELD)
            .or_else(|| attrs.get("objectid"))
            .or_else(|| {
                attrs
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(FID_FIELD))
                    .map(|(_, value)| value)
            })
            .filter(|value| !value.is_null())
    }

    /// Feature identifier (`OBJECTID`, looked up case-insensitively)
    pub fn fid(&self) -> Option<String> {
        self.fid_value().map(|value| value.to_string())
    }

    /// Identifier for duplicate detection
    pub fn feature_id(&self) -> Option<FeatureId> {
        self.fid_value().map(FeatureId::from)
    }
}

/// Typed feature identifier. Numbers and strings are distinct ids (`1` != `"1"`),
/// integral doubles equal integers.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub enum FeatureId {
    Number(String),
    Text(String),
    Bool(bool),
}

impl From<&AttrValue> for FeatureId {
    fn from(value: &AttrValue) -> Self {
        match value {
            AttrValue::String(s) => FeatureId::Text(s.clone()),
            AttrValue::Bool(b) => FeatureId::Bool(*b),
            other => FeatureId::Number(other.to_string()),
        }
    }
}

/// Features of a completed fetch
#[derive(Serialize, Clone, PartialEq, Default, Debug)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> FeatureCollection {
        FeatureCollection { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<Feature> {
        self.features.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn feature(json: &str) -> Feature {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn feature_ids() {
        let f = feature(r#"{"attributes": {"OBJECTID": 12, "NAME": "x"}, "geometry": {"x": 1.0, "y": 2.0}}"#);
        assert_eq!(f.fid(), Some("12".to_string()));
        assert_eq!(f.attribute("NAME"), Some(&AttrValue::from("x")));
        assert!(f.geometry.is_some());

        let f = feature(r#"{"attributes": {"objectid": 13}}"#);
        assert_eq!(f.fid(), Some("13".to_string()));
        let f = feature(r#"{"attributes": {"ObjectId": "a-14"}}"#);
        assert_eq!(f.fid(), Some("a-14".to_string()));

        let f = feature(r#"{"attributes": {"FID": 15}}"#);
        assert_eq!(f.fid(), None);
        let f = feature(r#"{"attributes": {"OBJECTID": null}}"#);
        assert_eq!(f.fid(), None);
        let f = feature(r#"{"geometry": null}"#);
        assert_eq!(f.feature_id(), None);
        assert_eq!(f.fid(), None);
        assert_eq!(f.attribute("NAME"), None);
    }

    #[test]
    fn typed_feature_ids() {
        let number = feature(r#"{"attributes": {"OBJECTID": 1}}"#);
        let double = feature(r#"{"attributes": {"OBJECTID": 1.0}}"#);
        let text = feature(r#"{"attributes": {"OBJECTID": "1"}}"#);
        assert_eq!(number.feature_id(), Some(FeatureId::Number("1".to_string())));
        assert_eq!(number.feature_id(), double.feature_id());
        assert_eq!(text.feature_id(), Some(FeatureId::Text("1".to_string())));
        assert_ne!(number.feature_id(), text.feature_id());
        assert_eq!(number.fid(), text.fid());
    }
}
