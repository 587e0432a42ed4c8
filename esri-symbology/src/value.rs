//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use std::collections::BTreeMap;
use std::fmt;

/// Feature attribute value as delivered by a feature service
#[derive(Deserialize, Serialize, Clone, PartialEq, Debug)]
#[serde(untagged)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
}

/// Attribute name to value mapping of one feature
pub type Attributes = BTreeMap<String, AttrValue>;

impl AttrValue {
    pub fn is_null(&self) -> bool {
        *self == AttrValue::Null
    }

    /// Null values and empty strings carry no information for key building
    pub fn is_blank(&self) -> bool {
        match self {
            AttrValue::Null => true,
            AttrValue::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Numeric interpretation used for class break comparisons.
    /// Strings are parsed, booleans and nulls have no numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Int(v) => Some(*v as f64),
            AttrValue::Double(v) if !v.is_nan() => Some(*v),
            AttrValue::String(s) => s.trim().parse::<f64>().ok().filter(|v| !v.is_nan()),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AttrValue::Null => write!(f, "null"),
            AttrValue::Bool(v) => write!(f, "{}", v),
            AttrValue::Int(v) => write!(f, "{}", v),
            // Integral doubles are written without fraction ("3", not "3.0")
            AttrValue::Double(v) if v.fract() == 0.0 && v.abs() < 1e15 => {
                write!(f, "{}", *v as i64)
            }
            AttrValue::Double(v) => write!(f, "{}", v),
            AttrValue::String(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::String(v.to_string())
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Double(v)
    }
}

#[test]
fn attr_value_from_json() {
    let attrs: Attributes = serde_json::from_str(
        r#"{"OBJECTID": 7, "NAME": "Main St", "DEPTH": 2.5, "OPEN": true, "NOTE": null}"#,
    )
    .unwrap();
    assert_eq!(attrs["OBJECTID"], AttrValue::Int(7));
    assert_eq!(attrs["NAME"], AttrValue::from("Main St"));
    assert_eq!(attrs["DEPTH"], AttrValue::Double(2.5));
    assert_eq!(attrs["OPEN"], AttrValue::Bool(true));
    assert!(attrs["NOTE"].is_null());
}

#[test]
fn attr_value_numeric() {
    assert_eq!(AttrValue::Int(10).as_f64(), Some(10.0));
    assert_eq!(AttrValue::from(" 12.5 ").as_f64(), Some(12.5));
    assert_eq!(AttrValue::from("n/a").as_f64(), None);
    assert_eq!(AttrValue::Bool(true).as_f64(), None);
    assert_eq!(AttrValue::Null.as_f64(), None);
}

#[test]
fn attr_value_display() {
    assert_eq!(AttrValue::Double(3.0).to_string(), "3");
    assert_eq!(AttrValue::Double(3.25).to_string(), "3.25");
    assert_eq!(AttrValue::Int(-4).to_string(), "-4");
    assert!(AttrValue::from("").is_blank());
    assert!(!AttrValue::Int(0).is_blank());
}
