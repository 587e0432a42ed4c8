//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Named Esri line, fill and marker styles
//!
//! See https://developers.arcgis.com/web-map-specification/objects/esriSLS_symbol/

/// Simple line style (`esriSLS*`)
#[derive(Deserialize, PartialEq, Eq, Clone, Debug)]
#[serde(from = "String")]
pub enum LineStyle {
    Solid,
    Dash,
    DashDot,
    DashDotDot,
    Dot,
    LongDash,
    LongDashDot,
    ShortDash,
    ShortDashDot,
    ShortDashDotDot,
    ShortDot,
    Null,
    Other(String),
}

impl From<String> for LineStyle {
    fn from(name: String) -> Self {
        match name.as_str() {
            "esriSLSSolid" => LineStyle::Solid,
            "esriSLSDash" => LineStyle::Dash,
            "esriSLSDashDot" => LineStyle::DashDot,
            "esriSLSDashDotDot" => LineStyle::DashDotDot,
            "esriSLSDot" => LineStyle::Dot,
            "esriSLSLongDash" => LineStyle::LongDash,
            "esriSLSLongDashDot" => LineStyle::LongDashDot,
            "esriSLSShortDash" => LineStyle::ShortDash,
            "esriSLSShortDashDot" => LineStyle::ShortDashDot,
            "esriSLSShortDashDotDot" => LineStyle::ShortDashDotDot,
            "esriSLSShortDot" => LineStyle::ShortDot,
            "esriSLSNull" => LineStyle::Null,
            _ => LineStyle::Other(name),
        }
    }
}

impl LineStyle {
    /// 16 bit dash pattern, one bit per pixel segment (set = drawn).
    ///
    /// `None` for solid lines and for styles without a pattern.
    pub fn dash_pattern(&self) -> Option<u16> {
        match self {
            LineStyle::Dash => Some(0x00FF),
            LineStyle::DashDot => Some(0x1C47),
            LineStyle::DashDotDot => Some(0x1D77),
            LineStyle::Dot => Some(0x0101),
            LineStyle::LongDash => Some(0x0FFF),
            LineStyle::LongDashDot => Some(0x3FE7),
            LineStyle::ShortDash => Some(0x0F0F),
            LineStyle::ShortDashDot => Some(0x3C63),
            LineStyle::ShortDashDotDot => Some(0x3CDB),
            LineStyle::ShortDot => Some(0x5555),
            LineStyle::Solid | LineStyle::Null | LineStyle::Other(_) => None,
        }
    }

    pub fn is_null(&self) -> bool {
        *self == LineStyle::Null
    }
}

/// Simple fill style (`esriSFS*`)
#[derive(Deserialize, PartialEq, Eq, Clone, Debug)]
#[serde(from = "String")]
pub enum FillStyle {
    Solid,
    Null,
    Other(String),
}

impl From<String> for FillStyle {
    fn from(name: String) -> Self {
        match name.as_str() {
            "esriSFSSolid" => FillStyle::Solid,
            "esriSFSNull" => FillStyle::Null,
            _ => FillStyle::Other(name),
        }
    }
}

/// Simple marker style (`esriSMS*`)
#[derive(Deserialize, PartialEq, Eq, Clone, Debug)]
#[serde(from = "String")]
pub enum MarkerStyle {
    Circle,
    Cross,
    Diamond,
    Square,
    Triangle,
    X,
    Other(String),
}

impl From<String> for MarkerStyle {
    fn from(name: String) -> Self {
        match name.as_str() {
            "esriSMSCircle" => MarkerStyle::Circle,
            "esriSMSCross" => MarkerStyle::Cross,
            "esriSMSDiamond" => MarkerStyle::Diamond,
            "esriSMSSquare" => MarkerStyle::Square,
            "esriSMSTriangle" => MarkerStyle::Triangle,
            "esriSMSX" => MarkerStyle::X,
            _ => MarkerStyle::Other(name),
        }
    }
}

#[test]
fn parse_styles() {
    let style: LineStyle = serde_json::from_str(r#""esriSLSDashDot""#).unwrap();
    assert_eq!(style, LineStyle::DashDot);
    assert_eq!(style.dash_pattern(), Some(7239));

    let style: LineStyle = serde_json::from_str(r#""esriSLSNull""#).unwrap();
    assert!(style.is_null());
    assert_eq!(style.dash_pattern(), None);

    let style: LineStyle = serde_json::from_str(r#""esriSLSWavy""#).unwrap();
    assert_eq!(style, LineStyle::Other("esriSLSWavy".to_string()));

    let style: FillStyle = serde_json::from_str(r#""esriSFSNull""#).unwrap();
    assert_eq!(style, FillStyle::Null);
    let style: MarkerStyle = serde_json::from_str(r#""esriSMSDiamond""#).unwrap();
    assert_eq!(style, MarkerStyle::Diamond);
}
