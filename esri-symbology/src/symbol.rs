//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Esri symbols
//!
//! See https://developers.arcgis.com/web-map-specification/objects/symbol/

use crate::color::EsriColor;
use crate::line_style::{FillStyle, LineStyle, MarkerStyle};

/// Symbol for one geometry kind, tagged by the Esri `type` string
#[derive(Deserialize, PartialEq, Clone, Debug)]
#[serde(tag = "type")]
pub enum Symbol {
    /// Picture marker (point geometries)
    #[serde(rename = "esriPMS")]
    Picture(PictureMarkerSymbol),
    /// Simple marker (point geometries)
    #[serde(rename = "esriSMS")]
    Marker(SimpleMarkerSymbol),
    /// Simple line (line geometries)
    #[serde(rename = "esriSLS")]
    Line(SimpleLineSymbol),
    /// Simple fill (polygon geometries)
    #[serde(rename = "esriSFS")]
    Fill(SimpleFillSymbol),
    // Text, picture fill and CIM symbols
    #[serde(other)]
    Unsupported,
}

#[derive(Deserialize, PartialEq, Clone, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PictureMarkerSymbol {
    pub content_type: Option<String>,
    /// Base64 encoded image
    pub image_data: Option<String>,
    pub url: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub angle: Option<f64>,
    pub xoffset: Option<f64>,
    pub yoffset: Option<f64>,
}

#[derive(Deserialize, PartialEq, Clone, Default, Debug)]
pub struct SimpleMarkerSymbol {
    pub color: Option<EsriColor>,
    pub size: Option<f64>,
    pub style: Option<MarkerStyle>,
    pub angle: Option<f64>,
    pub xoffset: Option<f64>,
    pub yoffset: Option<f64>,
    pub outline: Option<SimpleLineSymbol>,
}

/// Line symbol, also used as outline of markers and fills
#[derive(Deserialize, PartialEq, Clone, Default, Debug)]
pub struct SimpleLineSymbol {
    pub color: Option<EsriColor>,
    pub width: Option<f64>,
    pub style: Option<LineStyle>,
}

#[derive(Deserialize, PartialEq, Clone, Default, Debug)]
pub struct SimpleFillSymbol {
    pub color: Option<EsriColor>,
    pub style: Option<FillStyle>,
    pub outline: Option<SimpleLineSymbol>,
}

impl PictureMarkerSymbol {
    /// Image reference: embedded image as data URL, otherwise the symbol URL
    pub fn image_url(&self) -> Option<String> {
        match (&self.image_data, &self.url) {
            (Some(data), _) => Some(format!(
                "data:{};base64,{}",
                self.content_type.as_deref().unwrap_or("image/png"),
                data
            )),
            (None, Some(url)) => Some(url.clone()),
            (None, None) => None,
        }
    }
}

impl SimpleLineSymbol {
    pub fn is_null_style(&self) -> bool {
        self.style.as_ref().map_or(false, |s| s.is_null())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_symbols() {
        let json = r#"{
            "type": "esriSMS",
            "style": "esriSMSCircle",
            "color": [255, 0, 0, 255],
            "size": 8,
            "angle": 0,
            "xoffset": 0,
            "yoffset": 0,
            "outline": {"color": [0, 0, 0, 255], "width": 1}
        }"#;
        let symbol: Symbol = serde_json::from_str(json).unwrap();
        let marker = match symbol {
            Symbol::Marker(m) => m,
            _ => panic!("marker expected"),
        };
        assert_eq!(marker.color, Some(EsriColor([255, 0, 0, 255])));
        assert_eq!(marker.size, Some(8.0));
        assert_eq!(marker.style, Some(MarkerStyle::Circle));
        assert_eq!(marker.outline.unwrap().width, Some(1.0));

        let json = r#"{
            "type": "esriSFS",
            "style": "esriSFSSolid",
            "color": [115, 178, 255, 255],
            "outline": {"type": "esriSLS", "style": "esriSLSNull", "color": [110, 110, 110, 255], "width": 0.4}
        }"#;
        let symbol: Symbol = serde_json::from_str(json).unwrap();
        match symbol {
            Symbol::Fill(fill) => {
                assert_eq!(fill.style, Some(FillStyle::Solid));
                assert!(fill.outline.unwrap().is_null_style());
            }
            _ => panic!("fill expected"),
        }

        let json = r#"{"type": "esriTS", "text": "label"}"#;
        let symbol: Symbol = serde_json::from_str(json).unwrap();
        assert_eq!(symbol, Symbol::Unsupported);
    }

    #[test]
    fn picture_image_url() {
        let json = r#"{
            "type": "esriPMS",
            "url": "471E7E31",
            "imageData": "iVBORw0KGgo=",
            "contentType": "image/png",
            "width": 15,
            "height": 15
        }"#;
        let symbol: Symbol = serde_json::from_str(json).unwrap();
        let picture = match symbol {
            Symbol::Picture(p) => p,
            _ => panic!("picture expected"),
        };
        assert_eq!(
            picture.image_url(),
            Some("data:image/png;base64,iVBORw0KGgo=".to_string())
        );

        let picture = PictureMarkerSymbol {
            url: Some("https://example.com/icon.png".to_string()),
            ..Default::default()
        };
        assert_eq!(
            picture.image_url(),
            Some("https://example.com/icon.png".to_string())
        );
        assert_eq!(PictureMarkerSymbol::default().image_url(), None);
    }
}
