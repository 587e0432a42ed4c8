//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Style descriptors in renderer units (pixels, normalized colors)

use crate::color::{points_to_pixels, Color, EsriColor};
use crate::line_style::{FillStyle, LineStyle};
use crate::resolver::Resolution;
use crate::symbol::{
    PictureMarkerSymbol, SimpleFillSymbol, SimpleLineSymbol, SimpleMarkerSymbol, Symbol,
};

const DEFAULT_LINE_COLOR: EsriColor = EsriColor([255, 255, 255, 255]);
const DEFAULT_FILL_COLOR: EsriColor = EsriColor([255, 255, 255, 1]);
const DEFAULT_OUTLINE_COLOR: EsriColor = EsriColor([0, 0, 0, 255]);

/// Visual style to apply to one feature
#[derive(Serialize, PartialEq, Clone, Debug)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FeatureStyle {
    /// Leave the feature with the default styling of the renderer
    Unstyled,
    /// Do not draw the feature
    Hidden,
    Billboard(BillboardStyle),
    Point(PointStyle),
    Polyline(PolylineStyle),
    Polygon(PolygonStyle),
}

#[derive(Serialize, PartialEq, Clone, Debug)]
pub struct BillboardStyle {
    pub image: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub pixel_offset: Option<(f64, f64)>,
}

#[derive(Serialize, PartialEq, Clone, Debug)]
pub struct PointStyle {
    pub color: Color,
    pub pixel_size: Option<f64>,
    pub outline_color: Option<Color>,
    pub outline_width: Option<f64>,
}

#[derive(Serialize, PartialEq, Clone, Debug)]
pub struct PolylineStyle {
    pub show: bool,
    pub color: Color,
    pub width: Option<f64>,
    /// Dash pattern, solid line if None
    pub dash_pattern: Option<u16>,
}

#[derive(Serialize, PartialEq, Clone, Debug)]
pub struct PolygonStyle {
    pub show: bool,
    pub fill: Color,
    pub outline: Option<PolylineStyle>,
}

impl FeatureStyle {
    pub fn from_resolution(resolution: Resolution) -> FeatureStyle {
        match resolution {
            Resolution::NotStyled => FeatureStyle::Unstyled,
            Resolution::NoSymbol => FeatureStyle::Hidden,
            Resolution::Symbol(symbol) => FeatureStyle::from_symbol(symbol),
        }
    }

    pub fn from_symbol(symbol: &Symbol) -> FeatureStyle {
        match symbol {
            Symbol::Picture(pms) => picture_style(pms),
            Symbol::Marker(sms) => marker_style(sms),
            Symbol::Line(sls) => FeatureStyle::Polyline(polyline_style(sls, DEFAULT_LINE_COLOR)),
            Symbol::Fill(sfs) => FeatureStyle::Polygon(polygon_style(sfs)),
            Symbol::Unsupported => FeatureStyle::Unstyled,
        }
    }

    /// True if the feature should be drawn at all
    pub fn is_visible(&self) -> bool {
        match self {
            FeatureStyle::Hidden => false,
            FeatureStyle::Polyline(line) => line.show,
            FeatureStyle::Polygon(polygon) => polygon.show,
            _ => true,
        }
    }
}

fn picture_style(pms: &PictureMarkerSymbol) -> FeatureStyle {
    // Only pictures with image data replace the point
    if pms.image_data.is_none() {
        return FeatureStyle::Unstyled;
    }
    let image = match pms.image_url() {
        Some(image) => image,
        None => return FeatureStyle::Unstyled,
    };
    let xoffset = pms.xoffset.unwrap_or(0.0);
    let yoffset = pms.yoffset.unwrap_or(0.0);
    let pixel_offset = if xoffset != 0.0 || yoffset != 0.0 {
        Some((points_to_pixels(xoffset), points_to_pixels(yoffset)))
    } else {
        None
    };
    FeatureStyle::Billboard(BillboardStyle {
        image,
        width: pms.width.map(points_to_pixels),
        height: pms.height.map(points_to_pixels),
        rotation: pms.angle,
        pixel_offset,
    })
}

fn marker_style(sms: &SimpleMarkerSymbol) -> FeatureStyle {
    let color = match sms.color {
        Some(ref color) => Color::from_esri(color),
        None => return FeatureStyle::Unstyled,
    };
    let outline = sms.outline.as_ref();
    FeatureStyle::Point(PointStyle {
        color,
        pixel_size: sms.size.map(points_to_pixels),
        outline_color: outline.and_then(|o| o.color.as_ref()).map(Color::from_esri),
        outline_width: outline.and_then(|o| o.width).map(points_to_pixels),
    })
}

fn polyline_style(sls: &SimpleLineSymbol, default_color: EsriColor) -> PolylineStyle {
    let color = sls.color.unwrap_or(default_color);
    PolylineStyle {
        show: !sls.is_null_style(),
        color: Color::from_esri(&color),
        width: sls.width.map(points_to_pixels),
        dash_pattern: sls.style.as_ref().and_then(LineStyle::dash_pattern),
    }
}

fn polygon_style(sfs: &SimpleFillSymbol) -> PolygonStyle {
    let mut fill = sfs.color.unwrap_or(DEFAULT_FILL_COLOR);
    // Fully transparent interiors are not pickable
    if fill.0[3] == 0 {
        fill.0[3] = 1;
    }
    let outline_hidden = sfs.outline.as_ref().map_or(false, |o| o.is_null_style());
    let show = !(sfs.style == Some(FillStyle::Null) && outline_hidden);
    PolygonStyle {
        show,
        fill: Color::from_esri(&fill),
        outline: sfs
            .outline
            .as_ref()
            .map(|o| polyline_style(o, DEFAULT_OUTLINE_COLOR)),
    }
}
