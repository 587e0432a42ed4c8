//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Color and unit conversions

/// Esri color: red, green, blue and alpha bytes
#[derive(Deserialize, Serialize, PartialEq, Eq, Clone, Copy, Debug)]
pub struct EsriColor(pub [u8; 4]);

/// Normalized RGBA color, each channel in 0.0..=1.0
#[derive(Serialize, PartialEq, Clone, Copy, Debug)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
        alpha: 1.0,
    };

    /// Linear byte to channel mapping, no gamma correction
    pub fn from_bytes(red: u8, green: u8, blue: u8, alpha: u8) -> Color {
        Color {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: alpha as f32 / 255.0,
        }
    }

    pub fn from_esri(color: &EsriColor) -> Color {
        let [r, g, b, a] = color.0;
        Color::from_bytes(r, g, b, a)
    }

    pub fn to_bytes(&self) -> [u8; 4] {
        [
            channel_to_byte(self.red),
            channel_to_byte(self.green),
            channel_to_byte(self.blue),
            channel_to_byte(self.alpha),
        ]
    }

    /// CSS color string, e.g. `rgba(255,0,128,0.25)`
    pub fn to_css_string(&self) -> String {
        let [r, g, b, _] = self.to_bytes();
        format!("rgba({},{},{},{})", r, g, b, self.alpha)
    }
}

fn channel_to_byte(channel: f32) -> u8 {
    (channel.max(0.0).min(1.0) * 255.0).round() as u8
}

/// Esri sizes are given in points, renderers expect pixels (1pt = 4/3px)
pub fn points_to_pixels(value: f64) -> f64 {
    value * 4.0 / 3.0
}

#[test]
fn color_bytes() {
    let color = Color::from_bytes(255, 0, 128, 64);
    assert_eq!(color.red, 1.0);
    assert_eq!(color.green, 0.0);
    assert_eq!(color.to_bytes(), [255, 0, 128, 64]);

    for byte in 0..=255u8 {
        let color = Color::from_bytes(byte, byte, byte, byte);
        assert_eq!(color.to_bytes(), [byte, byte, byte, byte]);
    }
}

#[test]
fn color_from_json() {
    let color: EsriColor = serde_json::from_str("[0, 112, 255, 255]").unwrap();
    assert_eq!(Color::from_esri(&color).to_bytes(), [0, 112, 255, 255]);
    assert_eq!(Color::from_esri(&color).to_css_string(), "rgba(0,112,255,1)");
    assert!(serde_json::from_str::<EsriColor>("[0, 112, 256, 255]").is_err());
}

#[test]
fn point_size_to_pixels() {
    assert_eq!(points_to_pixels(0.0), 0.0);
    assert_eq!(points_to_pixels(6.0), 8.0);
    assert!((points_to_pixels(8.0) - 10.667).abs() < 0.001);
}
