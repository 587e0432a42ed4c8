//! Esri renderer model and symbol resolution
//!
//! ## Resolve a feature style
//!
//! ```rust
//! use esri_symbology::{resolve, Attributes, AttrValue, FeatureStyle, Renderer};
//!
//! let renderer = Renderer::from_json(&serde_json::json!({
//!     "type": "simple",
//!     "symbol": {"type": "esriSMS", "color": [255, 0, 0, 255], "size": 6}
//! }));
//! let mut attributes = Attributes::new();
//! attributes.insert("OBJECTID".to_string(), AttrValue::Int(1));
//!
//! match FeatureStyle::from_resolution(resolve(&renderer, Some(&attributes))) {
//!     FeatureStyle::Point(point) => assert_eq!(point.pixel_size, Some(8.0)),
//!     _ => unreachable!(),
//! }
//! ```

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod color;
pub mod line_style;
pub mod renderer;
pub mod resolver;
pub mod style;
pub mod symbol;
pub mod value;

pub use color::{points_to_pixels, Color, EsriColor};
pub use line_style::{FillStyle, LineStyle, MarkerStyle};
pub use renderer::{
    ClassBreakInfo, ClassBreaksRenderer, Renderer, SimpleRenderer, UniqueValueInfo,
    UniqueValueRenderer,
};
pub use resolver::{resolve, Resolution};
pub use style::FeatureStyle;
pub use symbol::Symbol;
pub use value::{AttrValue, Attributes};
