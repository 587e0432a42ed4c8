//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Symbol lookup for a feature

use crate::renderer::{ClassBreaksRenderer, Renderer, UniqueValueRenderer};
use crate::symbol::Symbol;
use crate::value::{AttrValue, Attributes};

/// Result of a symbol lookup
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Resolution<'a> {
    /// Renderer type not supported, keep the default styling
    NotStyled,
    /// No symbol applies, the feature should not be drawn
    NoSymbol,
    Symbol(&'a Symbol),
}

impl<'a> Resolution<'a> {
    fn from_symbol(symbol: Option<&'a Symbol>) -> Resolution<'a> {
        match symbol {
            Some(symbol) => Resolution::Symbol(symbol),
            None => Resolution::NoSymbol,
        }
    }

    pub fn symbol(&self) -> Option<&'a Symbol> {
        match *self {
            Resolution::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }
}

/// Return the symbol of `renderer` which applies to a feature with `attributes`.
///
/// Missing or unusable attribute values never fail, they fall back to the
/// default symbol of the renderer.
pub fn resolve<'a>(renderer: &'a Renderer, attributes: Option<&Attributes>) -> Resolution<'a> {
    match renderer {
        Renderer::Simple(simple) => Resolution::from_symbol(simple.symbol.as_ref()),
        Renderer::UniqueValue(uv) => Resolution::from_symbol(unique_value_symbol(uv, attributes)),
        Renderer::ClassBreaks(cb) => Resolution::from_symbol(class_breaks_symbol(cb, attributes)),
        Renderer::Unsupported => Resolution::NotStyled,
    }
}

fn non_blank<'a>(attributes: &'a Attributes, field: &Option<String>) -> Option<&'a AttrValue> {
    field
        .as_ref()
        .and_then(|f| attributes.get(f))
        .filter(|v| !v.is_blank())
}

/// Composite lookup key `field1[<delim>field2[<delim>field3]]`
pub fn unique_value_key(renderer: &UniqueValueRenderer, attributes: &Attributes) -> Option<String> {
    let value1 = attributes.get(&renderer.field1).filter(|v| !v.is_null())?;
    let mut key = value1.to_string();
    if let Some(ref delimiter) = renderer.field_delimiter {
        if let Some(value2) = non_blank(attributes, &renderer.field2) {
            key.push_str(delimiter);
            key.push_str(&value2.to_string());
            if let Some(value3) = non_blank(attributes, &renderer.field3) {
                key.push_str(delimiter);
                key.push_str(&value3.to_string());
            }
        }
    }
    Some(key)
}

fn unique_value_symbol<'a>(
    renderer: &'a UniqueValueRenderer,
    attributes: Option<&Attributes>,
) -> Option<&'a Symbol> {
    let matched = attributes
        .and_then(|attrs| unique_value_key(renderer, attrs))
        .and_then(|key| {
            renderer
                .unique_value_infos
                .iter()
                .find(|info| info.value == key)
        })
        .and_then(|info| info.symbol.as_ref());
    matched.or(renderer.default_symbol.as_ref())
}

fn class_breaks_symbol<'a>(
    renderer: &'a ClassBreaksRenderer,
    attributes: Option<&Attributes>,
) -> Option<&'a Symbol> {
    let value = attributes
        .and_then(|attrs| attrs.get(&renderer.field))
        .and_then(AttrValue::as_f64);
    let value = match value {
        Some(value) => value,
        None => return renderer.default_symbol.as_ref(),
    };
    // Breaks are evaluated in the given order, they are not sorted or validated
    match renderer
        .class_break_infos
        .iter()
        .find(|info| value <= info.class_max_value)
    {
        Some(info) => info.symbol.as_ref(),
        None => renderer.default_symbol.as_ref(),
    }
}
