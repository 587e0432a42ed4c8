//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;

pub mod args;
pub mod client;
pub mod layer_service;
pub mod summary;

pub use layer_service::{FeatureLayer, FeatureLayerService, StyledLayer};
