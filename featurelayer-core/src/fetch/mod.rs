//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod page;
pub mod paged;
pub mod service_url;

pub use self::page::FeaturePage;
pub use self::paged::{fetch_all, FetchParams};
pub use self::service_url::ServiceReference;
