//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use std::fmt;
use thiserror::Error;

/// Request which failed
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum RequestStage {
    Metadata,
    /// Feature query, with result offset for paginated requests
    Page(Option<u64>),
}

impl fmt::Display for RequestStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RequestStage::Metadata => write!(f, "metadata request"),
            RequestStage::Page(None) => write!(f, "feature request"),
            RequestStage::Page(Some(offset)) => {
                write!(f, "feature request (offset {})", offset)
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid feature service `{0}` - expected an URL ending with `FeatureServer/<layer id>`")]
    InvalidServiceReference(String),

    #[error("{stage} failed - {message}")]
    Transport {
        stage: RequestStage,
        message: String,
    },

    #[error("Configuration error - {0}")]
    Config(String),
}

impl FetchError {
    pub fn transport<E: fmt::Display>(stage: RequestStage, err: E) -> FetchError {
        FetchError::Transport {
            stage,
            message: err.to_string(),
        }
    }
}

#[test]
fn error_messages() {
    let err = FetchError::transport(RequestStage::Page(Some(2000)), "HTTP status 500");
    assert_eq!(
        err.to_string(),
        "feature request (offset 2000) failed - HTTP status 500"
    );
    let err = FetchError::transport(RequestStage::Metadata, "timeout");
    assert_eq!(err.to_string(), "metadata request failed - timeout");
}
