//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Paginated feature loading
//!
//! Feature services cap the number of features returned by one request and
//! the total count is not known in advance (the count API times out for large
//! services). Pages are requested until the service is exhausted, starts
//! repeating itself or `max_features` is exceeded.

use crate::core::error::FetchError;
use crate::core::feature::{Feature, FeatureCollection, FeatureId};
use crate::fetch::page::FeaturePage;
use std::collections::HashSet;
use std::future::Future;

#[derive(PartialEq, Clone, Debug)]
pub struct FetchParams {
    /// Offset increment between two requests
    pub page_size: u64,
    /// Paging stops when more than `max_features` features were received.
    /// The last page is not truncated.
    pub max_features: usize,
    pub pagination_supported: bool,
}

#[derive(PartialEq, Clone, Copy, Debug)]
enum FetchPhase {
    Fetching,
    Done,
}

/// Outcome of merging a follow-up page
#[derive(PartialEq, Debug)]
enum Merge {
    Appended,
    /// Empty page, no more features
    Exhausted,
    /// All features were received before
    Repeated,
}

struct FetchState {
    phase: FetchPhase,
    accumulated: Vec<Feature>,
    seen_ids: HashSet<Option<FeatureId>>,
    current_offset: u64,
    exceeded_limit: bool,
}

impl FetchState {
    /// State seeded with the first page. Its features are always kept.
    fn new(first: FeaturePage) -> FetchState {
        let seen_ids = first.features.iter().map(|f| f.feature_id()).collect();
        FetchState {
            phase: FetchPhase::Fetching,
            accumulated: first.features,
            seen_ids,
            current_offset: 0,
            exceeded_limit: first.exceeded_transfer_limit,
        }
    }

    fn wants_more(&self, params: &FetchParams) -> bool {
        self.phase == FetchPhase::Fetching
            && self.accumulated.len() <= params.max_features
            && self.exceeded_limit
    }

    fn next_offset(&mut self, page_size: u64) -> u64 {
        self.current_offset += page_size;
        self.current_offset
    }

    /// Append a follow-up page. Empty and repeated pages end the fetch.
    fn merge(&mut self, page: FeaturePage) -> Merge {
        if page.features.is_empty() {
            self.phase = FetchPhase::Done;
            return Merge::Exhausted;
        }
        let ids = page.fids();
        if ids.iter().all(|id| self.seen_ids.contains(id)) {
            self.phase = FetchPhase::Done;
            return Merge::Repeated;
        }
        self.seen_ids.extend(ids);
        self.accumulated.extend(page.features);
        self.exceeded_limit = page.exceeded_transfer_limit;
        Merge::Appended
    }

    fn finish(self) -> FeatureCollection {
        FeatureCollection::new(self.accumulated)
    }
}

/// Load all features of a layer with `page_fetch`.
///
/// `page_fetch` is called with the result offset, or `None` for a single
/// unpaginated request. Pages are requested one after the other. Any error
/// aborts the fetch and already received features are dropped.
pub async fn fetch_all<F, Fut>(
    mut page_fetch: F,
    params: &FetchParams,
) -> Result<FeatureCollection, FetchError>
where
    F: FnMut(Option<u64>) -> Fut,
    Fut: Future<Output = Result<FeaturePage, FetchError>>,
{
    if !params.pagination_supported {
        let page = page_fetch(None).await?;
        debug!("Received {} features without pagination", page.features.len());
        return Ok(FeatureCollection::new(page.features));
    }

    let first = page_fetch(Some(0)).await?;
    debug!(
        "Received {} features at offset 0 (exceededTransferLimit: {})",
        first.features.len(),
        first.exceeded_transfer_limit
    );
    let mut state = FetchState::new(first);
    while state.wants_more(params) {
        let offset = state.next_offset(params.page_size);
        let page = page_fetch(Some(offset)).await?;
        let received = page.features.len();
        let exceeded = page.exceeded_transfer_limit;
        match state.merge(page) {
            Merge::Appended => {
                debug!(
                    "Received {} features at offset {} (exceededTransferLimit: {})",
                    received, offset, exceeded
                );
            }
            Merge::Exhausted => {
                debug!("No more features at offset {}", offset);
            }
            Merge::Repeated => {
                info!(
                    "Features at offset {} were already received - stop paging",
                    offset
                );
            }
        }
    }
    let collection = state.finish();
    debug!("Fetch done with {} features", collection.len());
    Ok(collection)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::feature::{AttrValue, Attributes};

    fn page(ids: Vec<AttrValue>, exceeded: bool) -> FeaturePage {
        let features = ids
            .into_iter()
            .map(|id| {
                let mut attributes = Attributes::new();
                attributes.insert("OBJECTID".to_string(), id);
                Feature::new(attributes)
            })
            .collect();
        FeaturePage::new(features, exceeded)
    }

    fn params() -> FetchParams {
        FetchParams {
            page_size: 2,
            max_features: 100,
            pagination_supported: true,
        }
    }

    #[test]
    fn merge_ends_fetch_phase() {
        let mut state = FetchState::new(page(vec![AttrValue::Int(1), AttrValue::Int(2)], true));
        assert!(state.wants_more(&params()));
        assert_eq!(state.merge(page(vec![AttrValue::Int(3)], true)), Merge::Appended);
        assert_eq!(state.phase, FetchPhase::Fetching);
        assert!(state.wants_more(&params()));

        assert_eq!(state.merge(page(vec![AttrValue::Int(2), AttrValue::Int(3)], true)), Merge::Repeated);
        assert_eq!(state.phase, FetchPhase::Done);
        assert!(!state.wants_more(&params()));

        let mut state = FetchState::new(page(vec![AttrValue::Int(1)], true));
        assert_eq!(state.merge(page(vec![], true)), Merge::Exhausted);
        assert!(!state.wants_more(&params()));
        assert_eq!(state.finish().len(), 1);
    }

    #[test]
    fn numeric_and_text_ids_are_distinct() {
        let mut state = FetchState::new(page(vec![AttrValue::Int(1), AttrValue::Int(2)], true));
        assert_eq!(
            state.merge(page(vec!["1".into(), "2".into()], false)),
            Merge::Appended
        );
        assert!(!state.wants_more(&params()));
        assert_eq!(state.finish().len(), 4);
    }
}
