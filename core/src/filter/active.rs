//! Active-filter extraction
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::{Deserialize, Serialize};

use super::state::FilterState;

/// A selected `(category, keyword)` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveFilter {
    pub category: String,
    pub keyword: String,
}

impl ActiveFilter {
    pub fn new(category: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            keyword: keyword.into(),
        }
    }
}

/// Selected pairs, categories first then keywords, both in state order.
///
/// Classification tie-breaking and legend colors both follow this order.
pub fn active_filters(state: &FilterState) -> Vec<ActiveFilter> {
    state
        .categories()
        .flat_map(|(category, keywords)| {
            keywords
                .iter()
                .filter(|&(_, &selected)| selected)
                .map(move |(keyword, _)| ActiveFilter::new(category, keyword))
        })
        .collect()
}
