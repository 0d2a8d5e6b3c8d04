//! Immutable filter-state store
//!
//! A [`FilterState`] mirrors the key set of the membership map it was
//! initialized from and carries one selection flag per keyword. The key
//! set is fixed at `init`; `toggle` only ever flips an existing flag and
//! returns a new value, leaving the original untouched.
//!
//! Categories sit behind `Arc`, so a toggle copies the outer category list
//! plus the one category it changes and shares every other category with
//! its predecessor.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::sync::Arc;

use log::{debug, trace};

use crate::data::{MembershipMap, OrderedMap};
use crate::error::{ExplorerError, Result};

/// Selection flags per category and keyword, in membership order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    flags: OrderedMap<Arc<OrderedMap<bool>>>,
}

impl FilterState {
    /// Fresh state whose keys mirror `membership` exactly, every flag off
    pub fn init(membership: &MembershipMap) -> Self {
        let flags = membership
            .categories()
            .map(|(category, keywords)| (category, Arc::new(keywords.map_values(|_, _| false))))
            .collect::<OrderedMap<_>>();

        debug!(
            "Initialized filter state with {} categories, {} keywords",
            flags.len(),
            membership.keyword_count()
        );

        Self { flags }
    }

    /// New state with the flag at `(category, keyword)` inverted
    ///
    /// Unknown keys are rejected with [`ExplorerError::InvalidKey`]; the
    /// state never grows new keys.
    pub fn toggle(&self, category: &str, keyword: &str) -> Result<Self> {
        let selected = self
            .is_selected(category, keyword)
            .ok_or_else(|| ExplorerError::invalid_key(category, keyword))?;

        let mut flags = self.flags.clone();
        if let Some(keywords) = flags.get_mut(category) {
            Arc::make_mut(keywords).insert(keyword, !selected);
        }

        trace!("Toggled {}/{}: {} -> {}", category, keyword, selected, !selected);

        Ok(Self { flags })
    }

    /// Flag at `(category, keyword)`, or `None` for an unknown key
    pub fn is_selected(&self, category: &str, keyword: &str) -> Option<bool> {
        self.flags
            .get(category)
            .and_then(|keywords| keywords.get(keyword))
            .copied()
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &OrderedMap<bool>)> + '_ {
        self.flags
            .iter()
            .map(|(category, keywords)| (category, keywords.as_ref()))
    }

    pub fn keywords(&self, category: &str) -> Option<&OrderedMap<bool>> {
        self.flags.get(category).map(Arc::as_ref)
    }

    /// Number of flags currently on
    pub fn selected_count(&self) -> usize {
        self.flags
            .values()
            .map(|keywords| keywords.values().filter(|&&selected| selected).count())
            .sum()
    }

    /// True when the key set matches `membership` category-for-category
    pub fn mirrors(&self, membership: &MembershipMap) -> bool {
        self.flags.len() == membership.category_count()
            && self
                .categories()
                .zip(membership.categories())
                .all(|((category, flags), (expected, keywords))| {
                    category == expected && flags.keys().eq(keywords.keys())
                })
    }
}
