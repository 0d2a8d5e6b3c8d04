//! Category → keyword → entity-position membership
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::{Deserialize, Serialize};

use super::ordered::OrderedMap;
use crate::error::DataIntegrityError;

/// Positions of the entities tagged with one keyword, in received order
pub type Members = Vec<usize>;

/// Two-level tag taxonomy over entity positions
///
/// Category and keyword order is the order received from the data source
/// and is preserved as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MembershipMap(OrderedMap<OrderedMap<Members>>);

impl MembershipMap {
    pub fn new() -> Self {
        Self(OrderedMap::new())
    }

    /// Adds a keyword under a category, creating the category on first use
    pub fn insert(&mut self, category: &str, keyword: &str, members: Members) {
        match self.0.get_mut(category) {
            Some(keywords) => {
                keywords.insert(keyword, members);
            }
            None => {
                let mut keywords = OrderedMap::new();
                keywords.insert(keyword, members);
                self.0.insert(category, keywords);
            }
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &OrderedMap<Members>)> + '_ {
        self.0.iter()
    }

    pub fn keywords(&self, category: &str) -> Option<&OrderedMap<Members>> {
        self.0.get(category)
    }

    pub fn positions(&self, category: &str, keyword: &str) -> Option<&[usize]> {
        self.0
            .get(category)
            .and_then(|keywords| keywords.get(keyword))
            .map(Vec::as_slice)
    }

    /// Number of entities tagged with a keyword (0 when unknown)
    pub fn member_count(&self, category: &str, keyword: &str) -> usize {
        self.positions(category, keyword).map_or(0, <[usize]>::len)
    }

    pub fn category_count(&self) -> usize {
        self.0.len()
    }

    /// Total number of keywords across all categories
    pub fn keyword_count(&self) -> usize {
        self.0.values().map(OrderedMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when both maps list the same categories and keywords in the same order
    pub fn same_shape(&self, other: &MembershipMap) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|((left_category, left), (right_category, right))| {
                    left_category == right_category && left.keys().eq(right.keys())
                })
    }

    /// Checks that every referenced position addresses one of `entity_count` entities
    pub fn validate(&self, entity_count: usize) -> Result<(), DataIntegrityError> {
        for (category, keywords) in self.0.iter() {
            for (keyword, members) in keywords.iter() {
                if let Some(&position) = members.iter().find(|&&position| position >= entity_count) {
                    return Err(DataIntegrityError::PositionOutOfRange {
                        category: category.to_owned(),
                        keyword: keyword.to_owned(),
                        position,
                        len: entity_count,
                    });
                }
            }
        }
        Ok(())
    }
}

impl From<OrderedMap<OrderedMap<Members>>> for MembershipMap {
    fn from(map: OrderedMap<OrderedMap<Members>>) -> Self {
        Self(map)
    }
}
