//! The two user actions as a pure transition function
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt;

use super::state::FilterState;
use crate::data::MembershipMap;
use crate::error::Result;

/// User action understood by the filter store
#[derive(Debug, Clone, Copy)]
pub enum FilterAction<'a> {
    /// Rebuild the state from a membership map, every flag off
    Init(&'a MembershipMap),

    /// Flip one flag
    Toggle { category: &'a str, keyword: &'a str },
}

/// Names the action without its payload; `Init` prints only map sizes
impl fmt::Display for FilterAction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(membership) => write!(
                f,
                "INIT ({} categories, {} keywords)",
                membership.category_count(),
                membership.keyword_count()
            ),
            Self::Toggle { category, keyword } => write!(f, "TOGGLE {category}/{keyword}"),
        }
    }
}

/// Applies `action` to `state`, returning the next state
pub fn reduce(state: &FilterState, action: FilterAction<'_>) -> Result<FilterState> {
    match action {
        FilterAction::Init(membership) => Ok(FilterState::init(membership)),
        FilterAction::Toggle { category, keyword } => state.toggle(category, keyword),
    }
}
