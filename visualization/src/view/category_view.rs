//! Category panel model
//!
//! One collapsible section per category, one checkbox row per keyword,
//! captioned with the number of entries carrying the keyword. Sections
//! follow filter-state order; search narrows them by category name.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::Serialize;

use umap_explorer_core::{FilterState, MembershipMap};

/// Checkbox row for one keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordRow {
    pub keyword: String,
    pub count: usize,
    pub checked: bool,
}

impl KeywordRow {
    /// Row text, e.g. `Zinc (12)`
    pub fn caption(&self) -> String {
        format!("{} ({})", self.keyword, self.count)
    }
}

/// All keyword rows of one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySection {
    pub name: String,
    pub rows: Vec<KeywordRow>,
}

impl CategorySection {
    pub fn checked_rows(&self) -> impl Iterator<Item = &KeywordRow> + '_ {
        self.rows.iter().filter(|row| row.checked)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryPanel {
    sections: Vec<CategorySection>,
}

impl CategoryPanel {
    pub fn build(state: &FilterState, membership: &MembershipMap) -> Self {
        let sections = state
            .categories()
            .map(|(category, keywords)| CategorySection {
                name: category.to_owned(),
                rows: keywords
                    .iter()
                    .map(|(keyword, &checked)| KeywordRow {
                        keyword: keyword.to_owned(),
                        count: membership.member_count(category, keyword),
                        checked,
                    })
                    .collect(),
            })
            .collect();

        Self { sections }
    }

    pub fn sections(&self) -> &[CategorySection] {
        &self.sections
    }

    /// Sections whose name contains `query`, ignoring case; blank matches all
    pub fn search(&self, query: &str) -> Vec<&CategorySection> {
        let needle = query.trim().to_lowercase();
        self.sections
            .iter()
            .filter(|section| needle.is_empty() || section.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.sections
            .iter()
            .map(|section| section.checked_rows().count())
            .sum()
    }
}
