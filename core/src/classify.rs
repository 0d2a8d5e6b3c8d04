//! Point classification
//!
//! Partitions every entity of a dataset into exactly one display group.
//! Active filters are walked in extraction order; an entity takes the
//! keyword of the first active filter that lists it and is never relabeled
//! by a later one, so no entity is emitted twice.
//!
//! Output order is a rendering contract: unlabeled points come first in
//! dataset order so they paint beneath the labeled groups, which follow in
//! active-filter order, each in membership order.
//!
//! Cost is O(n + m) for n entities and m membership entries touched by the
//! active filters.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::data::{Dataset, Entity, MembershipMap};
use crate::error::{DataIntegrityError, Result};
use crate::filter::ActiveFilter;

/// Display group of a classified point
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// Not covered by any active filter
    Unlabeled,

    /// Claimed by the active filter at `rank`
    Keyword { keyword: String, rank: usize },
}

impl Label {
    pub fn keyword(&self) -> Option<&str> {
        match self {
            Self::Unlabeled => None,
            Self::Keyword { keyword, .. } => Some(keyword.as_str()),
        }
    }

    /// Position of the winning filter in the active-filter sequence
    pub fn rank(&self) -> Option<usize> {
        match self {
            Self::Unlabeled => None,
            Self::Keyword { rank, .. } => Some(*rank),
        }
    }

    pub fn is_unlabeled(&self) -> bool {
        matches!(self, Self::Unlabeled)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlabeled => f.write_str("unlabeled"),
            Self::Keyword { keyword, .. } => f.write_str(keyword),
        }
    }
}

/// An entity with its display group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedPoint {
    /// Position of the entity in the dataset
    pub position: usize,
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub label: Label,
}

impl ClassifiedPoint {
    fn new(position: usize, entity: &Entity, label: Label) -> Self {
        Self {
            position,
            id: entity.id.clone(),
            x: entity.x,
            y: entity.y,
            label,
        }
    }
}

/// Classifies every entity of `dataset` against `active`
pub fn classify(dataset: &Dataset, active: &[ActiveFilter]) -> Result<Vec<ClassifiedPoint>> {
    classify_entities(dataset.entities(), dataset.membership(), active)
}

pub(crate) fn classify_entities(
    entities: &[Entity],
    membership: &MembershipMap,
    active: &[ActiveFilter],
) -> Result<Vec<ClassifiedPoint>> {
    // Rank of the filter that claimed each entity
    let mut claimed: Vec<Option<usize>> = vec![None; entities.len()];
    let mut groups: Vec<Vec<usize>> = Vec::with_capacity(active.len());

    for (rank, filter) in active.iter().enumerate() {
        let positions = membership
            .positions(&filter.category, &filter.keyword)
            .ok_or_else(|| DataIntegrityError::UnknownFilter {
                category: filter.category.clone(),
                keyword: filter.keyword.clone(),
            })?;

        let mut group = Vec::new();
        for &position in positions {
            let slot = claimed
                .get_mut(position)
                .ok_or_else(|| DataIntegrityError::PositionOutOfRange {
                    category: filter.category.clone(),
                    keyword: filter.keyword.clone(),
                    position,
                    len: entities.len(),
                })?;

            if slot.is_none() {
                *slot = Some(rank);
                group.push(position);
            }
        }
        groups.push(group);
    }

    let mut points = Vec::with_capacity(entities.len());

    points.extend(
        entities
            .iter()
            .enumerate()
            .filter(|&(position, _)| claimed[position].is_none())
            .map(|(position, entity)| ClassifiedPoint::new(position, entity, Label::Unlabeled)),
    );
    let unlabeled = points.len();

    for ((rank, filter), group) in active.iter().enumerate().zip(groups) {
        points.extend(group.into_iter().map(|position| {
            let label = Label::Keyword {
                keyword: filter.keyword.clone(),
                rank,
            };
            ClassifiedPoint::new(position, &entities[position], label)
        }));
    }

    debug_assert_eq!(points.len(), entities.len());
    debug!(
        "Classified {} points against {} active filters ({} unlabeled)",
        points.len(),
        active.len(),
        unlabeled
    );

    Ok(points)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::error::ExplorerError;
    use crate::filter::{active_filters, FilterState};

    fn dataset(membership: MembershipMap) -> Dataset {
        Dataset::new(
            vec!["e0".into(), "e1".into(), "e2".into()],
            vec![0.0, 1.0, 2.0],
            vec![0.0, -1.0, -2.0],
            membership,
        )
        .unwrap()
    }

    fn summary(points: &[ClassifiedPoint]) -> Vec<String> {
        points
            .iter()
            .map(|point| format!("{}:{}", point.id, point.label))
            .collect()
    }

    #[test]
    fn test_no_active_filters_leaves_everything_unlabeled() {
        let mut membership = MembershipMap::new();
        membership.insert("A", "x", vec![0]);
        membership.insert("A", "y", vec![1]);
        let dataset = dataset(membership);

        let state = FilterState::init(dataset.membership());
        let active = active_filters(&state);
        assert!(active.is_empty());

        let points = classify(&dataset, &active).unwrap();
        assert_eq!(summary(&points), vec!["e0:unlabeled", "e1:unlabeled", "e2:unlabeled"]);
    }

    #[test]
    fn test_single_filter_moves_members_behind_unlabeled() {
        let mut membership = MembershipMap::new();
        membership.insert("A", "x", vec![0]);
        membership.insert("A", "y", vec![1]);
        let dataset = dataset(membership);

        let state = FilterState::init(dataset.membership()).toggle("A", "x").unwrap();
        let active = active_filters(&state);
        assert_eq!(active, vec![ActiveFilter::new("A", "x")]);

        let points = classify(&dataset, &active).unwrap();
        assert_eq!(summary(&points), vec!["e1:unlabeled", "e2:unlabeled", "e0:x"]);
        assert_eq!(points[2].label, Label::Keyword { keyword: "x".into(), rank: 0 });
        assert_eq!(points[2].position, 0);
    }

    #[test]
    fn test_first_active_filter_wins_shared_entity() {
        let mut membership = MembershipMap::new();
        membership.insert("A", "x", vec![0]);
        membership.insert("B", "y", vec![0]);
        let dataset = dataset(membership);

        let state = FilterState::init(dataset.membership())
            .toggle("A", "x")
            .and_then(|s| s.toggle("B", "y"))
            .unwrap();
        let points = classify(&dataset, &active_filters(&state)).unwrap();

        assert_eq!(points.len(), 3);
        let e0: Vec<_> = points.iter().filter(|point| point.id == "e0").collect();
        assert_eq!(e0.len(), 1);
        assert_eq!(e0[0].label.keyword(), Some("x"));
    }

    #[test]
    fn test_tie_break_follows_filter_order_not_toggle_order() {
        let mut membership = MembershipMap::new();
        membership.insert("A", "x", vec![0, 1]);
        membership.insert("B", "y", vec![1, 2]);
        let dataset = dataset(membership);

        // y switched on before x; x still precedes y in extraction order
        let state = FilterState::init(dataset.membership())
            .toggle("B", "y")
            .and_then(|s| s.toggle("A", "x"))
            .unwrap();
        let points = classify(&dataset, &active_filters(&state)).unwrap();

        assert_eq!(summary(&points), vec!["e0:x", "e1:x", "e2:y"]);
        assert_eq!(points[2].label.rank(), Some(1));
    }

    #[test]
    fn test_groups_keep_membership_order() {
        let mut membership = MembershipMap::new();
        membership.insert("A", "x", vec![2, 0]);
        let dataset = dataset(membership);

        let points = classify(&dataset, &[ActiveFilter::new("A", "x")]).unwrap();
        assert_eq!(summary(&points), vec!["e1:unlabeled", "e2:x", "e0:x"]);
    }

    #[test]
    fn test_duplicate_position_within_keyword_is_emitted_once() {
        let mut membership = MembershipMap::new();
        membership.insert("A", "x", vec![1, 1]);
        let dataset = dataset(membership);

        let points = classify(&dataset, &[ActiveFilter::new("A", "x")]).unwrap();
        assert_eq!(summary(&points), vec!["e0:unlabeled", "e2:unlabeled", "e1:x"]);
    }

    #[test]
    fn test_output_is_total_and_unique_for_every_state() {
        let mut membership = MembershipMap::new();
        membership.insert("A", "x", vec![0, 1]);
        membership.insert("A", "y", vec![1, 2]);
        membership.insert("B", "z", vec![2, 0]);
        membership.insert("B", "w", vec![]);
        let dataset = dataset(membership);

        let keys = [("A", "x"), ("A", "y"), ("B", "z"), ("B", "w")];
        for mask in 0..(1u32 << keys.len()) {
            let mut state = FilterState::init(dataset.membership());
            for (bit, (category, keyword)) in keys.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    state = state.toggle(category, keyword).unwrap();
                }
            }

            let points = classify(&dataset, &active_filters(&state)).unwrap();
            assert_eq!(points.len(), dataset.len(), "mask {mask:#06b}");

            let ids: HashSet<_> = points.iter().map(|point| point.id.as_str()).collect();
            assert_eq!(ids.len(), dataset.len(), "mask {mask:#06b}");

            // Unlabeled points never follow a labeled one
            let first_labeled = points.iter().position(|point| !point.label.is_unlabeled());
            if let Some(first) = first_labeled {
                assert!(points[first..].iter().all(|point| !point.label.is_unlabeled()));
            }
        }
    }

    #[test]
    fn test_classification_is_deterministic() {
        let mut membership = MembershipMap::new();
        membership.insert("A", "x", vec![2, 0]);
        membership.insert("B", "y", vec![0, 1]);
        let dataset = dataset(membership);
        let active = vec![ActiveFilter::new("A", "x"), ActiveFilter::new("B", "y")];

        let first = classify(&dataset, &active).unwrap();
        let second = classify(&dataset, &active).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_out_of_range_position_is_integrity_error() {
        let entities = vec![Entity { id: "e0".into(), x: 0.0, y: 0.0 }];
        let mut membership = MembershipMap::new();
        membership.insert("A", "x", vec![0, 5]);

        let err = classify_entities(&entities, &membership, &[ActiveFilter::new("A", "x")]).unwrap_err();
        assert!(matches!(
            err,
            ExplorerError::DataIntegrity(DataIntegrityError::PositionOutOfRange { position: 5, len: 1, .. })
        ));
    }

    #[test]
    fn test_filter_without_membership_is_integrity_error() {
        let dataset = dataset(MembershipMap::new());

        let err = classify(&dataset, &[ActiveFilter::new("A", "x")]).unwrap_err();
        assert!(matches!(
            err,
            ExplorerError::DataIntegrity(DataIntegrityError::UnknownFilter { .. })
        ));
    }
}
