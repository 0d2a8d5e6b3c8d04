//! Loaded embedding: entities plus keyword membership
//!
//! A [`Dataset`] is only ever constructed whole. Coordinate lists that
//! disagree in length with the identifier list, or membership entries that
//! point past the end of the entity list, reject the load outright.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use super::membership::MembershipMap;
use crate::error::{DataIntegrityError, Result};

/// One point of the embedding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Accession identifier
    pub id: String,

    /// First embedding coordinate
    pub x: f64,

    /// Second embedding coordinate
    pub y: f64,
}

/// Immutable entity list and its membership map
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    entities: Vec<Entity>,
    membership: MembershipMap,
}

/// Transport shape written by the ingest pipeline
#[derive(Debug, Deserialize)]
struct PlotData {
    accession_ids: Vec<String>,
    keyword_mapping: MembershipMap,
    #[serde(rename = "UMAP_1")]
    umap_1: Vec<f64>,
    #[serde(rename = "UMAP_2")]
    umap_2: Vec<f64>,
}

impl Dataset {
    /// Builds a dataset from index-aligned columns
    pub fn new(
        ids: Vec<String>,
        xs: Vec<f64>,
        ys: Vec<f64>,
        membership: MembershipMap,
    ) -> Result<Self> {
        for (axis, column) in [("x", &xs), ("y", &ys)] {
            if column.len() != ids.len() {
                return Err(DataIntegrityError::CoordinateLengthMismatch {
                    axis,
                    expected: ids.len(),
                    actual: column.len(),
                }
                .into());
            }
        }

        membership.validate(ids.len())?;

        let entities = ids
            .into_iter()
            .zip(xs)
            .zip(ys)
            .map(|((id, x), y)| Entity { id, x, y })
            .collect::<Vec<_>>();

        debug!(
            "Loaded dataset with {} entities, {} categories, {} keywords",
            entities.len(),
            membership.category_count(),
            membership.keyword_count()
        );

        Ok(Self { entities, membership })
    }

    /// Parses the plot-data JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let plot: PlotData = serde_json::from_str(json)?;
        Self::from_plot_data(plot)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let plot: PlotData = serde_json::from_reader(reader)?;
        Self::from_plot_data(plot)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_plot_data(plot: PlotData) -> Result<Self> {
        Self::new(plot.accession_ids, plot.umap_1, plot.umap_2, plot.keyword_mapping)
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, position: usize) -> Option<&Entity> {
        self.entities.get(position)
    }

    pub fn membership(&self) -> &MembershipMap {
        &self.membership
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
