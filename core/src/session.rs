//! Explorer session: the single owner of the current filter state
//!
//! Every action is applied to the current [`FilterState`], the outputs
//! consumed by the display layer are recomputed synchronously from the
//! result, and only then are the new state and [`Snapshot`] committed
//! together. A rejected action leaves both untouched.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::sync::Arc;

use log::{debug, warn};
use serde::Serialize;

use crate::classify::{classify, ClassifiedPoint};
use crate::config::ExplorerConfig;
use crate::data::Dataset;
use crate::error::{DataIntegrityError, Result};
use crate::filter::{active_filters, reduce, ActiveFilter, FilterAction, FilterState};
use crate::legend::{derive_legend, LegendEntry};

/// Display-layer inputs derived from one filter state
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    /// Active filters in extraction order
    pub active: Vec<ActiveFilter>,

    /// Every entity exactly once, unlabeled first
    pub points: Vec<ClassifiedPoint>,

    /// One entry per active filter
    pub legend: Vec<LegendEntry>,
}

impl Snapshot {
    fn compute(dataset: &Dataset, state: &FilterState, config: &ExplorerConfig) -> Result<Self> {
        let active = active_filters(state);
        let points = classify(dataset, &active)?;
        let legend = derive_legend(&active, &config.palette);

        Ok(Self { active, points, legend })
    }

    /// Legend entry coloring a point with the given rank
    pub fn legend_for_rank(&self, rank: usize) -> Option<&LegendEntry> {
        self.legend.get(rank)
    }
}

/// Current dataset, filter state and derived snapshot
#[derive(Debug)]
pub struct ExplorerSession {
    config: ExplorerConfig,
    dataset: Arc<Dataset>,
    state: FilterState,
    snapshot: Snapshot,
}

impl ExplorerSession {
    pub fn new(dataset: impl Into<Arc<Dataset>>, config: ExplorerConfig) -> Result<Self> {
        let dataset = dataset.into();
        let state = FilterState::init(dataset.membership());
        let snapshot = Snapshot::compute(&dataset, &state, &config)?;

        Ok(Self {
            config,
            dataset,
            state,
            snapshot,
        })
    }

    /// Replaces the dataset; the filter state is rebuilt from scratch
    pub fn load(&mut self, dataset: impl Into<Arc<Dataset>>) -> Result<&Snapshot> {
        let dataset = dataset.into();
        let state = FilterState::init(dataset.membership());
        let snapshot = Snapshot::compute(&dataset, &state, &self.config)?;

        debug!("Session loaded dataset with {} entities", dataset.len());

        self.dataset = dataset;
        self.state = state;
        self.snapshot = snapshot;
        Ok(&self.snapshot)
    }

    pub fn toggle(&mut self, category: &str, keyword: &str) -> Result<&Snapshot> {
        self.dispatch(FilterAction::Toggle { category, keyword })
    }

    /// Clears every selection
    pub fn reset(&mut self) -> Result<&Snapshot> {
        let dataset = Arc::clone(&self.dataset);
        self.dispatch(FilterAction::Init(dataset.membership()))
    }

    /// Applies one action and recomputes the snapshot
    ///
    /// `Init` must carry a membership map with the loaded dataset's shape,
    /// otherwise the filter state would stop mirroring the dataset.
    pub fn dispatch(&mut self, action: FilterAction<'_>) -> Result<&Snapshot> {
        match self.try_apply(action) {
            Ok((state, snapshot)) => {
                debug!(
                    "Recomputed snapshot: {} active filters, {} points",
                    snapshot.active.len(),
                    snapshot.points.len()
                );
                self.state = state;
                self.snapshot = snapshot;
                Ok(&self.snapshot)
            }
            Err(err) => {
                warn!("Rejected {}: {}", action, err);
                Err(err)
            }
        }
    }

    fn try_apply(&self, action: FilterAction<'_>) -> Result<(FilterState, Snapshot)> {
        if let FilterAction::Init(membership) = action {
            if !membership.same_shape(self.dataset.membership()) {
                return Err(DataIntegrityError::MembershipShapeMismatch.into());
            }
        }

        let state = reduce(&self.state, action)?;
        let snapshot = Snapshot::compute(&self.dataset, &state, &self.config)?;
        Ok((state, snapshot))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }
}
