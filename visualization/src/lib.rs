//! UMAP Explorer visualization models
//!
//! Turns the core's per-toggle [`Snapshot`](umap_explorer_core::Snapshot)
//! into what a renderer draws: a two-layer scatter scene and the category
//! panel with its keyword checkboxes.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod view;

pub use self::view::{
    CategoryPanel, CategorySection, KeywordRow, PlotPoint, ScatterConfig, ScatterScene, Tooltip,
    ViewBounds, ViewError,
};
