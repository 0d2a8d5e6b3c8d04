//! Legend derivation
//!
//! One legend entry per active filter, colored by its position in the
//! active-filter sequence. Colors are reassigned from scratch on every
//! recomputation, so the legend and the point colors, which read the same
//! sequence, always agree.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod palette;

use serde::{Deserialize, Serialize};

use crate::filter::ActiveFilter;

pub use self::palette::{Color, Palette, PALETTE_SIZE, TABLEAU10};

/// Color-coded label for one active keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

/// Legend for `active`, in the same order; empty when nothing is active
pub fn derive_legend(active: &[ActiveFilter], palette: &Palette) -> Vec<LegendEntry> {
    active
        .iter()
        .enumerate()
        .map(|(index, filter)| LegendEntry {
            label: filter.keyword.clone(),
            color: palette.color_for(index),
        })
        .collect()
}
