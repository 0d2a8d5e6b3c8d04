//! Renderer-facing view models
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod category_view;
pub mod scatter_view;

use serde::Serialize;
use thiserror::Error;

pub use self::category_view::{CategoryPanel, CategorySection, KeywordRow};
pub use self::scatter_view::{PlotPoint, ScatterConfig, ScatterScene, Tooltip};

/// Errors raised while building a view from a snapshot
#[derive(Debug, Error, PartialEq)]
pub enum ViewError {
    #[error("Point size range [{min}, {max}] is not a finite, non-negative, ordered range")]
    InvalidPointSizeRange { min: f64, max: f64 },

    #[error("Point {id} carries rank {rank} but the legend has {legend_len} entries")]
    MissingLegendEntry {
        id: String,
        rank: usize,
        legend_len: usize,
    },
}

/// Axis-aligned extent of a set of points
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewBounds {
    /// Smallest bounds containing every `(x, y)`; `None` for no points
    pub fn enclosing(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        points.into_iter().fold(None, |bounds, (x, y)| {
            Some(match bounds {
                None => Self {
                    x_min: x,
                    x_max: x,
                    y_min: y,
                    y_max: y,
                },
                Some(b) => Self {
                    x_min: b.x_min.min(x),
                    x_max: b.x_max.max(x),
                    y_min: b.y_min.min(y),
                    y_max: b.y_max.max(y),
                },
            })
        })
    }

    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }
}
