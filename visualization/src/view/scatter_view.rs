//! Layered scatter scene
//!
//! Splits a classified snapshot into two draw layers: a background layer
//! of unlabeled points in a neutral fill, and an annotated layer colored
//! from the legend. Drawing the background first keeps labeled points
//! visible wherever they overlap unlabeled ones.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::debug;
use serde::{Deserialize, Serialize};

use umap_explorer_core::{Color, Label, Snapshot};

use super::{ViewBounds, ViewError};

/// Scene styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    /// Fill of points no active filter claims
    pub unlabeled_color: Color,

    /// Padding around the plot area in pixels
    pub margin: f64,

    /// Numerator of the zoom-dependent point size
    pub size_scale: f64,

    /// Smallest symbol area
    pub min_point_size: f64,

    /// Largest symbol area
    pub max_point_size: f64,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            unlabeled_color: Color::rgb(0xef, 0xef, 0xef),
            margin: 20.0,
            size_scale: 200.0,
            min_point_size: 50.0,
            max_point_size: 1000.0,
        }
    }
}

impl ScatterConfig {
    /// Rejects a size range that is inverted, negative or not finite
    pub fn validate(&self) -> Result<(), ViewError> {
        let (min, max) = (self.min_point_size, self.max_point_size);
        if !(min.is_finite() && max.is_finite() && min >= 0.0 && min <= max) {
            return Err(ViewError::InvalidPointSizeRange { min, max });
        }
        Ok(())
    }

    /// Symbol area for a visible x-domain of width `x_span`
    ///
    /// An inverted range is reordered and a NaN bound is ignored.
    pub fn point_size(&self, x_span: f64) -> f64 {
        let low = self.min_point_size.min(self.max_point_size);
        let high = self.min_point_size.max(self.max_point_size);

        if x_span <= 0.0 || !x_span.is_finite() {
            return high;
        }
        (self.size_scale / x_span).max(low).min(high)
    }
}

/// Hover content of an annotated point
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub accession_id: String,
    pub annotation: String,
}

/// One symbol ready to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotPoint {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub fill: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
}

/// Both draw layers plus the data extent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterScene {
    /// Unlabeled points, drawn first
    pub base: Vec<PlotPoint>,

    /// Labeled points, drawn over the base layer
    pub annotated: Vec<PlotPoint>,

    /// Extent over every point of both layers
    pub bounds: Option<ViewBounds>,
}

impl ScatterScene {
    pub fn build(snapshot: &Snapshot, config: &ScatterConfig) -> Result<Self, ViewError> {
        config.validate()?;

        let mut base = Vec::new();
        let mut annotated = Vec::new();

        for point in &snapshot.points {
            match &point.label {
                Label::Unlabeled => base.push(PlotPoint {
                    id: point.id.clone(),
                    x: point.x,
                    y: point.y,
                    fill: config.unlabeled_color,
                    tooltip: None,
                }),
                Label::Keyword { keyword, rank } => {
                    let entry = snapshot.legend_for_rank(*rank).ok_or_else(|| {
                        ViewError::MissingLegendEntry {
                            id: point.id.clone(),
                            rank: *rank,
                            legend_len: snapshot.legend.len(),
                        }
                    })?;

                    annotated.push(PlotPoint {
                        id: point.id.clone(),
                        x: point.x,
                        y: point.y,
                        fill: entry.color,
                        tooltip: Some(Tooltip {
                            accession_id: point.id.clone(),
                            annotation: keyword.clone(),
                        }),
                    });
                }
            }
        }

        let bounds = ViewBounds::enclosing(snapshot.points.iter().map(|point| (point.x, point.y)));

        debug!(
            "Built scatter scene: {} base points, {} annotated points",
            base.len(),
            annotated.len()
        );

        Ok(Self {
            base,
            annotated,
            bounds,
        })
    }

    /// Points in painter's order: background layer, then annotated layer
    pub fn draw_order(&self) -> impl Iterator<Item = &PlotPoint> + '_ {
        self.base.iter().chain(self.annotated.iter())
    }

    pub fn len(&self) -> usize {
        self.base.len() + self.annotated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.annotated.is_empty()
    }
}
