//! Linear edge shaping.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::easing::Easing;
use crate::errors::{FilterError, Result};
use crate::filters::normalize::rescale;
use crate::options::TerrainOptions;

/// Which bound edge shaping pushes elevations toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeDirection {
    /// Raise toward `max_height`.
    #[default]
    Up,
    /// Lower toward `min_height`.
    Down,
}

impl EdgeDirection {
    pub fn from_raise(raise: bool) -> Self {
        if raise { Self::Up } else { Self::Down }
    }

    pub(crate) fn peak(self, min_height: f64, max_height: f64) -> f64 {
        match self {
            Self::Up => max_height,
            Self::Down => min_height,
        }
    }

    /// Interpolates `z` toward `peak` by `multiplier`, never moving it away from the peak.
    #[inline]
    pub(crate) fn push(self, z: f64, peak: f64, multiplier: f64) -> f64 {
        let target = (peak - z) * multiplier + z;
        match self {
            Self::Up => z.max(target),
            Self::Down => z.min(target),
        }
    }
}

/// Per-edge selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sides {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Default for Sides {
    fn default() -> Self {
        Self::all()
    }
}

impl Sides {
    pub const fn all() -> Self {
        Self {
            top: true,
            bottom: true,
            left: true,
            right: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            top: false,
            bottom: false,
            left: false,
            right: false,
        }
    }
}

/// Parameters for [`linear_edges`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearEdges {
    pub direction: EdgeDirection,
    /// Physical distance from each edge over which the effect fades out.
    pub distance: f64,
    pub easing: Easing,
    pub sides: Sides,
}

impl Default for LinearEdges {
    fn default() -> Self {
        Self {
            direction: EdgeDirection::Up,
            distance: 0.0,
            easing: Easing::EaseInOut,
            sides: Sides::all(),
        }
    }
}

impl LinearEdges {
    pub fn new(direction: EdgeDirection, distance: f64) -> Self {
        Self {
            direction,
            distance,
            ..Default::default()
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_sides(mut self, sides: Sides) -> Self {
        self.sides = sides;
        self
    }
}

/// Pulls elevations near the rectangular boundary toward the peak bound.
///
/// Each enabled side gets a band `distance` wide (at least one segment). At the
/// edge the multiplier is `easing(1)`, fading to `easing(1 / band)` on the
/// band's innermost row or column. Rows are shaped first, then columns, so the
/// column pass decides overlapping corners.
///
/// The result is renormalized into `[min_height, max_height]` with stretch and
/// a linear curve. Both bounds are required. The grid is left untouched on error.
pub fn linear_edges(
    grid: &mut [f64],
    options: &TerrainOptions,
    params: &LinearEdges,
) -> Result<()> {
    options.check_grid(grid)?;
    let (min_height, max_height) = options.bounds()?;
    if !params.distance.is_finite() || params.distance < 0.0 {
        return Err(FilterError::InvalidParameter(format!(
            "edge distance must be non-negative, got {}",
            params.distance
        )));
    }

    let index = options.index();
    let (columns, rows) = (index.columns(), index.rows());
    let row_band = band_width(params.distance, options.segment_height()?);
    let col_band = band_width(params.distance, options.segment_width()?);
    let direction = params.direction;
    let peak = direction.peak(min_height, max_height);
    let sides = params.sides;

    debug!(row_band, col_band, ?direction, peak, ?sides, "shaping linear edges");

    let mut shaped = grid.to_vec();

    for col in 0..columns {
        for j in 0..row_band.min(rows) {
            let multiplier = params.easing.ease(1.0 - j as f64 / row_band as f64);
            if sides.top {
                let k = index.index(col, j);
                shaped[k] = direction.push(shaped[k], peak, multiplier);
            }
            if sides.bottom {
                let k = index.index(col, rows - 1 - j);
                shaped[k] = direction.push(shaped[k], peak, multiplier);
            }
        }
    }

    for row in 0..rows {
        for j in 0..col_band.min(columns) {
            let multiplier = params.easing.ease(1.0 - j as f64 / col_band as f64);
            if sides.left {
                let k = index.index(j, row);
                shaped[k] = direction.push(shaped[k], peak, multiplier);
            }
            if sides.right {
                let k = index.index(columns - 1 - j, row);
                shaped[k] = direction.push(shaped[k], peak, multiplier);
            }
        }
    }

    rescale(
        &mut shaped,
        Some(min_height),
        Some(max_height),
        &Easing::Linear,
        true,
    )?;
    grid.copy_from_slice(&shaped);
    Ok(())
}

/// Number of segments covered by `distance`, at least one.
fn band_width(distance: f64, segment_size: f64) -> usize {
    ((distance / segment_size).floor() as usize).max(1)
}
