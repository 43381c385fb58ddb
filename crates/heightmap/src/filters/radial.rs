//! Radial edge shaping.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::easing::Easing;
use crate::errors::{FilterError, Result};
use crate::filters::edges::EdgeDirection;
use crate::options::TerrainOptions;

/// Parameters for [`radial_edges`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RadialEdges {
    pub direction: EdgeDirection,
    /// Physical distance from the center at which the effect begins.
    pub distance: f64,
    pub easing: Easing,
}

impl Default for RadialEdges {
    fn default() -> Self {
        Self {
            direction: EdgeDirection::Up,
            distance: 0.0,
            easing: Easing::EaseInOut,
        }
    }
}

impl RadialEdges {
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
}

/// Pulls elevations outside a central disc toward the peak bound.
///
/// The affected annulus starts `distance` from the center and is
/// `min(width, height) / 2 - distance` deep; cells beyond it get the full
/// multiplier `easing(1)`. Rows above the center are computed once and the
/// same multiplier is applied to the mirrored row below.
///
/// Unlike [`linear_edges`](crate::filters::linear_edges) there is no
/// renormalization afterwards.
pub fn radial_edges(
    grid: &mut [f64],
    options: &TerrainOptions,
    params: &RadialEdges,
) -> Result<()> {
    options.check_grid(grid)?;
    let (min_height, max_height) = options.bounds()?;
    if !params.distance.is_finite() || params.distance < 0.0 {
        return Err(FilterError::InvalidParameter(format!(
            "edge distance must be non-negative, got {}",
            params.distance
        )));
    }
    let segment_width = options.segment_width()?;
    let segment_height = options.segment_height()?;

    let edge_radius = options.width.min(options.height) * 0.5 - params.distance;
    if edge_radius <= 0.0 {
        return Err(FilterError::InvalidParameter(format!(
            "edge distance {} leaves no room for an edge on a {}x{} terrain",
            params.distance, options.width, options.height
        )));
    }

    let index = options.index();
    let direction = params.direction;
    let peak = direction.peak(min_height, max_height);
    let center_col = options.width_segments as f64 * 0.5;
    let center_row = options.height_segments as f64 * 0.5;

    debug!(edge_radius, ?direction, peak, "shaping radial edges");

    for row in 0..index.rows().div_ceil(2) {
        let mirror = options.height_segments - row;
        let dy = (center_row - row as f64) * segment_height;
        for col in 0..index.columns() {
            let dx = (center_col - col as f64) * segment_width;
            let offset = (dx.hypot(dy) - params.distance).min(edge_radius);
            if offset < 0.0 {
                continue;
            }
            let multiplier = params.easing.ease(offset / edge_radius);

            let k = index.index(col, row);
            grid[k] = direction.push(grid[k], peak, multiplier);
            if mirror != row {
                let k = index.index(col, mirror);
                grid[k] = direction.push(grid[k], peak, multiplier);
            }
        }
    }
    Ok(())
}
