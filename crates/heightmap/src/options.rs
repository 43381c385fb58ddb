//! Configuration shared by every filter.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::errors::{FilterError, Result};
use crate::grid::GridIndex;

/// Grid dimensions, physical extents and elevation bounds.
///
/// Filters only read this record; any defaulting happens in locals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainOptions {
    /// Physical extent along the columns axis.
    pub width: f64,
    /// Physical extent along the rows axis.
    pub height: f64,
    /// Segments along the columns axis (`columns = width_segments + 1`).
    pub width_segments: usize,
    /// Segments along the rows axis (`rows = height_segments + 1`).
    pub height_segments: usize,
    /// Upper elevation bound. `None` means "use the discovered maximum".
    pub max_height: Option<f64>,
    /// Lower elevation bound. `None` means "use the discovered minimum".
    pub min_height: Option<f64>,
    /// Curve applied during normalization.
    pub easing: Easing,
    /// Force the full target range even if the data does not span it.
    pub stretch: bool,
}

impl Default for TerrainOptions {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 1024.0,
            width_segments: 63,
            height_segments: 63,
            max_height: Some(100.0),
            min_height: Some(-100.0),
            easing: Easing::Linear,
            stretch: true,
        }
    }
}

impl TerrainOptions {
    /// Options for a `width_segments x height_segments` grid with unit-sized segments.
    pub fn new(width_segments: usize, height_segments: usize) -> Self {
        Self {
            width: width_segments as f64,
            height: height_segments as f64,
            width_segments,
            height_segments,
            ..Default::default()
        }
    }

    /// Sets the physical extents.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets both elevation bounds.
    pub fn with_bounds(mut self, min_height: f64, max_height: f64) -> Self {
        self.min_height = Some(min_height);
        self.max_height = Some(max_height);
        self
    }

    /// Clears both elevation bounds so normalization uses the discovered extrema.
    pub fn without_bounds(mut self) -> Self {
        self.min_height = None;
        self.max_height = None;
        self
    }

    /// Sets the normalization easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sets stretch mode.
    pub fn with_stretch(mut self, stretch: bool) -> Self {
        self.stretch = stretch;
        self
    }

    pub fn columns(&self) -> usize {
        self.width_segments + 1
    }

    pub fn rows(&self) -> usize {
        self.height_segments + 1
    }

    pub fn cell_count(&self) -> usize {
        self.columns() * self.rows()
    }

    pub fn index(&self) -> GridIndex {
        GridIndex::new(self.columns(), self.rows())
    }

    /// Physical size of one segment along the columns axis.
    pub fn segment_width(&self) -> Result<f64> {
        segment_size("width", self.width, self.width_segments)
    }

    /// Physical size of one segment along the rows axis.
    pub fn segment_height(&self) -> Result<f64> {
        segment_size("height", self.height, self.height_segments)
    }

    /// Both elevation bounds as `(min_height, max_height)`.
    ///
    /// Fails with [`FilterError::MissingConfiguration`] if either is unset.
    pub fn bounds(&self) -> Result<(f64, f64)> {
        let max = self
            .max_height
            .ok_or(FilterError::MissingConfiguration("max_height"))?;
        let min = self
            .min_height
            .ok_or(FilterError::MissingConfiguration("min_height"))?;
        Ok((min, max))
    }

    /// Checks that a grid has exactly `columns * rows` cells.
    pub fn check_grid(&self, grid: &[f64]) -> Result<()> {
        let expected = self.cell_count();
        if grid.len() != expected {
            return Err(FilterError::GridSize {
                expected,
                actual: grid.len(),
            });
        }
        Ok(())
    }
}

fn segment_size(axis: &str, extent: f64, segments: usize) -> Result<f64> {
    if !extent.is_finite() || extent <= 0.0 {
        return Err(FilterError::InvalidParameter(format!(
            "{axis} must be positive and finite, got {extent}"
        )));
    }
    if segments == 0 {
        return Err(FilterError::InvalidParameter(format!(
            "{axis} needs at least one segment"
        )));
    }
    Ok(extent / segments as f64)
}
