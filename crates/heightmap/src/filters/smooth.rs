//! Neighborhood smoothing.
//!
//! Each smoother recomputes every cell from its bounds-checked 3x3
//! neighborhood into a [`ScratchBuffer`], reading only the original grid, and
//! commits once the whole pass is done. Rows of the read pass run in parallel.

use rayon::prelude::*;
use tracing::debug;

use crate::errors::{FilterError, Result};
use crate::grid::GridIndex;
use crate::options::TerrainOptions;
use crate::scratch::ScratchBuffer;

/// Neighborhood mean blended with the original value.
///
/// Each cell becomes `(mean + z * weight) / (1 + weight)`; a weight of zero
/// gives the plain mean of the (up to nine) in-bounds neighbors.
pub fn smooth_mean(grid: &mut [f64], options: &TerrainOptions, weight: f64) -> Result<()> {
    smooth_mean_with(grid, options, weight, &mut ScratchBuffer::new())
}

pub fn smooth_mean_with(
    grid: &mut [f64],
    options: &TerrainOptions,
    weight: f64,
    scratch: &mut ScratchBuffer,
) -> Result<()> {
    options.check_grid(grid)?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(FilterError::InvalidParameter(format!(
            "smoothing weight must be non-negative, got {weight}"
        )));
    }
    debug!(weight, "mean smoothing");

    let index = options.index();
    let source = &*grid;
    fill(scratch, source, index, |col, row| {
        let mut sum = 0.0;
        let mut count = 0usize;
        for k in index.neighbors(col, row) {
            sum += source[k];
            count += 1;
        }
        sum / count as f64
    });

    let w = 1.0 / (1.0 + weight);
    scratch.commit_with(grid, |mean, z| (mean + z * weight) * w);
    Ok(())
}

/// Replaces every cell with the median of its in-bounds neighborhood.
///
/// Even-sized neighborhoods (edges and corners) average the two central values.
pub fn smooth_median(grid: &mut [f64], options: &TerrainOptions) -> Result<()> {
    smooth_median_with(grid, options, &mut ScratchBuffer::new())
}

pub fn smooth_median_with(
    grid: &mut [f64],
    options: &TerrainOptions,
    scratch: &mut ScratchBuffer,
) -> Result<()> {
    options.check_grid(grid)?;
    debug!("median smoothing");

    let index = options.index();
    let source = &*grid;
    fill(scratch, source, index, |col, row| {
        let mut window = [0.0; 9];
        let mut n = 0;
        for k in index.neighbors(col, row) {
            window[n] = source[k];
            n += 1;
        }
        median(&mut window[..n])
    });

    scratch.commit(grid);
    Ok(())
}

/// Clamps every cell into the `[min, max]` of its diagonal neighbors.
///
/// Only the four diagonal neighbors count; the orthogonal neighbors and the
/// cell itself never widen the window. `multiplier` scales the window around
/// its midpoint (`None` or `1.0` keeps the raw extremes). A cell without
/// diagonal neighbors keeps its value.
pub fn smooth_conservative(
    grid: &mut [f64],
    options: &TerrainOptions,
    multiplier: Option<f64>,
) -> Result<()> {
    smooth_conservative_with(grid, options, multiplier, &mut ScratchBuffer::new())
}

pub fn smooth_conservative_with(
    grid: &mut [f64],
    options: &TerrainOptions,
    multiplier: Option<f64>,
    scratch: &mut ScratchBuffer,
) -> Result<()> {
    options.check_grid(grid)?;
    if let Some(m) = multiplier
        && (!m.is_finite() || m < 0.0)
    {
        return Err(FilterError::InvalidParameter(format!(
            "conservative multiplier must be non-negative, got {m}"
        )));
    }
    debug!(?multiplier, "conservative smoothing");

    let index = options.index();
    let source = &*grid;
    fill(scratch, source, index, |col, row| {
        let z = source[index.index(col, row)];
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for k in index.diagonal_neighbors(col, row) {
            lo = lo.min(source[k]);
            hi = hi.max(source[k]);
        }
        if lo > hi {
            return z;
        }
        if let Some(m) = multiplier {
            let half = (hi - lo) * 0.5;
            let middle = lo + half;
            hi = middle + half * m;
            lo = middle - half * m;
        }
        if z > hi {
            hi
        } else if z < lo {
            lo
        } else {
            z
        }
    });

    scratch.commit(grid);
    Ok(())
}

/// Runs `cell(col, row)` for every cell into `scratch`, one row per task.
fn fill<F>(scratch: &mut ScratchBuffer, grid: &[f64], index: GridIndex, cell: F)
where
    F: Fn(usize, usize) -> f64 + Sync,
{
    scratch
        .prepare(grid.len())
        .par_chunks_mut(index.columns())
        .enumerate()
        .for_each(|(row, out)| {
            for (col, value) in out.iter_mut().enumerate() {
                *value = cell(col, row);
            }
        });
}

fn median(window: &mut [f64]) -> f64 {
    window.sort_unstable_by(f64::total_cmp);
    let mid = window.len() / 2;
    if window.len() % 2 == 1 {
        window[mid]
    } else {
        (window[mid - 1] + window[mid]) / 2.0
    }
}
