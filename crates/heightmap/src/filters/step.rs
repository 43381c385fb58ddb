//! Step quantization.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{FilterError, Result};
use crate::options::TerrainOptions;

/// What happens to the cells left over when the grid does not split evenly into buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeftoverPolicy {
    /// Leftover values belong to no bucket; cells holding them keep their elevation.
    #[default]
    Retain,
    /// The last bucket absorbs the leftover values.
    MergeIntoLast,
}

/// A population slice of the sorted elevations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl Bucket {
    fn from_sorted(slice: &[f64]) -> Self {
        Self {
            min: slice[0],
            max: slice[slice.len() - 1],
            avg: slice.iter().sum::<f64>() / slice.len() as f64,
        }
    }

    pub fn contains(&self, z: f64) -> bool {
        z >= self.min && z <= self.max
    }
}

/// `floor((len / 2)^(1/4))`, at least one.
pub fn default_levels(len: usize) -> usize {
    ((len as f64 * 0.5).powf(0.25).floor() as usize).max(1)
}

/// Splits the sorted elevations into `levels` buckets of equal population.
///
/// Each bucket holds `len / levels` values. `levels` must be in `1..=grid.len()`.
pub fn population_buckets(grid: &[f64], levels: usize, policy: LeftoverPolicy) -> Vec<Bucket> {
    let mut sorted = grid.to_vec();
    sorted.sort_by(f64::total_cmp);
    let inc = sorted.len() / levels;

    (0..levels)
        .map(|i| {
            let end = match policy {
                LeftoverPolicy::MergeIntoLast if i == levels - 1 => sorted.len(),
                _ => (i + 1) * inc,
            };
            Bucket::from_sorted(&sorted[i * inc..end])
        })
        .collect()
}

/// Collapses the grid onto at most `levels` distinct elevations.
///
/// Buckets are cut by population, not by value range, and every cell takes the
/// mean of the first bucket containing it. `None` uses [`default_levels`].
/// Values left over after the last full bucket are retained unchanged.
///
/// At most `levels` distinct elevations remain only when the cell count
/// divides evenly by `levels`. Otherwise retained leftovers can add more; use
/// [`step_with_policy`] with [`LeftoverPolicy::MergeIntoLast`] for the bound on
/// every grid.
pub fn step(grid: &mut [f64], options: &TerrainOptions, levels: Option<usize>) -> Result<()> {
    step_with_policy(grid, options, levels, LeftoverPolicy::Retain)
}

pub fn step_with_policy(
    grid: &mut [f64],
    options: &TerrainOptions,
    levels: Option<usize>,
    policy: LeftoverPolicy,
) -> Result<()> {
    options.check_grid(grid)?;
    let requested = match levels {
        Some(0) => {
            return Err(FilterError::InvalidParameter(
                "step levels must be at least 1".to_string(),
            ));
        }
        Some(n) => n,
        None => default_levels(grid.len()),
    };
    let levels = if requested > grid.len() {
        warn!(
            requested,
            cells = grid.len(),
            "more step levels than cells, using one level per cell"
        );
        grid.len()
    } else {
        requested
    };

    let buckets = population_buckets(grid, levels, policy);
    let mut unmatched = 0usize;
    for z in grid.iter_mut() {
        match buckets.iter().find(|b| b.contains(*z)) {
            Some(bucket) => *z = bucket.avg,
            None => unmatched += 1,
        }
    }

    if unmatched > 0 {
        warn!(unmatched, "cells outside every bucket keep their elevation");
    }
    debug!(levels, ?policy, "stepped heightmap");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_levels() {
        assert_eq!(default_levels(1), 1);
        assert_eq!(default_levels(25), 1);
        assert_eq!(default_levels(40), 2);
        assert_eq!(default_levels(4096), 6);
    }

    #[test]
    fn test_buckets_by_population() {
        // Heavily skewed values still split into equal-count buckets.
        let grid = vec![0.0, 0.0, 0.1, 0.2, 50.0, 100.0];
        let buckets = population_buckets(&grid, 3, LeftoverPolicy::Retain);
        assert_eq!(
            buckets[0],
            Bucket {
                min: 0.0,
                max: 0.0,
                avg: 0.0
            }
        );
        assert_eq!(buckets[1].min, 0.1);
        assert_eq!(buckets[1].max, 0.2);
        assert_eq!(
            buckets[2],
            Bucket {
                min: 50.0,
                max: 100.0,
                avg: 75.0
            }
        );
    }

    #[test]
    fn test_leftover_retained() {
        let opts = TerrainOptions::new(6, 0);
        let mut grid = vec![6.0, 0.0, 5.0, 1.0, 4.0, 2.0, 3.0];
        step(&mut grid, &opts, Some(2)).unwrap();
        // buckets [0, 1, 2] -> 1 and [3, 4, 5] -> 4; 6 is left over
        assert_eq!(grid, vec![6.0, 1.0, 4.0, 1.0, 4.0, 1.0, 4.0]);
    }

    #[test]
    fn test_retained_leftover_exceeds_level_count() {
        let opts = TerrainOptions::new(6, 0);
        let mut grid = vec![6.0, 0.0, 5.0, 1.0, 4.0, 2.0, 3.0];
        step(&mut grid, &opts, Some(2)).unwrap();
        let mut distinct = grid.clone();
        distinct.sort_by(f64::total_cmp);
        distinct.dedup();
        assert_eq!(distinct, vec![1.0, 4.0, 6.0]);

        let mut grid = vec![6.0, 0.0, 5.0, 1.0, 4.0, 2.0, 3.0];
        step_with_policy(&mut grid, &opts, Some(2), LeftoverPolicy::MergeIntoLast).unwrap();
        let mut distinct = grid.clone();
        distinct.sort_by(f64::total_cmp);
        distinct.dedup();
        assert_eq!(distinct.len(), 2);
    }

    #[test]
    fn test_leftover_merged() {
        let opts = TerrainOptions::new(6, 0);
        let mut grid = vec![6.0, 0.0, 5.0, 1.0, 4.0, 2.0, 3.0];
        step_with_policy(&mut grid, &opts, Some(2), LeftoverPolicy::MergeIntoLast).unwrap();
        assert_eq!(grid, vec![4.5, 1.0, 4.5, 1.0, 4.5, 1.0, 4.5]);
    }

    #[test]
    fn test_zero_levels_rejected() {
        let opts = TerrainOptions::new(1, 1);
        let mut grid = vec![0.0, 1.0, 2.0, 3.0];
        assert!(matches!(
            step(&mut grid, &opts, Some(0)),
            Err(FilterError::InvalidParameter(_))
        ));
        assert_eq!(grid, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_levels_clamped_to_cell_count() {
        let opts = TerrainOptions::new(1, 1);
        let mut grid = vec![3.0, 1.0, 2.0, 0.0];
        step(&mut grid, &opts, Some(10)).unwrap();
        assert_eq!(grid, vec![3.0, 1.0, 2.0, 0.0]);
    }
}
