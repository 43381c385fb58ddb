//! Small deterministic grids for tests and demos.

use std::cmp::Ordering;

use heightmap::TerrainOptions;
use rand::Rng;
use rand_distr::{Distribution, Normal, NormalError};

/// Row-major ramp: cell `i` holds `i as f64`.
pub fn ramp(options: &TerrainOptions) -> Vec<f64> {
    (0..options.cell_count()).map(|i| i as f64).collect()
}

pub fn constant(options: &TerrainOptions, value: f64) -> Vec<f64> {
    vec![value; options.cell_count()]
}

/// Independent uniform samples in `[min, max)`.
///
/// An empty or inverted range gives a constant grid at `min`.
pub fn uniform(options: &TerrainOptions, min: f64, max: f64, rng: &mut impl Rng) -> Vec<f64> {
    if min.partial_cmp(&max) != Some(Ordering::Less) {
        return constant(options, min);
    }
    (0..options.cell_count())
        .map(|_| rng.gen_range(min..max))
        .collect()
}

/// Adds zero-mean Gaussian noise with `std_dev` to every cell.
pub fn add_jitter(grid: &mut [f64], std_dev: f64, rng: &mut impl Rng) -> Result<(), NormalError> {
    let normal = Normal::new(0.0, std_dev)?;
    for z in grid.iter_mut() {
        *z += normal.sample(rng);
    }
    Ok(())
}
