//! Turbulence folding.

use tracing::debug;

use crate::errors::Result;
use crate::options::TerrainOptions;

/// Folds every elevation around the midpoint of `[min_height, max_height]`.
///
/// `z' = min + |2 (z - min) - range|`: a linear ramp becomes a tent, so smooth
/// noise turns into sharp ridges. Values outside the bounds fold to values
/// outside them too. Both bounds are required.
pub fn turbulence(grid: &mut [f64], options: &TerrainOptions) -> Result<()> {
    options.check_grid(grid)?;
    let (min_height, max_height) = options.bounds()?;
    let range = max_height - min_height;
    debug!(min_height, max_height, "folding heightmap");

    for z in grid.iter_mut() {
        *z = min_height + ((*z - min_height) * 2.0 - range).abs();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FilterError;

    #[test]
    fn test_fold_is_symmetric_about_midpoint() {
        let opts = TerrainOptions::new(2, 0).with_bounds(0.0, 10.0);
        let mut grid = vec![2.0, 5.0, 8.0];
        turbulence(&mut grid, &opts).unwrap();
        assert_eq!(grid, vec![6.0, 0.0, 6.0]);
    }

    #[test]
    fn test_bounds_map_to_max() {
        let opts = TerrainOptions::new(1, 0).with_bounds(-4.0, 4.0);
        let mut grid = vec![-4.0, 4.0];
        turbulence(&mut grid, &opts).unwrap();
        assert_eq!(grid, vec![4.0, 4.0]);
    }

    #[test]
    fn test_out_of_range_folds_outside() {
        let opts = TerrainOptions::new(0, 0).with_bounds(0.0, 10.0);
        let mut grid = vec![12.0];
        turbulence(&mut grid, &opts).unwrap();
        assert_eq!(grid, vec![14.0]);
    }

    #[test]
    fn test_requires_bounds() {
        let opts = TerrainOptions::new(0, 0).without_bounds();
        let mut grid = vec![1.0];
        assert_eq!(
            turbulence(&mut grid, &opts),
            Err(FilterError::MissingConfiguration("max_height"))
        );
    }
}
