//! Range normalization.

use tracing::debug;

use crate::easing::Easing;
use crate::errors::{FilterError, Result};
use crate::grid::min_max;
use crate::options::TerrainOptions;

/// Rescales every elevation into the configured range.
///
/// Reads `max_height`, `min_height`, `easing` and `stretch` from `options`.
/// An unset bound falls back to the discovered extreme. Without `stretch` the
/// target window is clamped to the data's own span, so the grid can shrink
/// into the bounds but is never spread out to fill them.
///
/// With a curve that stays inside `[0, 1]` every result lies between the two
/// target bounds. Fails with [`FilterError::DegenerateRange`] on a flat grid.
pub fn normalize(grid: &mut [f64], options: &TerrainOptions) -> Result<()> {
    options.check_grid(grid)?;
    rescale(
        grid,
        options.min_height,
        options.max_height,
        &options.easing,
        options.stretch,
    )
}

pub(crate) fn rescale(
    grid: &mut [f64],
    min_height: Option<f64>,
    max_height: Option<f64>,
    easing: &Easing,
    stretch: bool,
) -> Result<()> {
    debug_assert!(!grid.is_empty(), "options describe at least one cell");

    let (min, max) = min_max(grid);
    let actual_range = max - min;
    if actual_range <= 0.0 || actual_range.is_nan() {
        return Err(FilterError::DegenerateRange { value: min });
    }

    let opt_max = max_height.unwrap_or(max);
    let opt_min = min_height.unwrap_or(min);
    let target_min = if stretch { opt_min } else { opt_min.max(min) };
    let mut target_max = if stretch { opt_max } else { opt_max.min(max) };
    if target_max < target_min {
        target_max = opt_max;
    }
    let range = target_max - target_min;

    debug!(
        min,
        max,
        target_min,
        target_max,
        stretch,
        "normalizing heightmap"
    );

    // Identity remap; skipping it keeps repeated normalization bit-exact.
    if easing.is_identity() && min == target_min && max == target_max {
        return Ok(());
    }

    for z in grid.iter_mut() {
        *z = easing.ease((*z - min) / actual_range) * range + target_min;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> TerrainOptions {
        TerrainOptions::new(1, 1)
    }

    #[test]
    fn test_stretch_fills_bounds() {
        let mut grid = vec![2.0, 3.0, 4.0, 6.0];
        normalize(&mut grid, &options().with_bounds(0.0, 100.0)).unwrap();
        assert_eq!(grid, vec![0.0, 25.0, 50.0, 100.0]);
    }

    #[test]
    fn test_without_stretch_only_shrinks() {
        let mut grid = vec![2.0, 3.0, 4.0, 6.0];
        let opts = options().with_bounds(0.0, 100.0).with_stretch(false);
        normalize(&mut grid, &opts).unwrap();
        assert_eq!(grid, vec![2.0, 3.0, 4.0, 6.0]);

        let mut grid = vec![0.0, 5.0, 10.0, 20.0];
        let opts = options().with_bounds(4.0, 12.0).with_stretch(false);
        normalize(&mut grid, &opts).unwrap();
        assert_eq!(grid, vec![4.0, 6.0, 8.0, 12.0]);
    }

    #[test]
    fn test_unset_bounds_use_discovered_extremes() {
        let mut grid = vec![-1.0, 0.0, 1.0, 3.0];
        let opts = options().without_bounds().with_easing(Easing::EaseIn);
        normalize(&mut grid, &opts).unwrap();
        assert_eq!(grid[0], -1.0);
        assert_eq!(grid[3], 3.0);
        // (0 - -1) / 4 = 0.25, eased to 0.0625, scaled by 4
        assert!((grid[1] - (-1.0 + 0.25)).abs() < 1e-12);
    }

    #[test]
    fn test_inverted_window_falls_back_to_option_max() {
        // Data spans [0, 1]; clamping to [5, 1] is inverted, so the target max becomes 2.
        let mut grid = vec![0.0, 0.5, 0.5, 1.0];
        let opts = options().with_bounds(5.0, 2.0).with_stretch(false);
        normalize(&mut grid, &opts).unwrap();
        assert_eq!(grid, vec![5.0, 3.5, 3.5, 2.0]);
    }

    #[test]
    fn test_flat_grid_is_degenerate() {
        let mut grid = vec![5.0; 4];
        let err = normalize(&mut grid, &options()).unwrap_err();
        assert_eq!(err, FilterError::DegenerateRange { value: 5.0 });
        assert_eq!(grid, vec![5.0; 4]);
    }

    #[test]
    fn test_single_cell_is_degenerate() {
        let opts = TerrainOptions::new(0, 0).with_bounds(0.0, 1.0);
        let mut grid = vec![7.0];
        assert_eq!(
            normalize(&mut grid, &opts),
            Err(FilterError::DegenerateRange { value: 7.0 })
        );
        assert_eq!(grid, vec![7.0]);

        let mut empty: Vec<f64> = Vec::new();
        assert_eq!(
            normalize(&mut empty, &opts),
            Err(FilterError::GridSize {
                expected: 1,
                actual: 0
            })
        );
    }

    #[test]
    fn test_options_untouched() {
        let opts = options().with_easing(Easing::EaseOut);
        let mut grid = vec![0.0, 1.0, 2.0, 3.0];
        normalize(&mut grid, &opts).unwrap();
        assert!(matches!(opts.easing, Easing::EaseOut));
    }
}
