//! Post-processing filters for terrain heightmaps.
//!
//! A heightmap is a flat, row-major `[f64]` of `(width_segments + 1) x
//! (height_segments + 1)` elevations, described by [`TerrainOptions`]. The
//! filters in [`filters`] reshape it in place and can be chained in any order,
//! either directly or through [`pipeline::apply_filters`].
//!
//! # Quick Start
//!
//! ```rust
//! use heightmap::prelude::*;
//!
//! let options = TerrainOptions::new(4, 4).with_bounds(0.0, 10.0);
//! let mut grid: Vec<f64> = (0..25).map(f64::from).collect();
//!
//! smooth_median(&mut grid, &options)?;
//! linear_edges(&mut grid, &options, &LinearEdges::new(EdgeDirection::Up, 1.0))?;
//! step(&mut grid, &options, Some(4))?;
//!
//! assert_eq!(grid.len(), 25);
//! # Ok::<(), heightmap::FilterError>(())
//! ```

pub mod easing;
pub mod errors;
pub mod filters;
pub mod grid;
pub mod options;
pub mod pipeline;
pub mod scratch;

pub use easing::{Easing, EasingFn};
pub use errors::{FilterError, Result};
pub use grid::{GridIndex, GridStats};
pub use options::TerrainOptions;
pub use pipeline::{EdgeKind, EdgeShape, Filter, PostProcess, apply_filters, post_process};
pub use scratch::ScratchBuffer;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::easing::{Easing, EasingFn};
    pub use crate::errors::{FilterError, Result};
    pub use crate::filters::{
        EdgeDirection, LeftoverPolicy, LinearEdges, RadialEdges, Sides, linear_edges, normalize,
        radial_edges, smooth_conservative, smooth_mean, smooth_median, step, step_with_policy,
        turbulence,
    };
    pub use crate::grid::{GridIndex, GridStats, from_rows, to_rows};
    pub use crate::options::TerrainOptions;
    pub use crate::pipeline::{
        EdgeKind, EdgeShape, Filter, PostProcess, apply_filters, post_process,
    };
    pub use crate::scratch::ScratchBuffer;
}
