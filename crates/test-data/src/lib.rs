//! Test data generation for heightmap filters.
//!
//! This crate provides seeded heightmap generators and JSON scenarios that
//! drive the filters end to end, for property tests and manual inspection.
//!
//! # Quick Start
//!
//! ```rust
//! use test_data::prelude::*;
//!
//! let options = TerrainOptions::new(31, 31).with_size(256.0, 256.0);
//! let mut grid = HeightmapGenerator::mountains(7).generate(&options);
//! smooth_median(&mut grid, &options)?;
//! radial_edges(&mut grid, &options, &RadialEdges::new(EdgeDirection::Down, 32.0))?;
//! normalize(&mut grid, &options)?;
//! # Ok::<(), heightmap::FilterError>(())
//! ```

pub mod config;
pub mod terrain;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{
        GeneratorConfig, ScenarioConfig, ScenarioError, ScenarioLoader, TerrainPreset,
    };
    pub use crate::terrain::{HeightmapGenerator, fixtures};
    pub use heightmap::prelude::*;
}
