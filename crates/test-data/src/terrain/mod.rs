//! Terrain generation utilities.
//!
//! Perlin noise heightmaps for realistic input, plus a few fixed grids
//! for tests with hand-checkable values.

mod elevation;
pub mod fixtures;

pub use elevation::HeightmapGenerator;
