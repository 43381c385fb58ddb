//! Heightmap filters.
//!
//! Every filter rewrites a row-major elevation grid in place:
//! - [`normalize`]: rescale into the configured elevation range
//! - [`linear_edges`]: push a band along the rectangular boundary toward a bound
//! - [`radial_edges`]: push an annulus around the center toward a bound
//! - [`smooth_mean`], [`smooth_median`], [`smooth_conservative`]: 3x3 neighborhood smoothing
//! - [`step`]: quantize into population buckets
//! - [`turbulence`]: fold around the midpoint of the range
//!
//! Filters validate all of their inputs before writing, so a failed call
//! leaves the grid as it was.

pub mod edges;
pub mod normalize;
pub mod radial;
pub mod smooth;
pub mod step;
pub mod turbulence;

pub use edges::{EdgeDirection, LinearEdges, Sides, linear_edges};
pub use normalize::normalize;
pub use radial::{RadialEdges, radial_edges};
pub use smooth::{
    smooth_conservative, smooth_conservative_with, smooth_mean, smooth_mean_with, smooth_median,
    smooth_median_with,
};
pub use step::{Bucket, LeftoverPolicy, default_levels, population_buckets, step, step_with_policy};
pub use turbulence::turbulence;
