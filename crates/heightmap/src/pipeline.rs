//! Filter composition.
//!
//! [`Filter`] names one filter call with its parameters, so a sequence of
//! filters can be described in a config file and replayed with
//! [`apply_filters`]. [`PostProcess`] is the usual finishing recipe for a
//! freshly generated heightmap.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::easing::Easing;
use crate::errors::Result;
use crate::filters::{self, EdgeDirection, LeftoverPolicy, LinearEdges, RadialEdges, Sides};
use crate::options::TerrainOptions;
use crate::scratch::ScratchBuffer;

/// One filter call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "filter", rename_all = "snake_case")]
pub enum Filter {
    Normalize,
    LinearEdges(LinearEdges),
    RadialEdges(RadialEdges),
    SmoothMean {
        #[serde(default)]
        weight: f64,
    },
    SmoothMedian,
    SmoothConservative {
        #[serde(default)]
        multiplier: Option<f64>,
    },
    Step {
        #[serde(default)]
        levels: Option<usize>,
        #[serde(default)]
        leftover: LeftoverPolicy,
    },
    Turbulence,
}

impl Filter {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normalize => "normalize",
            Self::LinearEdges(_) => "linear_edges",
            Self::RadialEdges(_) => "radial_edges",
            Self::SmoothMean { .. } => "smooth_mean",
            Self::SmoothMedian => "smooth_median",
            Self::SmoothConservative { .. } => "smooth_conservative",
            Self::Step { .. } => "step",
            Self::Turbulence => "turbulence",
        }
    }

    pub fn apply(
        &self,
        grid: &mut [f64],
        options: &TerrainOptions,
        scratch: &mut ScratchBuffer,
    ) -> Result<()> {
        match self {
            Self::Normalize => filters::normalize(grid, options),
            Self::LinearEdges(params) => filters::linear_edges(grid, options, params),
            Self::RadialEdges(params) => filters::radial_edges(grid, options, params),
            Self::SmoothMean { weight } => {
                filters::smooth_mean_with(grid, options, *weight, scratch)
            }
            Self::SmoothMedian => filters::smooth_median_with(grid, options, scratch),
            Self::SmoothConservative { multiplier } => {
                filters::smooth_conservative_with(grid, options, *multiplier, scratch)
            }
            Self::Step { levels, leftover } => {
                filters::step_with_policy(grid, options, *levels, *leftover)
            }
            Self::Turbulence => filters::turbulence(grid, options),
        }
    }
}

/// Runs `filters` in order.
///
/// Works on a copy and commits only if every filter succeeds.
pub fn apply_filters(
    grid: &mut [f64],
    options: &TerrainOptions,
    filters: &[Filter],
) -> Result<()> {
    options.check_grid(grid)?;
    let mut work = grid.to_vec();
    let mut scratch = ScratchBuffer::with_capacity(work.len());

    for filter in filters {
        debug!(filter = filter.name(), "applying filter");
        filter.apply(&mut work, options, &mut scratch)?;
    }

    grid.copy_from_slice(&work);
    Ok(())
}

/// Shape of the edge treatment in [`PostProcess`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Rectangular band along all four sides.
    #[default]
    Box,
    /// Annulus around the center.
    Radial,
}

/// Edge treatment for [`PostProcess`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeShape {
    pub kind: EdgeKind,
    pub direction: EdgeDirection,
    pub distance: f64,
    pub curve: Easing,
}

impl Default for EdgeShape {
    fn default() -> Self {
        Self {
            kind: EdgeKind::Box,
            direction: EdgeDirection::Up,
            distance: 50.0,
            curve: Easing::EaseInOut,
        }
    }
}

/// Finishing recipe for a generated heightmap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostProcess {
    /// Fold the heightmap into ridges first.
    pub turbulent: bool,
    /// Quantize into this many steps (followed by one mean smoothing pass) when above 1.
    pub steps: usize,
    pub edge: Option<EdgeShape>,
}

impl PostProcess {
    /// The filter sequence: turbulence, steps + smoothing, edges, then normalization.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();
        if self.turbulent {
            filters.push(Filter::Turbulence);
        }
        if self.steps > 1 {
            filters.push(Filter::Step {
                levels: Some(self.steps),
                leftover: LeftoverPolicy::Retain,
            });
            filters.push(Filter::SmoothMean { weight: 0.0 });
        }
        if let Some(edge) = &self.edge {
            filters.push(match edge.kind {
                EdgeKind::Box => Filter::LinearEdges(LinearEdges {
                    direction: edge.direction,
                    distance: edge.distance,
                    easing: edge.curve.clone(),
                    sides: Sides::all(),
                }),
                EdgeKind::Radial => Filter::RadialEdges(RadialEdges {
                    direction: edge.direction,
                    distance: edge.distance,
                    easing: edge.curve.clone(),
                }),
            });
        }
        filters.push(Filter::Normalize);
        filters
    }
}

pub fn post_process(
    grid: &mut [f64],
    options: &TerrainOptions,
    recipe: &PostProcess,
) -> Result<()> {
    apply_filters(grid, options, &recipe.filters())
}
