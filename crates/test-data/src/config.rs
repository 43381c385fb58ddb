//! Scenario configuration for heightmap generation runs.
//!
//! A scenario names a generator, the terrain options, an explicit filter
//! sequence and an optional finishing recipe. Scenarios are plain JSON:
//!
//! ```json
//! {
//!   "generator": {"kind": "perlin", "seed": 7, "preset": "mountains"},
//!   "options": {"width_segments": 127, "height_segments": 127},
//!   "filters": [{"filter": "smooth_median"}],
//!   "post_process": {"steps": 6, "edge": {"kind": "radial", "direction": "down"}}
//! }
//! ```

use std::path::Path;

use heightmap::{EdgeShape, Filter, FilterError, PostProcess, TerrainOptions};
use rand::SeedableRng;
use rand_distr::NormalError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::terrain::{HeightmapGenerator, fixtures};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Scenario parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid jitter: {0}")]
    Jitter(#[from] NormalError),
    #[error("Filter failed: {0}")]
    Filter(#[from] FilterError),
}

/// Noise preset for [`GeneratorConfig::Perlin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainPreset {
    #[default]
    Default,
    Mountains,
    RollingHills,
}

impl TerrainPreset {
    pub fn generator(self, seed: u32) -> HeightmapGenerator {
        match self {
            Self::Default => HeightmapGenerator::new(seed),
            Self::Mountains => HeightmapGenerator::mountains(seed),
            Self::RollingHills => HeightmapGenerator::rolling_hills(seed),
        }
    }
}

/// Source of the raw heightmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// Fractal Perlin noise, optionally with Gaussian jitter on top.
    Perlin {
        #[serde(default)]
        seed: u32,
        #[serde(default)]
        preset: TerrainPreset,
        #[serde(default)]
        jitter: f64,
    },
    /// Independent uniform samples.
    Uniform {
        #[serde(default)]
        seed: u64,
        min: f64,
        max: f64,
    },
    /// Row-major ramp `0, 1, 2, ...`.
    Ramp,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::Perlin {
            seed: 42,
            preset: TerrainPreset::Default,
            jitter: 0.0,
        }
    }
}

impl GeneratorConfig {
    pub fn generate(&self, options: &TerrainOptions) -> Result<Vec<f64>, ScenarioError> {
        match self {
            Self::Perlin {
                seed,
                preset,
                jitter,
            } => {
                let mut grid = preset.generator(*seed).generate(options);
                if *jitter > 0.0 {
                    let mut rng = rand::rngs::StdRng::seed_from_u64(u64::from(*seed));
                    fixtures::add_jitter(&mut grid, *jitter, &mut rng)?;
                }
                Ok(grid)
            }
            Self::Uniform { seed, min, max } => {
                let mut rng = rand::rngs::StdRng::seed_from_u64(*seed);
                Ok(fixtures::uniform(options, *min, *max, &mut rng))
            }
            Self::Ramp => Ok(fixtures::ramp(options)),
        }
    }
}

/// One generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub generator: GeneratorConfig,
    pub options: TerrainOptions,
    /// Applied in order before `post_process`.
    pub filters: Vec<Filter>,
    pub post_process: Option<PostProcess>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            options: TerrainOptions::default(),
            filters: vec![Filter::SmoothMedian],
            post_process: Some(PostProcess {
                turbulent: false,
                steps: 0,
                edge: Some(EdgeShape::default()),
            }),
        }
    }
}

impl ScenarioConfig {
    /// Generates the raw grid and runs every configured filter on it.
    pub fn run(&self) -> Result<Vec<f64>, ScenarioError> {
        let mut grid = self.generator.generate(&self.options)?;
        heightmap::apply_filters(&mut grid, &self.options, &self.filters)?;
        if let Some(recipe) = &self.post_process {
            heightmap::post_process(&mut grid, &self.options, recipe)?;
        }
        Ok(grid)
    }
}

/// Loads scenarios from JSON.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load_file(path: impl AsRef<Path>) -> Result<ScenarioConfig, ScenarioError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn load_str(json: &str) -> Result<ScenarioConfig, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }
}
