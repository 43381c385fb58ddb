//! Perlin noise-based heightmap generation.

use heightmap::TerrainOptions;
use noise::{NoiseFn, Perlin};

/// Generates natural-looking heightmaps using Perlin noise.
///
/// The generator uses multiple octaves of Perlin noise to create
/// terrain with both large-scale features and small-scale variation.
/// Sample positions are physical coordinates, so the same generator gives
/// the same terrain at any grid resolution.
#[derive(Debug, Clone)]
pub struct HeightmapGenerator {
    perlin: Perlin,
    /// Elevation the noise is centered on.
    base_elevation: f64,
    /// Scale factor for terrain height variation.
    height_scale: f64,
    /// Spatial frequency (controls terrain "wavelength").
    frequency: f64,
    /// Number of noise octaves for detail.
    octaves: u32,
}

impl HeightmapGenerator {
    /// Creates a new generator with default settings.
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
            base_elevation: 0.0,
            height_scale: 100.0, // ±100 variation
            frequency: 0.0037,   // a few hills across a 1024-wide terrain
            octaves: 4,
        }
    }

    /// Creates a generator for steep, detailed terrain.
    pub fn mountains(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
            base_elevation: 0.0,
            height_scale: 400.0,
            frequency: 0.0061,
            octaves: 6,
        }
    }

    /// Creates a generator for relatively flat terrain (rolling hills).
    pub fn rolling_hills(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
            base_elevation: 0.0,
            height_scale: 20.0, // Minimal variation
            frequency: 0.0019,
            octaves: 2,
        }
    }

    /// Sets the base elevation.
    pub fn with_base_elevation(mut self, elevation: f64) -> Self {
        self.base_elevation = elevation;
        self
    }

    /// Sets the height scale (variation amplitude).
    pub fn with_height_scale(mut self, scale: f64) -> Self {
        self.height_scale = scale;
        self
    }

    /// Sets the spatial frequency.
    pub fn with_frequency(mut self, freq: f64) -> Self {
        self.frequency = freq;
        self
    }

    /// Sets the number of octaves.
    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves.max(1);
        self
    }

    /// Gets elevation at a physical `(x, y)` position.
    ///
    /// Uses fractal Brownian motion (fBm) for natural terrain appearance.
    pub fn elevation_at(&self, x: f64, y: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = self.frequency;
        let mut max_amplitude = 0.0;

        for _ in 0..self.octaves {
            let noise_val = self.perlin.get([x * frequency, y * frequency]);
            total += noise_val * amplitude;
            max_amplitude += amplitude;
            amplitude *= 0.5; // Each octave has half the amplitude
            frequency *= 2.0; // Each octave has double the frequency
        }

        // Normalize and scale
        let normalized = total / max_amplitude; // Range: -1 to 1
        self.base_elevation + (normalized * self.height_scale)
    }

    /// Generates a full row-major grid for `options`.
    pub fn generate(&self, options: &TerrainOptions) -> Vec<f64> {
        let step_x = step(options.width, options.width_segments);
        let step_y = step(options.height, options.height_segments);

        let mut grid = Vec::with_capacity(options.cell_count());
        for row in 0..options.rows() {
            for col in 0..options.columns() {
                grid.push(self.elevation_at(col as f64 * step_x, row as f64 * step_y));
            }
        }
        grid
    }

    pub fn height_scale(&self) -> f64 {
        self.height_scale
    }

    pub fn base_elevation(&self) -> f64 {
        self.base_elevation
    }
}

fn step(extent: f64, segments: usize) -> f64 {
    if segments == 0 {
        0.0
    } else {
        extent / segments as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elevation_consistency() {
        let heights = HeightmapGenerator::new(42);
        let z1 = heights.elevation_at(120.5, 300.25);
        let z2 = heights.elevation_at(120.5, 300.25);
        assert!((z1 - z2).abs() < 0.001);
    }

    #[test]
    fn test_elevation_range() {
        let heights = HeightmapGenerator::new(42).with_base_elevation(50.0);
        let z = heights.elevation_at(120.5, 300.25);
        // Should be within base ± scale
        assert!(z >= heights.base_elevation() - heights.height_scale());
        assert!(z <= heights.base_elevation() + heights.height_scale());
    }

    #[test]
    fn test_grid_generation() {
        let options = TerrainOptions::new(15, 7).with_size(512.0, 256.0);
        let grid = HeightmapGenerator::mountains(7).generate(&options);
        assert_eq!(grid.len(), 16 * 8);
        assert!(grid.iter().all(|z| z.is_finite()));
    }

    #[test]
    fn test_seeds_differ() {
        let options = TerrainOptions::default();
        let a = HeightmapGenerator::new(1).generate(&options);
        let b = HeightmapGenerator::new(2).generate(&options);
        assert_ne!(a, b);
    }
}
