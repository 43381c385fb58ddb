//! Property tests over seeded Perlin heightmaps.
//!
//! Run with: `cargo nextest run -p test-data`

use test_data::prelude::*;

const EPS: f64 = 1e-9;
const SEEDS: [u32; 4] = [1, 42, 1234, 98765];

fn options() -> TerrainOptions {
    TerrainOptions::new(24, 17)
        .with_size(384.0, 272.0)
        .with_bounds(-100.0, 100.0)
}

fn terrain(seed: u32, options: &TerrainOptions) -> Vec<f64> {
    HeightmapGenerator::mountains(seed).generate(options)
}

#[test]
fn test_every_filter_preserves_length() {
    let options = options();
    let filters = [
        Filter::Normalize,
        Filter::LinearEdges(LinearEdges::new(EdgeDirection::Down, 40.0)),
        Filter::RadialEdges(RadialEdges::new(EdgeDirection::Up, 60.0)),
        Filter::SmoothMean { weight: 2.0 },
        Filter::SmoothMedian,
        Filter::SmoothConservative {
            multiplier: Some(1.5),
        },
        Filter::Step {
            levels: None,
            leftover: LeftoverPolicy::Retain,
        },
        Filter::Turbulence,
    ];
    for seed in SEEDS {
        let mut grid = terrain(seed, &options);
        for filter in &filters {
            apply_filters(&mut grid, &options, std::slice::from_ref(filter)).unwrap();
            assert_eq!(grid.len(), options.cell_count(), "{}", filter.name());
        }
    }
}

#[test]
fn test_normalize_hits_bounds_and_is_idempotent() {
    let options = options();
    for seed in SEEDS {
        let mut grid = terrain(seed, &options);
        normalize(&mut grid, &options).unwrap();

        let stats = GridStats::of(&grid).unwrap();
        assert!((stats.min - -100.0).abs() < EPS, "seed {seed}: {stats:?}");
        assert!((stats.max - 100.0).abs() < EPS, "seed {seed}: {stats:?}");

        let once = grid.clone();
        normalize(&mut grid, &options).unwrap();
        assert_eq!(grid, once, "seed {seed}");
    }
}

#[test]
fn test_normalize_with_easing_stays_in_bounds() {
    for easing in [Easing::EaseIn, Easing::InEaseOut, Easing::EaseInStrong] {
        let options = options().with_easing(easing);
        let mut grid = terrain(7, &options);
        normalize(&mut grid, &options).unwrap();
        let stats = GridStats::of(&grid).unwrap();
        assert!(stats.min >= -100.0 - EPS && stats.max <= 100.0 + EPS);
    }
}

#[test]
fn test_radial_edges_monotonic() {
    let options = options();
    for seed in SEEDS {
        let before = terrain(seed, &options);

        let mut up = before.clone();
        let raise = RadialEdges::new(EdgeDirection::Up, 80.0);
        radial_edges(&mut up, &options, &raise).unwrap();
        let mut down = before.clone();
        let lower = RadialEdges::new(EdgeDirection::Down, 80.0);
        radial_edges(&mut down, &options, &lower).unwrap();

        for i in 0..before.len() {
            assert!(up[i] >= before[i], "seed {seed}, cell {i}");
            assert!(down[i] <= before[i], "seed {seed}, cell {i}");
        }
    }
}

#[test]
fn test_radial_edges_symmetric_on_flat_terrain() {
    let options = TerrainOptions::new(20, 20)
        .with_size(200.0, 200.0)
        .with_bounds(0.0, 50.0);
    let index = options.index();
    let mut grid = fixtures::constant(&options, 10.0);
    let params = RadialEdges::new(EdgeDirection::Up, 40.0);
    radial_edges(&mut grid, &options, &params).unwrap();

    for row in 0..index.rows() {
        for col in 0..index.columns() {
            assert_eq!(
                grid[index.index(col, row)],
                grid[index.index(col, options.height_segments - row)]
            );
        }
    }
}

#[test]
fn test_linear_edges_keep_bounds() {
    let options = options();
    for seed in SEEDS {
        for direction in [EdgeDirection::Up, EdgeDirection::Down] {
            let mut grid = terrain(seed, &options);
            linear_edges(&mut grid, &options, &LinearEdges::new(direction, 48.0)).unwrap();
            let stats = GridStats::of(&grid).unwrap();
            assert!((stats.min - -100.0).abs() < EPS);
            assert!((stats.max - 100.0).abs() < EPS);
        }
    }
}

#[test]
fn test_linear_edges_corner_reaches_peak() {
    let options = options();
    let index = options.index();
    for seed in SEEDS {
        // The raw terrain overshoots the bounds; bring it inside so the corner stays the maximum.
        let mut grid = terrain(seed, &options);
        normalize(&mut grid, &options).unwrap();
        let params = LinearEdges::new(EdgeDirection::Up, 48.0);
        linear_edges(&mut grid, &options, &params).unwrap();
        assert!((grid[index.index(0, 0)] - 100.0).abs() < EPS, "seed {seed}");
    }
}

#[test]
fn test_step_population_bound() {
    let options = options();
    for seed in SEEDS {
        for levels in [1, 2, 5, 13, 64] {
            let mut grid = terrain(seed, &options);
            step_with_policy(
                &mut grid,
                &options,
                Some(levels),
                LeftoverPolicy::MergeIntoLast,
            )
            .unwrap();
            assert!(GridStats::of(&grid).unwrap().distinct <= levels);
        }
    }
}

#[test]
fn test_smoothers_stay_within_original_range() {
    let options = options();
    for seed in SEEDS {
        let original = terrain(seed, &options);
        let bounds = GridStats::of(&original).unwrap();
        for smoother in [
            Filter::SmoothMean { weight: 0.0 },
            Filter::SmoothMedian,
            Filter::SmoothConservative { multiplier: None },
        ] {
            let mut grid = original.clone();
            apply_filters(&mut grid, &options, std::slice::from_ref(&smoother)).unwrap();
            let stats = GridStats::of(&grid).unwrap();
            assert!(stats.min >= bounds.min - EPS, "{}", smoother.name());
            assert!(stats.max <= bounds.max + EPS, "{}", smoother.name());
        }
    }
}

#[test]
fn test_turbulence_stays_in_bounds() {
    let options = options();
    for seed in SEEDS {
        let mut grid = terrain(seed, &options);
        normalize(&mut grid, &options).unwrap();
        turbulence(&mut grid, &options).unwrap();
        // Both bounds fold onto the top and the midline onto the bottom.
        let stats = GridStats::of(&grid).unwrap();
        assert!(stats.min >= -100.0 - EPS && stats.max <= 100.0 + EPS);
        assert!((stats.max - 100.0).abs() < EPS, "seed {seed}");
    }
}

#[test]
fn test_default_scenario_is_deterministic() {
    let mut scenario = ScenarioConfig::default();
    scenario.options = TerrainOptions::new(15, 15).with_size(256.0, 256.0);
    assert_eq!(scenario.run().unwrap(), scenario.run().unwrap());
}
