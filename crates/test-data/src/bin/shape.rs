//! Generates a heightmap from a scenario and logs its statistics after each stage.
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin shape -- scenario.json
//! ```
//!
//! Without an argument the scenario path is read from `HEIGHTMAP_SCENARIO`,
//! falling back to the built-in default scenario.

use anyhow::Context;
use heightmap::{GridStats, apply_filters, post_process};
use test_data::config::{ScenarioConfig, ScenarioLoader};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("HEIGHTMAP_SCENARIO").ok());
    let scenario = match &path {
        Some(path) => {
            tracing::info!(path = %path, "Loading scenario");
            ScenarioLoader::load_file(path)
                .with_context(|| format!("Failed to load scenario {path}"))?
        }
        None => {
            tracing::info!("Using default scenario");
            ScenarioConfig::default()
        }
    };

    let options = &scenario.options;
    tracing::info!(
        columns = options.columns(),
        rows = options.rows(),
        filters = scenario.filters.len(),
        "Generating heightmap"
    );

    let mut grid = scenario
        .generator
        .generate(options)
        .context("Failed to generate heightmap")?;
    log_stats("generated", &grid);

    for filter in &scenario.filters {
        apply_filters(&mut grid, options, std::slice::from_ref(filter))
            .with_context(|| format!("Filter {} failed", filter.name()))?;
        log_stats(filter.name(), &grid);
    }

    if let Some(recipe) = &scenario.post_process {
        post_process(&mut grid, options, recipe)
            .context("Post-processing failed")?;
        log_stats("post_process", &grid);
    }

    tracing::info!("Shaping completed!");
    Ok(())
}

fn log_stats(stage: &str, grid: &[f64]) {
    match GridStats::of(grid) {
        Some(stats) => tracing::info!(
            stage,
            min = stats.min,
            max = stats.max,
            mean = stats.mean,
            distinct = stats.distinct,
            "Stage complete"
        ),
        None => tracing::warn!(stage, "empty grid"),
    }
}
