//! The binary entry point for the Strata terrain generator.
//!
//! Wires the crates together: parse CLI arguments, load `config.ron` and
//! apply overrides, initialize logging, run the generation pipeline once,
//! and export the resulting maps as PNGs. A generation failure is fatal; an
//! export failure is logged and leaves the generated maps intact.

mod view;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use strata_config::{CliArgs, Config, GeneratorChoice};
use strata_terrain::{
    AccretionParams, ColorizeParams, GeneratorKind, PipelineParams, PlainsPyramidParams,
    SeedCenter, TerrainMaps, generate_maps,
};
use view::{LayerView, MapLayer};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("config"));
    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };
    config.apply_cli_overrides(&args);

    strata_log::init_logging(
        Some(&config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );

    let params = pipeline_params(&config);
    tracing::info!(
        seed = params.seed,
        generator = ?config.terrain.generator,
        "Generating terrain maps"
    );

    let maps = match generate_maps(&params) {
        Ok(maps) => maps,
        Err(e) => {
            tracing::error!("Terrain generation failed: {e}");
            return ExitCode::FAILURE;
        }
    };
    let (width, height) = maps.dimensions();
    tracing::info!(width, height, "Generation complete");

    export_maps(&config, &maps);

    // Write the layer a consumer would present first as a preview.
    let mut view = LayerView::new();
    if view.is_dirty() {
        write_preview(&config.export.output_dir, &view, &maps);
        view.clear_dirty();
    }

    ExitCode::SUCCESS
}

/// Build pipeline parameters from the loaded configuration.
fn pipeline_params(config: &Config) -> PipelineParams {
    let t = &config.terrain;
    let generator = match t.generator {
        GeneratorChoice::Accretion => GeneratorKind::Accretion(AccretionParams {
            width: t.width,
            height: t.height,
            seed_centers: t
                .seed_centers
                .iter()
                .map(|&(x, z)| SeedCenter::new(x, z))
                .collect(),
            step_size: t.step_size,
            splat_radius: t.splat_radius,
            iterations: t.iterations,
            margin: t.margin,
            noise_ceiling: t.noise_ceiling,
        }),
        GeneratorChoice::PlainsPyramid => GeneratorKind::PlainsPyramid(PlainsPyramidParams {
            width: t.width,
            height: t.height,
            ..Default::default()
        }),
    };

    PipelineParams {
        seed: config.world.seed,
        generator,
        colorize: ColorizeParams {
            grass_threshold: config.color.grass_threshold,
            jitter_max: config.color.jitter_max,
        },
    }
}

/// Export the configured maps. Failures are logged, never fatal.
fn export_maps(config: &Config, maps: &TerrainMaps) {
    let out = &config.export.output_dir;
    if let Err(e) = std::fs::create_dir_all(out) {
        tracing::warn!("Could not create output directory {}: {e}", out.display());
        return;
    }

    let (width, height) = maps.dimensions();
    if config.export.write_height_map {
        let path = out.join("height_map.png");
        match strata_export::write_rgba_png(&path, width, height, &maps.heights.to_grayscale_rgba())
        {
            Ok(()) => tracing::info!("Wrote height map to {}", path.display()),
            Err(e) => tracing::warn!("Could not write height map: {e}"),
        }
    }
    if config.export.write_color_map {
        let path = out.join("color_map.png");
        match strata_export::write_rgba_png(&path, width, height, &maps.colors.to_rgba()) {
            Ok(()) => tracing::info!("Wrote color map to {}", path.display()),
            Err(e) => tracing::warn!("Could not write color map: {e}"),
        }
    }
}

/// Write the currently active layer as `preview.png`.
fn write_preview(out: &Path, view: &LayerView, maps: &TerrainMaps) {
    let (width, height) = maps.dimensions();
    let pixels = match view.active() {
        MapLayer::Height => maps.heights.to_grayscale_rgba(),
        MapLayer::Color => maps.colors.to_rgba(),
    };
    let path = out.join("preview.png");
    match strata_export::write_rgba_png(&path, width, height, &pixels) {
        Ok(()) => tracing::debug!("Wrote preview to {}", path.display()),
        Err(e) => tracing::warn!("Could not write preview: {e}"),
    }
}
