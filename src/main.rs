//! Headless voxel terrain viewer: streams chunk meshes around a scripted
//! fly-through camera and reports cache behaviour.
#![forbid(unsafe_code)]

mod camera;
mod config;
mod frame;
mod view;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use voxview_runtime::Runtime;
use voxview_world::{AnySampler, SamplerKind};

use crate::config::{ConfigError, ViewerConfig, load_config_from_path};
use crate::frame::{DrawTally, FrameLoop};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Viewer config (TOML); built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short, long)]
    frames: Option<u32>,

    /// Visible chunk radius around the camera
    #[arg(short, long)]
    radius: Option<u32>,

    /// Terrain sampler: sine, heightmap or noise
    #[arg(long)]
    sampler: Option<SamplerKind>,

    /// Noise seed
    #[arg(long)]
    seed: Option<i32>,

    /// Log filter, e.g. `debug` or `info,perf=off`; RUST_LOG wins when set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load(args: &Args) -> Result<ViewerConfig, ConfigError> {
    let mut cfg = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => ViewerConfig::default(),
    };
    if let Some(frames) = args.frames {
        cfg.flight.frames = frames;
    }
    if let Some(radius) = args.radius {
        cfg.view.radius = radius;
    }
    if let Some(sampler) = args.sampler {
        cfg.world.sampler = sampler;
    }
    if let Some(seed) = args.seed {
        cfg.world.seed = seed;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn run(cfg: &ViewerConfig) -> Result<(), ConfigError> {
    let params = cfg.worldgen_params();
    let sampler = AnySampler::from_params(&params);
    log::info!(
        "sampler={} seed={} border={} radius={} frames={}",
        sampler.kind(),
        params.seed,
        params.border,
        cfg.view.radius,
        cfg.flight.frames
    );
    let runtime = Runtime::new(sampler, params.border, cfg.capacities()?);
    let mut frames = FrameLoop::new(runtime, cfg.view.radius, cfg.flight.clone());
    let mut tally = DrawTally::default();
    let summary = frames.run(cfg.flight.frames, &mut tally);

    let p = frames.camera().position();
    log::info!(
        "{} frames in {} ms: draws={} tris={} empty={} chunks_entered={} final_chunk={} camera=({:.1}, {:.1}, {:.1}) fov={:.0}deg",
        summary.frames,
        summary.elapsed_ms,
        tally.draw_calls,
        tally.triangles,
        tally.empty_meshes,
        summary.chunks_entered,
        summary.final_chunk,
        p.x,
        p.y,
        p.z,
        frames.camera().fov().to_degrees()
    );
    frames.runtime().log_stats();
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let result = load(&args).and_then(|cfg| run(&cfg));
    if let Err(e) = result {
        log::error!("{}", e);
        process::exit(1);
    }
}
