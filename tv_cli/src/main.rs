//! Headless host for the tensor visualizer.
//!
//! Generates a scene, prints each tensor's text panel, starts a randomize,
//! and drives frames at the scene's frame rate until the animation has run
//! its course. The final frame can be written out as SVG.
//!
//! Environment:
//! - `RUST_LOG`: log filter (default `info`)
//! - `TENSORVIZ_SEED`: RNG seed
//! - `TENSORVIZ_FRAMES`: number of frames to drive
//! - `TENSORVIZ_SVG`: path for the final frame

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};
use tv_render::{DrawingSurface, Hsla, RecordingSurface, SvgSurface};
use tv_scene::{Scene, SceneConfig};

struct HostConfig {
    seed: Option<u64>,
    frames: Option<usize>,
    svg: Option<PathBuf>,
}

impl HostConfig {
    fn from_env() -> Result<Self> {
        let seed = env_var("TENSORVIZ_SEED")?
            .map(|raw| raw.parse::<u64>())
            .transpose()
            .context("TENSORVIZ_SEED must be an unsigned integer")?;
        let frames = env_var("TENSORVIZ_FRAMES")?
            .map(|raw| raw.parse::<usize>())
            .transpose()
            .context("TENSORVIZ_FRAMES must be an unsigned integer")?;
        let svg = env_var("TENSORVIZ_SVG")?.map(PathBuf::from);
        Ok(HostConfig { seed, frames, svg })
    }
}

fn env_var(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => Ok(Some(raw.trim().to_string())),
        Ok(_) | Err(std::env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err).with_context(|| format!("failed to read {name}")),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);
    Registry::default().with(filter).with(fmt_layer).init();
}

fn main() -> Result<()> {
    init_tracing();
    let host = HostConfig::from_env()?;

    let config = SceneConfig {
        seed: host.seed,
        ..SceneConfig::default()
    };
    let frames = host.frames.unwrap_or(config.animation_frames() + 1);
    let dt = config.frame_interval();
    let (canvas_w, canvas_h) = config.canvas;

    let mut scene = Scene::new(config).context("invalid scene configuration")?;
    scene.generate();

    println!("=== Generated Tensors ===\n");
    for (handle, text) in scene.handles().zip(scene.text_panels()) {
        let tensor = scene.tensor(handle)?;
        println!("{} shape {}:\n{}\n", tensor.id(), tensor.shape(), text);
    }

    scene.randomize();
    info!(frames, dt, "driving randomize animation");

    let mut surface = RecordingSurface::new();
    let (mut fresh, mut cached) = (0usize, 0usize);
    for frame in 0..frames {
        surface.clear();
        let report = scene.frame(dt, &mut surface)?;
        fresh += report.fresh;
        cached += report.cached;
        debug!(
            frame,
            animated = report.animated,
            fresh = report.fresh,
            cached = report.cached,
            commands = surface.commands().len(),
            "frame"
        );
    }
    info!(fresh, cached, "render cache usage");

    println!("=== After Randomize ===\n");
    for text in scene.text_panels() {
        println!("{}\n", text);
    }

    if let Some(path) = host.svg {
        let mut svg = SvgSurface::new(canvas_w, canvas_h);
        svg.background(Hsla::TEAL);
        surface.replay(&mut svg);
        std::fs::write(&path, svg.finish())
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote final frame");
    }

    Ok(())
}
