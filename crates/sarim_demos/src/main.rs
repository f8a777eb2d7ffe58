//! Demo drivers for the Sarim ray tracer kernel.
//!
//! Usage: sarim_demos <projectile|clock|sphere> [output.ppm]
//! Set RUST_LOG to control log output (default: info).

mod clock;
mod config;
mod projectile;
mod silhouette;

use std::env;

use anyhow::{Context, Result};
use sarim_core::Canvas;

use crate::config::{Demo, DemoConfig};

fn run(demo: Demo, config: &DemoConfig) -> Result<Canvas> {
    match demo {
        Demo::Projectile => projectile::run(config),
        Demo::Clock => clock::run(config),
        Demo::Sphere => silhouette::run(config),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <projectile|clock|sphere> [output.ppm]", args[0]);
        std::process::exit(1);
    }

    let demo: Demo = args[1].parse()?;
    let mut config = DemoConfig::for_demo(demo);
    if let Some(output) = args.get(2) {
        config = config.with_output(output);
    }

    log::info!("Running {} demo ({}x{})", demo, config.width, config.height);
    let start = std::time::Instant::now();
    let canvas = run(demo, &config)?;
    log::info!("Finished in {:?}", start.elapsed());

    canvas
        .write_ppm(&config.output, config.ppm)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    Ok(())
}
