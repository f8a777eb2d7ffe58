//! Projectile trajectory under gravity and wind.

use anyhow::Result;
use sarim_core::Canvas;
use sarim_math::Tuple;

use crate::config::DemoConfig;

const TICKS: usize = 100;
const LAUNCH_SPEED: f64 = 11.25;

#[derive(Debug, Clone, Copy)]
struct Projectile {
    position: Tuple,
    velocity: Tuple,
}

#[derive(Debug, Clone, Copy)]
struct Environment {
    gravity: Tuple,
    wind: Tuple,
}

/// Advance the projectile by one tick.
fn tick(env: &Environment, proj: Projectile) -> Projectile {
    Projectile {
        position: proj.position + proj.velocity,
        velocity: proj.velocity + env.gravity + env.wind,
    }
}

/// Positions after each of `ticks` steps, starting one unit above the origin.
fn trajectory(ticks: usize) -> Result<Vec<Tuple>> {
    let env = Environment {
        gravity: Tuple::vector(0.0, -0.1, 0.0),
        wind: Tuple::vector(-0.01, 0.0, 0.0),
    };
    let mut proj = Projectile {
        position: Tuple::point(0.0, 1.0, 0.0),
        velocity: Tuple::vector(1.0, 1.8, 0.0).normalize()? * LAUNCH_SPEED,
    };

    let mut positions = Vec::with_capacity(ticks);
    for _ in 0..ticks {
        proj = tick(&env, proj);
        positions.push(proj.position);
    }
    Ok(positions)
}

pub fn run(config: &DemoConfig) -> Result<Canvas> {
    let mut canvas = Canvas::new(config.width, config.height);
    let red = Tuple::color(1.0, 0.0, 0.0);

    let positions = trajectory(TICKS)?;
    let plotted = positions
        .iter()
        .filter(|p| canvas.plot(p.x, p.y, red))
        .count();
    log::info!("Plotted {} of {} projectile positions", plotted, positions.len());

    Ok(canvas)
}
