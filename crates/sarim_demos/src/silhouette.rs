//! Flat silhouette of a transformed sphere cast onto a wall.
//!
//! One ray per pixel from a fixed eye point toward a wall behind the sphere.
//! A pixel is colored when the ray has a visible hit; there is no shading.

use std::f64::consts::PI;

use anyhow::{Context, Result};
use sarim_core::{hit, Canvas, Shape, ShapeError, Sphere};
use sarim_math::{chain, Matrix4, Ray, Tuple};

use crate::config::DemoConfig;

const WALL_Z: f64 = 10.0;
const WALL_SIZE: f64 = 7.0;

/// Squashed along y, then tipped 45 degrees about x.
fn sphere() -> Sphere {
    Sphere::new().with_transform(chain(&[
        Matrix4::rotation_x(PI / 4.0),
        Matrix4::scaling(1.0, 0.5, 1.0),
    ]))
}

pub fn run(config: &DemoConfig) -> Result<Canvas> {
    let mut canvas = Canvas::new(config.width, config.height);
    let color = Tuple::color(1.0, 0.2, 0.2);

    let eye = Tuple::point(0.0, 0.0, -5.0);
    let shape = sphere();
    let pixel_size = WALL_SIZE / config.width.min(config.height) as f64;
    let half = WALL_SIZE / 2.0;

    let mut hits = 0;
    for y in 0..config.height {
        let world_y = half - pixel_size * y as f64;
        for x in 0..config.width {
            let world_x = -half + pixel_size * x as f64;
            let target = Tuple::point(world_x, world_y, WALL_Z);

            let ray = Ray::new(eye, (target - eye).normalize()?);
            let mut xs = shape
                .intersect(&ray)
                .with_context(|| format!("intersecting ray for pixel ({}, {})", x, y))?;

            match hit(&mut xs) {
                Ok(_) => {
                    canvas.set_pixel(x, y, color);
                    hits += 1;
                }
                Err(ShapeError::NoHit) => {}
                Err(err) => return Err(err.into()),
            }
        }
    }
    log::info!(
        "Sphere covers {} of {} pixels",
        hits,
        config.width * config.height
    );

    Ok(canvas)
}
