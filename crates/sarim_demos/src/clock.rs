//! Twelve hour marks on a clock face, placed with rotations.

use std::f64::consts::PI;

use anyhow::Result;
use sarim_core::Canvas;
use sarim_math::{chain, Matrix4, Tuple};

use crate::config::DemoConfig;

/// Hour marks in canvas coordinates (x, z), viewed from above the y axis.
fn hour_marks(width: usize, height: usize) -> Vec<Tuple> {
    let twelve = Tuple::point(0.0, 0.0, 1.0);
    let radius = 3.0 / 8.0 * width.min(height) as f64;
    let to_canvas = chain(&[
        Matrix4::translation(width as f64 / 2.0, 0.0, height as f64 / 2.0),
        Matrix4::scaling(radius, 0.0, radius),
    ]);

    (0..12)
        .map(|hour| {
            let rotate = Matrix4::rotation_y(hour as f64 * PI / 6.0);
            (to_canvas * rotate) * twelve
        })
        .collect()
}

pub fn run(config: &DemoConfig) -> Result<Canvas> {
    let mut canvas = Canvas::new(config.width, config.height);
    let white = Tuple::color(1.0, 1.0, 1.0);

    for mark in hour_marks(config.width, config.height) {
        canvas.plot(mark.x, mark.z, white);
    }
    log::debug!("Placed 12 hour marks");

    Ok(canvas)
}
