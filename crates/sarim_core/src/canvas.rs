//! Pixel canvas with plain-text PPM export.
//!
//! Colors are stored as [`Tuple`]s and only clamped when the image is written.

use std::fs;
use std::path::Path;

use sarim_math::Tuple;
use thiserror::Error;

/// Errors that can occur while writing a canvas.
#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CanvasResult<T> = Result<T, CanvasError>;

/// Pixels written per line of PPM body.
const PIXELS_PER_LINE: usize = 5;

/// Orientation options for PPM output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PpmOptions {
    /// Mirror left to right
    pub flip_x: bool,
    /// Mirror top to bottom, so y = 0 ends up on the last row
    pub flip_y: bool,
}

impl PpmOptions {
    pub fn with_flip_x(mut self, flip: bool) -> Self {
        self.flip_x = flip;
        self
    }

    pub fn with_flip_y(mut self, flip: bool) -> Self {
        self.flip_y = flip;
        self
    }
}

/// A width × height grid of colors, initially black.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Tuple>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Tuple::color(0.0, 0.0, 0.0); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the pixel at (x, y), or `None` outside the canvas.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Tuple> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set the pixel at (x, y).
    ///
    /// Writes outside the canvas are dropped; returns whether the pixel was set.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Tuple) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => {
                log::trace!(
                    "Dropped pixel ({}, {}) outside {}x{} canvas",
                    x,
                    y,
                    self.width,
                    self.height
                );
                false
            }
        }
    }

    /// Set a pixel from floating-point coordinates, truncating toward zero.
    ///
    /// Negative or non-finite coordinates are dropped like any other
    /// out-of-bounds write.
    pub fn plot(&mut self, x: f64, y: f64, color: Tuple) -> bool {
        if !(x.is_finite() && y.is_finite()) || x < 0.0 || y < 0.0 {
            log::trace!("Dropped pixel ({}, {}) with invalid coordinates", x, y);
            return false;
        }
        self.set_pixel(x as usize, y as usize, color)
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Render the canvas as a plain PPM (`P3`) document.
    pub fn to_ppm(&self, options: PpmOptions) -> String {
        let mut out = format!("P3\n{} {}\n255\n", self.width, self.height);

        let mut written = 0;
        for row in 0..self.height {
            let y = if options.flip_y { self.height - row - 1 } else { row };
            for col in 0..self.width {
                let x = if options.flip_x { self.width - col - 1 } else { col };
                let [r, g, b] = color_to_rgb(self.pixels[y * self.width + x]);

                if written % PIXELS_PER_LINE != 0 {
                    out.push(' ');
                }
                out.push_str(&format!("{} {} {}", r, g, b));
                written += 1;
                if written % PIXELS_PER_LINE == 0 {
                    out.push('\n');
                }
            }
        }
        if written % PIXELS_PER_LINE != 0 {
            out.push('\n');
        }

        out
    }

    /// Write the canvas to `path` as a PPM file, replacing any existing file.
    pub fn write_ppm(&self, path: impl AsRef<Path>, options: PpmOptions) -> CanvasResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_ppm(options))?;
        log::info!(
            "Wrote {}x{} canvas to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }
}

/// Clamp a color to [0, 1] and convert to 8-bit channels (truncating).
pub fn color_to_rgb(color: Tuple) -> [u8; 3] {
    let c = color.clamp(0.0, 1.0);
    [
        (c.red() * 255.0) as u8,
        (c.green() * 255.0) as u8,
        (c.blue() * 255.0) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_black() {
        let canvas = Canvas::new(10, 20);
        assert_eq!(canvas.width(), 10);
        assert_eq!(canvas.height(), 20);
        for y in 0..20 {
            for x in 0..10 {
                assert_eq!(canvas.pixel(x, y), Some(Tuple::color(0.0, 0.0, 0.0)));
            }
        }
    }

    #[test]
    fn test_set_pixel() {
        let mut canvas = Canvas::new(10, 20);
        let red = Tuple::color(1.0, 0.0, 0.0);
        assert!(canvas.set_pixel(2, 3, red));
        assert_eq!(canvas.pixel(2, 3), Some(red));
    }

    #[test]
    fn test_out_of_bounds_writes_are_dropped() {
        let mut canvas = Canvas::new(4, 4);
        let red = Tuple::color(1.0, 0.0, 0.0);
        assert!(!canvas.set_pixel(4, 0, red));
        assert!(!canvas.set_pixel(0, 4, red));
        assert!(!canvas.plot(-1.0, 2.0, red));
        assert!(!canvas.plot(f64::NAN, 2.0, red));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn test_plot_truncates() {
        let mut canvas = Canvas::new(4, 4);
        let red = Tuple::color(1.0, 0.0, 0.0);
        assert!(canvas.plot(2.9, 1.2, red));
        assert_eq!(canvas.pixel(2, 1), Some(red));
    }

    #[test]
    fn test_color_to_rgb_clamps() {
        assert_eq!(color_to_rgb(Tuple::color(1.5, 0.0, -0.5)), [255, 0, 0]);
        assert_eq!(color_to_rgb(Tuple::color(0.5, 1.0, 0.0)), [127, 255, 0]);
    }

    #[test]
    fn test_ppm_header() {
        let ppm = Canvas::new(5, 3).to_ppm(PpmOptions::default());
        let lines: Vec<&str> = ppm.lines().take(3).collect();
        assert_eq!(lines, vec!["P3", "5 3", "255"]);
    }

    #[test]
    fn test_ppm_body() {
        let mut canvas = Canvas::new(5, 3);
        canvas.set_pixel(0, 0, Tuple::color(1.5, 0.0, 0.0));
        canvas.set_pixel(2, 1, Tuple::color(0.0, 0.5, 0.0));
        canvas.set_pixel(4, 2, Tuple::color(-0.5, 0.0, 1.0));

        let ppm = canvas.to_ppm(PpmOptions::default());
        let body: Vec<&str> = ppm.lines().skip(3).collect();
        assert_eq!(
            body,
            vec![
                "255 0 0 0 0 0 0 0 0 0 0 0 0 0 0",
                "0 0 0 0 0 0 0 127 0 0 0 0 0 0 0",
                "0 0 0 0 0 0 0 0 0 0 0 0 0 0 255",
            ]
        );
        assert!(ppm.ends_with('\n'));
    }

    #[test]
    fn test_ppm_wraps_long_rows() {
        let ppm = Canvas::new(7, 1).to_ppm(PpmOptions::default());
        let body: Vec<&str> = ppm.lines().skip(3).collect();
        assert_eq!(body.len(), 2);
        assert_eq!(body[1], "0 0 0 0 0 0");
    }

    #[test]
    fn test_ppm_flip_y() {
        let mut canvas = Canvas::new(1, 2);
        canvas.set_pixel(0, 0, Tuple::color(1.0, 1.0, 1.0));

        let ppm = canvas.to_ppm(PpmOptions::default().with_flip_y(true));
        let body: Vec<&str> = ppm.lines().skip(3).collect();
        assert_eq!(body, vec!["0 0 0 255 255 255"]);
    }

    #[test]
    fn test_ppm_flip_x() {
        let mut canvas = Canvas::new(2, 1);
        canvas.set_pixel(0, 0, Tuple::color(1.0, 1.0, 1.0));

        let ppm = canvas.to_ppm(PpmOptions::default().with_flip_x(true));
        assert_eq!(ppm.lines().nth(3), Some("0 0 0 255 255 255"));
    }

    #[test]
    fn test_write_ppm() {
        let _ = env_logger::builder().is_test(true).try_init();

        let path = std::env::temp_dir().join(format!("sarim_canvas_{}.ppm", std::process::id()));
        let canvas = Canvas::new(2, 2);
        canvas.write_ppm(&path, PpmOptions::default()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, canvas.to_ppm(PpmOptions::default()));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_ppm_to_missing_directory_fails() {
        let path = std::env::temp_dir().join("sarim_missing_dir").join("nested").join("out.ppm");
        let result = Canvas::new(1, 1).write_ppm(&path, PpmOptions::default());
        assert!(matches!(result, Err(CanvasError::Io(_))));
    }
}
