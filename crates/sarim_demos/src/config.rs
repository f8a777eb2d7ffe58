//! Demo selection and output configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::bail;
use sarim_core::PpmOptions;

/// The available demo drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    Projectile,
    Clock,
    Sphere,
}

impl Demo {
    pub const ALL: [Demo; 3] = [Demo::Projectile, Demo::Clock, Demo::Sphere];

    pub fn name(&self) -> &'static str {
        match self {
            Demo::Projectile => "projectile",
            Demo::Clock => "clock",
            Demo::Sphere => "sphere",
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match Demo::ALL.iter().find(|d| d.name() == s) {
            Some(demo) => Ok(*demo),
            None => bail!("unknown demo '{}' (expected one of: projectile, clock, sphere)", s),
        }
    }
}

/// Canvas size and output path for one demo run.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Canvas width in pixels
    pub width: usize,
    /// Canvas height in pixels
    pub height: usize,
    /// Where the PPM is written
    pub output: PathBuf,
    /// PPM orientation
    pub ppm: PpmOptions,
}

impl DemoConfig {
    /// Defaults for `demo`: canvas size and `<name>.ppm` in the working directory.
    ///
    /// Projectile and clock plot with y pointing up, so their rows are flipped
    /// on output. The sphere demo already walks rows top to bottom.
    pub fn for_demo(demo: Demo) -> Self {
        let (width, height) = match demo {
            Demo::Projectile => (900, 550),
            Demo::Clock | Demo::Sphere => (100, 100),
        };
        Self {
            width,
            height,
            output: PathBuf::from(format!("{}.ppm", demo.name())),
            ppm: PpmOptions::default().with_flip_y(demo != Demo::Sphere),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}
