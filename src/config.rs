//! Where figures go and how large they are.
use crate::core::CURVE_SAMPLES;
use crate::error::{Error, Result};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings shared by all figures. Every field is optional in a configuration file.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    /// Directory the SVG files are written to.
    pub output_dir: PathBuf,
    /// Width and height in pixels of the three-panel Riemann/midpoint figure.
    pub riemann_size: (u32, u32),
    /// Width and height in pixels of the trapezoid figure.
    pub trapezoid_size: (u32, u32),
    /// Number of points of the reference curve.
    pub curve_samples: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            riemann_size: (1800, 600),
            trapezoid_size: (500, 300),
            curve_samples: CURVE_SAMPLES,
        }
    }
}

impl PlotConfig {
    /// Reads a JSON configuration file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|err| Error::Config(format!("{}: {}", path.display(), err)))?;
        config.validate()?;

        Ok(config)
    }

    /// Checks that the figures can actually be drawn with these settings.
    pub fn validate(&self) -> Result<()> {
        for &(name, (width, height)) in &[
            ("riemann_size", self.riemann_size),
            ("trapezoid_size", self.trapezoid_size),
        ] {
            if width == 0 || height == 0 {
                return Err(Error::Config(format!(
                    "{} must be non-zero, got {}x{}",
                    name, width, height
                )));
            }
        }

        if self.curve_samples < 2 {
            return Err(Error::InvalidSampleCount(self.curve_samples));
        }

        Ok(())
    }

    /// Returns the file the Riemann/midpoint figure with `subdivisions` subintervals goes to.
    pub fn riemann_output(&self, subdivisions: usize) -> PathBuf {
        self.output_dir
            .join(format!("riemann_midpoint_N{}.svg", subdivisions))
    }

    /// Returns the file the trapezoid figure with `subdivisions` subintervals goes to.
    pub fn trapezoid_output(&self, subdivisions: usize) -> PathBuf {
        self.output_dir
            .join(format!("trapezoid_N{}.svg", subdivisions))
    }
}
