use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{color_palette::Palette, dithering::DitheringType, error::Result, utils::pixel::Rgb};

/// Smallest and largest accepted pixelation factor.
pub const PIXEL_SIZE_RANGE: (f32, f32) = (1.0, 5.0);

/// Processing options, usually read from a JSON file.
///
/// ```json
/// { "algorithm": "atkinson", "palette": "gameboy", "pixel_size": 2, "upscale": true }
/// ```
///
/// `colors` defines a custom palette and takes precedence over `palette`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessConfig {
    pub algorithm: DitheringType,
    pub palette: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<Rgb>>,
    pub pixel_size: f32,
    pub upscale: bool,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        ProcessConfig {
            algorithm: DitheringType::default(),
            palette: String::from(crate::color_palette::DEFAULT_PALETTE),
            colors: None,
            pixel_size: 1.0,
            upscale: true,
        }
    }
}

impl ProcessConfig {
    pub fn from_json_str(json: &str) -> Result<ProcessConfig> {
        let mut config: ProcessConfig = serde_json::from_str(json)?;
        config.pixel_size = clamp_pixel_size(config.pixel_size);
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn read_config<P: AsRef<Path>>(path: P) -> Result<ProcessConfig> {
        let json = fs::read_to_string(path)?;
        ProcessConfig::from_json_str(&json)
    }

    pub fn write_config<P: AsRef<Path>>(&self, path: P) -> Result {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// The palette to quantize against: the custom colors when present,
    /// otherwise the registry entry named by `palette` (or `bw`).
    pub fn resolve_palette(&self) -> Result<Palette> {
        match &self.colors {
            Some(colors) => Palette::custom(self.palette.clone(), colors.clone()),
            None => Ok(Palette::resolve(&self.palette)),
        }
    }

    pub fn with_pixel_size(mut self, pixel_size: f32) -> Self {
        self.pixel_size = clamp_pixel_size(pixel_size);
        self
    }
}

/// Clamp into [PIXEL_SIZE_RANGE]; non-finite values reset to 1.
pub fn clamp_pixel_size(pixel_size: f32) -> f32 {
    let (min, max) = PIXEL_SIZE_RANGE;
    if !pixel_size.is_finite() {
        warn!(pixel_size, "Non-finite pixel size, using {}", min);
        return min;
    }
    let clamped = pixel_size.clamp(min, max);
    if clamped != pixel_size {
        warn!(pixel_size, clamped, "Pixel size out of range");
    }
    clamped
}
