use std::{fmt::Display, str::FromStr};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    color_palette::Palette,
    dithering::error_diffusion::{ErrorKernel, matrices},
    error::DitherError,
    texture::PixelBuffer,
};

pub mod error_diffusion;
pub mod quantize;

/// Quantization strategy, picked once per invocation.
///
/// `None` is plain nearest-color mapping, every other variant carries an
/// [ErrorKernel] and diffuses quantization error while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum DitheringType {
    None,
    #[default]
    FloydSteinberg,
    Atkinson,
    Stucki,
    Burkes,
    Sierra,
    Jarvis,
}

impl DitheringType {
    pub const ALL: [DitheringType; 7] = [
        DitheringType::None,
        DitheringType::FloydSteinberg,
        DitheringType::Atkinson,
        DitheringType::Stucki,
        DitheringType::Burkes,
        DitheringType::Sierra,
        DitheringType::Jarvis,
    ];

    pub const fn kernel(self) -> Option<&'static ErrorKernel> {
        match self {
            Self::None => None,
            Self::FloydSteinberg => Some(&matrices::FLOYD_STEINBERG),
            Self::Atkinson => Some(&matrices::ATKINSON),
            Self::Stucki => Some(&matrices::STUCKI),
            Self::Burkes => Some(&matrices::BURKES),
            Self::Sierra => Some(&matrices::SIERRA),
            Self::Jarvis => Some(&matrices::JARVIS_JUDICE_NINKE),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::FloydSteinberg => "floyd",
            Self::Atkinson => "atkinson",
            Self::Stucki => "stucki",
            Self::Burkes => "burkes",
            Self::Sierra => "sierra",
            Self::Jarvis => "jarvis",
        }
    }

    /// Strict, case-insensitive lookup by name or alias.
    pub fn lookup(name: &str) -> Option<DitheringType> {
        match name.trim().to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "floyd" | "floyd-steinberg" | "floyd_steinberg" => Some(Self::FloydSteinberg),
            "atkinson" => Some(Self::Atkinson),
            "stucki" => Some(Self::Stucki),
            "burkes" => Some(Self::Burkes),
            "sierra" => Some(Self::Sierra),
            "jarvis" | "jarvis-judice-ninke" | "jjn" => Some(Self::Jarvis),
            _ => None,
        }
    }

    /// Forgiving lookup: anything unknown degrades to plain nearest-color mapping.
    pub fn from_name(name: &str) -> DitheringType {
        DitheringType::lookup(name).unwrap_or_else(|| {
            warn!(requested = name, fallback = "none", "Unsupported dithering algorithm");
            DitheringType::None
        })
    }

    /// Quantize `buffer` against `palette`, handing the same buffer back.
    pub fn dither(self, mut buffer: PixelBuffer, palette: &Palette) -> PixelBuffer {
        let (width, height) = buffer.shape();
        debug!(
            width,
            height,
            algorithm = self.name(),
            palette = palette.name(),
            "Applying dithering"
        );

        error_diffusion::scan(&mut buffer, palette, self.kernel());

        debug!("Dithering complete");
        buffer
    }
}

/// Dither independent buffers in parallel, one sequential scan per buffer.
///
/// Results keep the input order.
pub fn dither_batch(
    buffers: Vec<PixelBuffer>,
    algorithm: DitheringType,
    palette: &Palette,
) -> Vec<PixelBuffer> {
    debug!(count = buffers.len(), algorithm = algorithm.name(), "Dithering batch");
    buffers
        .into_par_iter()
        .map(|buffer| algorithm.dither(buffer, palette))
        .collect()
}

impl FromStr for DitheringType {
    type Err = DitherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DitheringType::lookup(s).ok_or_else(|| DitherError::UnsupportedAlgorithm(s.to_string()))
    }
}

impl From<String> for DitheringType {
    fn from(value: String) -> Self {
        DitheringType::from_name(&value)
    }
}

impl From<DitheringType> for &'static str {
    fn from(value: DitheringType) -> Self {
        value.name()
    }
}

impl Display for DitheringType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
