use std::borrow::Cow;

use itertools::Itertools;
use tracing::warn;

use crate::{
    error::{DitherError, Result},
    utils::pixel::Rgb,
};

/// Name of the palette used when a lookup fails.
pub const DEFAULT_PALETTE: &str = "bw";

const fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb::new(r, g, b)
}

pub const BW: [Rgb; 2] = [rgb(0, 0, 0), rgb(255, 255, 255)];

pub const GAMEBOY: [Rgb; 4] = [
    rgb(15, 56, 15),
    rgb(48, 98, 48),
    rgb(139, 172, 15),
    rgb(155, 188, 15),
];

pub const CGA: [Rgb; 4] = [
    rgb(0, 0, 0),
    rgb(85, 255, 255),
    rgb(255, 85, 255),
    rgb(255, 255, 255),
];

pub const CGA_WARM: [Rgb; 4] = [
    rgb(0, 0, 0),
    rgb(85, 255, 85),
    rgb(255, 85, 85),
    rgb(255, 255, 85),
];

pub const EGA: [Rgb; 16] = [
    rgb(0, 0, 0),
    rgb(0, 0, 170),
    rgb(0, 170, 0),
    rgb(0, 170, 170),
    rgb(170, 0, 0),
    rgb(170, 0, 170),
    rgb(170, 85, 0),
    rgb(170, 170, 170),
    rgb(85, 85, 85),
    rgb(85, 85, 255),
    rgb(85, 255, 85),
    rgb(85, 255, 255),
    rgb(255, 85, 85),
    rgb(255, 85, 255),
    rgb(255, 255, 85),
    rgb(255, 255, 255),
];

pub const MAC: [Rgb; 2] = [rgb(255, 255, 255), rgb(0, 0, 0)];

pub const SEPIA: [Rgb; 4] = [
    rgb(94, 75, 53),
    rgb(166, 142, 116),
    rgb(217, 202, 184),
    rgb(255, 255, 255),
];

pub const VAPORWAVE: [Rgb; 6] = [
    rgb(255, 113, 206),
    rgb(1, 205, 254),
    rgb(5, 255, 161),
    rgb(185, 103, 255),
    rgb(255, 251, 150),
    rgb(20, 20, 40),
];

pub const CYBERPUNK: [Rgb; 4] = [
    rgb(252, 227, 0),
    rgb(0, 255, 241),
    rgb(255, 0, 60),
    rgb(10, 10, 15),
];

pub const NORD: [Rgb; 16] = [
    rgb(46, 52, 64),
    rgb(59, 66, 82),
    rgb(67, 76, 94),
    rgb(76, 86, 106),
    rgb(216, 222, 233),
    rgb(229, 233, 240),
    rgb(236, 239, 244),
    rgb(143, 188, 187),
    rgb(136, 192, 208),
    rgb(129, 161, 193),
    rgb(94, 129, 172),
    rgb(191, 97, 106),
    rgb(208, 135, 112),
    rgb(235, 203, 139),
    rgb(163, 190, 140),
    rgb(180, 142, 173),
];

pub const GRUVBOX: [Rgb; 16] = [
    rgb(40, 40, 40),
    rgb(204, 36, 29),
    rgb(152, 151, 26),
    rgb(215, 153, 33),
    rgb(69, 133, 136),
    rgb(177, 98, 134),
    rgb(104, 157, 106),
    rgb(168, 153, 132),
    rgb(251, 241, 199),
    rgb(251, 73, 52),
    rgb(184, 187, 38),
    rgb(250, 189, 47),
    rgb(131, 165, 152),
    rgb(211, 134, 155),
    rgb(142, 192, 124),
    rgb(235, 219, 178),
];

/// Registered palettes, in listing order.
pub static BUILTIN_PALETTES: [(&str, &[Rgb]); 11] = [
    ("bw", &BW),
    ("gameboy", &GAMEBOY),
    ("cga", &CGA),
    ("cga_warm", &CGA_WARM),
    ("ega", &EGA),
    ("mac", &MAC),
    ("sepia", &SEPIA),
    ("vaporwave", &VAPORWAVE),
    ("cyberpunk", &CYBERPUNK),
    ("nord", &NORD),
    ("gruvbox", &GRUVBOX),
];

/// A named, non-empty, ordered list of output colors.
///
/// Order only matters as a tie-break: when two entries are equally close to a
/// color, the earlier one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    name: Cow<'static, str>,
    colors: Cow<'static, [Rgb]>,
}

impl Palette {
    /// Strict lookup of a built-in palette.
    pub fn builtin(name: &str) -> Option<Palette> {
        BUILTIN_PALETTES
            .iter()
            .find(|(registered, _)| *registered == name)
            .map(|&(registered, colors)| Palette {
                name: Cow::Borrowed(registered),
                colors: Cow::Borrowed(colors),
            })
    }

    /// Resolve a palette by name, falling back to [DEFAULT_PALETTE] when
    /// nothing is registered under `name`.
    pub fn resolve(name: &str) -> Palette {
        Palette::builtin(name).unwrap_or_else(|| {
            warn!(requested = name, fallback = DEFAULT_PALETTE, "Unknown palette");
            Palette::default()
        })
    }

    /// Palette from user supplied colors. Duplicates are kept as given.
    pub fn custom(name: impl Into<String>, colors: Vec<Rgb>) -> Result<Palette> {
        let name = name.into();
        if colors.is_empty() {
            return Err(DitherError::EmptyPalette(name));
        }
        if colors.iter().duplicates().next().is_some() {
            warn!(palette = name.as_str(), "Palette contains duplicate colors");
        }
        Ok(Palette {
            name: Cow::Owned(name),
            colors: Cow::Owned(colors),
        })
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        BUILTIN_PALETTES.iter().map(|(name, _)| *name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false, palettes are never empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn contains(&self, color: Rgb) -> bool {
        self.colors.contains(&color)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            name: Cow::Borrowed(DEFAULT_PALETTE),
            colors: Cow::Borrowed(&BW),
        }
    }
}
