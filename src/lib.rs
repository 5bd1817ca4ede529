use image::{DynamicImage, RgbaImage};
use tracing::info;

use crate::{
    color_palette::Palette, config::ProcessConfig, dithering::DitheringType, error::Result,
    texture::PixelBuffer,
};

pub mod color_palette;
pub mod config;
pub mod dithering;
pub mod error;
pub mod resample;
pub mod texture;
pub mod utils;


/// Pixelate and quantize `image`.
///
/// The returned buffer has the working (downsampled) dimensions; scaling it
/// back up for display is left to the caller, see [resample::upscale_nearest].
pub fn process(
    image: &RgbaImage,
    algorithm: DitheringType,
    palette: &Palette,
    pixel_size: f32,
) -> Result<PixelBuffer> {
    let working = resample::downsample(image, pixel_size)?;
    let buffer = PixelBuffer::from_rgba_image(working)?;
    Ok(algorithm.dither(buffer, palette))
}

/// Full pipeline driven by a [ProcessConfig].
///
/// With `config.upscale` the result is blown back up to the input size with
/// nearest-neighbour sampling, otherwise the working-size image is returned.
pub fn run(config: &ProcessConfig, original_img: DynamicImage) -> Result<DynamicImage> {
    let palette = config.resolve_palette()?;
    let image = original_img.to_rgba8();
    let (width, height) = image.dimensions();

    info!(
        width,
        height,
        algorithm = config.algorithm.name(),
        palette = palette.name(),
        pixel_size = config.pixel_size,
        "Processing image"
    );

    let dithered = process(&image, config.algorithm, &palette, config.pixel_size)?.into_rgba_image();
    let output = match config.upscale {
        true => resample::upscale_nearest(&dithered, width, height),
        false => dithered,
    };

    Ok(DynamicImage::ImageRgba8(output))
}

pub mod prelude {
    pub use crate::color_palette::Palette;
    pub use crate::config::ProcessConfig;
    pub use crate::dithering::{DitheringType, dither_batch};
    pub use crate::error::{DitherError, Result};
    pub use crate::texture::PixelBuffer;
    pub use crate::utils::prelude::*;
    pub use crate::{process, run};
}
