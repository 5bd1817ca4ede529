//! Pixelation helpers around the dither scan.
//!
//! Images are shrunk by `pixel_size` with area averaging before dithering and
//! blown back up with nearest-neighbour sampling for display, which keeps the
//! block edges crisp.

use image::{RgbaImage, imageops};
use tracing::debug;

use crate::error::{DitherError, Result};

/// `(max(1, floor(width / pixel_size)), max(1, floor(height / pixel_size)))`.
pub fn working_dimensions(width: u32, height: u32, pixel_size: f32) -> Result<(u32, u32)> {
    if !pixel_size.is_finite() || pixel_size < 1.0 {
        return Err(DitherError::InvalidPixelSize(pixel_size));
    }
    let scale = |side: u32| ((side as f64 / pixel_size as f64).floor() as u32).max(1);
    Ok((scale(width), scale(height)))
}

/// Area-average `image` down to its working dimensions.
///
/// A `pixel_size` of 1 returns an unchanged copy.
pub fn downsample(image: &RgbaImage, pixel_size: f32) -> Result<RgbaImage> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(DitherError::EmptyBuffer { width, height });
    }

    let (w, h) = working_dimensions(width, height, pixel_size)?;
    if (w, h) == (width, height) {
        return Ok(image.clone());
    }

    debug!(width, height, w, h, pixel_size, "Downsampling");
    Ok(imageops::thumbnail(image, w, h))
}

/// Nearest-neighbour resize, no smoothing.
pub fn upscale_nearest(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if image.dimensions() == (width, height) {
        return image.clone();
    }
    imageops::resize(image, width, height, imageops::FilterType::Nearest)
}
