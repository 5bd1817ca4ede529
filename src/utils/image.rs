use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};

/// Decode an image file, guessing the format from its content.
pub fn read_image<P: AsRef<Path>>(path: P) -> crate::error::Result<DynamicImage> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(image)
}

/// Encode an image, picking the format from the file extension.
///
/// Unknown or missing extensions are written as PNG.
pub fn write_image<P: AsRef<Path>>(image: &DynamicImage, path: P) -> crate::error::Result {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    // JPEG cannot carry alpha, output is always opaque anyway
    let image = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8()),
        _ => image.clone(),
    };
    image.save_with_format(path, format)?;
    Ok(())
}
