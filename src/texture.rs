use image::RgbaImage;

use crate::{
    error::{DitherError, Result},
    utils::pixel::{Rgb, store_channel},
};

pub type TextureShape = (usize, usize);

/// Channels per pixel (R, G, B, A).
pub const PLANES: usize = 4;

/// Row-major RGBA8 raster with owned buffer.
///
/// Always at least 1x1. The dither engine takes it by value, mutates it in
/// place and hands it back, so a buffer is never shared while a scan runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

impl AsRef<[u8]> for PixelBuffer {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.buffer
    }
}

impl AsMut<[u8]> for PixelBuffer {
    #[inline]
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }
}

impl PixelBuffer {
    /// Transparent black buffer of the given size.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = Self::byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            buffer: vec![0; len],
        })
    }

    /// Take ownership of raw RGBA8 data.
    pub fn from_raw(width: u32, height: u32, buffer: Vec<u8>) -> Result<Self> {
        let expected = Self::byte_len(width, height)?;
        if buffer.len() != expected {
            return Err(DitherError::BufferSizeMismatch {
                expected,
                actual: buffer.len(),
            });
        }
        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    /// Build a buffer from RGB triples, alpha set to 255.
    pub fn from_rgb(width: u32, height: u32, pixels: &[Rgb]) -> Result<Self> {
        let buffer = pixels
            .iter()
            .flat_map(|p| [p.r, p.g, p.b, u8::MAX])
            .collect::<Vec<u8>>();
        Self::from_raw(width, height, buffer)
    }

    /// Solid color buffer, mostly useful in tests and benches.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self> {
        let mut texture = Self::new(width, height)?;
        texture
            .buffer
            .chunks_exact_mut(PLANES)
            .for_each(|pixel| pixel.copy_from_slice(&[color.r, color.g, color.b, u8::MAX]));
        Ok(texture)
    }

    pub fn from_rgba_image(image: RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        Self::from_raw(width, height, image.into_raw())
    }

    pub fn into_rgba_image(self) -> RgbaImage {
        RgbaImage::from_raw(self.width, self.height, self.buffer)
            .expect("PixelBuffer length always matches its dimensions")
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.buffer
    }

    fn byte_len(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(DitherError::EmptyBuffer { width, height });
        }
        Ok(width as usize * height as usize * PLANES)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn shape(&self) -> TextureShape {
        (self.width as usize, self.height as usize)
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.buffer.len() / PLANES
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width as usize + x) * PLANES
    }

    #[inline]
    pub fn rgb(&self, x: usize, y: usize) -> Rgb {
        let i = self.offset(x, y);
        Rgb::from_rgba(&self.buffer[i..i + PLANES])
    }

    #[inline]
    pub fn alpha(&self, x: usize, y: usize) -> u8 {
        self.buffer[self.offset(x, y) + 3]
    }

    /// Write a color and force the pixel opaque.
    #[inline]
    pub fn set_opaque(&mut self, x: usize, y: usize, color: Rgb) {
        let i = self.offset(x, y);
        self.buffer[i..i + PLANES].copy_from_slice(&[color.r, color.g, color.b, u8::MAX]);
    }

    /// Add `error * factor` to the RGB channels of `(x, y)`.
    ///
    /// Coordinates outside the buffer are ignored, the error is dropped.
    #[inline]
    pub fn diffuse(&mut self, x: isize, y: isize, error: [i32; 3], factor: f64) {
        if x < 0 || y < 0 || x >= self.width as isize || y >= self.height as isize {
            return;
        }
        let i = self.offset(x as usize, y as usize);
        for (channel, err) in self.buffer[i..i + 3].iter_mut().zip(error) {
            *channel = store_channel(*channel as f64 + err as f64 * factor);
        }
    }

    /// Iterate RGB triples in row-major order.
    pub fn colors(&self) -> impl ExactSizeIterator<Item = Rgb> + '_ {
        self.buffer.chunks_exact(PLANES).map(Rgb::from_rgba)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_area_is_rejected() {
        assert!(matches!(
            PixelBuffer::new(0, 4),
            Err(DitherError::EmptyBuffer {
                width: 0,
                height: 4
            })
        ));
        assert!(matches!(
            PixelBuffer::from_raw(3, 0, vec![]),
            Err(DitherError::EmptyBuffer { .. })
        ));
    }

    #[test]
    fn test_raw_length_must_match() {
        let err = PixelBuffer::from_raw(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            DitherError::BufferSizeMismatch {
                expected: 16,
                actual: 15
            }
        ));
    }

    #[test]
    fn test_set_opaque_forces_alpha() {
        let mut texture = PixelBuffer::new(2, 1).unwrap();
        assert_eq!(texture.alpha(1, 0), 0);
        texture.set_opaque(1, 0, Rgb::new(1, 2, 3));
        assert_eq!(texture.rgb(1, 0), Rgb::new(1, 2, 3));
        assert_eq!(texture.alpha(1, 0), 255);
        assert_eq!(texture.as_ref(), &[0, 0, 0, 0, 1, 2, 3, 255]);
    }

    #[test]
    fn test_diffuse_clamps() {
        let mut texture = PixelBuffer::filled(1, 1, Rgb::new(250, 5, 128)).unwrap();
        texture.diffuse(0, 0, [100, -100, 0], 0.5);
        assert_eq!(texture.rgb(0, 0), Rgb::new(255, 0, 128));
    }

    #[test]
    fn test_diffuse_out_of_bounds_is_dropped() {
        let mut texture = PixelBuffer::filled(2, 2, Rgb::new(10, 10, 10)).unwrap();
        let before = texture.clone();
        texture.diffuse(-1, 0, [50, 50, 50], 1.0);
        texture.diffuse(2, 1, [50, 50, 50], 1.0);
        texture.diffuse(0, 2, [50, 50, 50], 1.0);
        assert_eq!(texture, before);
    }

    #[test]
    fn test_rgba_image_roundtrip_keeps_layout() {
        let texture =
            PixelBuffer::from_rgb(2, 1, &[Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)]).unwrap();
        let image = texture.clone().into_rgba_image();
        assert_eq!(image.get_pixel(1, 0).0, [4, 5, 6, 255]);
        assert_eq!(PixelBuffer::from_rgba_image(image).unwrap(), texture);
    }
}
