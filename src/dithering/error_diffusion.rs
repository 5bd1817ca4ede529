use tracing::trace;

use crate::{
    color_palette::Palette, dithering::quantize::closest, texture::PixelBuffer,
    utils::iterator::GridIterator,
};

pub mod matrices;

/// Share of the quantization error sent to a neighbour at `(x + dx, y + dy)`,
/// expressed as `weight / divisor` of the owning kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tap {
    pub dx: isize,
    pub dy: isize,
    pub weight: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorKernel {
    pub divisor: u32,
    pub taps: &'static [Tap],
}

impl ErrorKernel {
    /// Sum of all tap weights. Equal to `divisor` unless the kernel
    /// deliberately drops part of the error.
    pub fn weight_sum(&self) -> u32 {
        self.taps.iter().map(|tap| tap.weight).sum()
    }

    /// Rows below the current one that receive error.
    pub fn max_dy(&self) -> isize {
        self.taps.iter().map(|tap| tap.dy).max().unwrap_or(0)
    }

    /// Offsets paired with their precomputed `weight / divisor` factor.
    pub fn factors(&self) -> Vec<(isize, isize, f64)> {
        self.taps
            .iter()
            .map(|tap| (tap.dx, tap.dy, tap.weight as f64 / self.divisor as f64))
            .collect()
    }
}

/// Quantize `buffer` in place with a single row-major scan.
///
/// Every pixel is replaced by its closest palette entry (alpha forced to 255).
/// With a kernel, the signed difference between the value read and the color
/// written is spread over not-yet-visited neighbours before moving on, so
/// later pixels observe earlier error. Taps falling outside the buffer are
/// skipped and their share of the error is lost.
pub(crate) fn scan(buffer: &mut PixelBuffer, palette: &Palette, kernel: Option<&ErrorKernel>) {
    let factors = kernel.map(ErrorKernel::factors).unwrap_or_default();
    let (width, height) = buffer.shape();

    for (x, y, _) in GridIterator::new(width, height) {
        let old = buffer.rgb(x, y);
        let new = closest(old, palette);
        buffer.set_opaque(x, y, new);

        let error = old.error_to(new);
        if factors.is_empty() || error == [0; 3] {
            continue;
        }

        for &(dx, dy, factor) in &factors {
            buffer.diffuse(x as isize + dx, y as isize + dy, error, factor);
        }
    }

    trace!(width, height, taps = factors.len(), "scan finished");
}
