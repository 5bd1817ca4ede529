use multiversion::multiversion;

use crate::{color_palette::Palette, utils::pixel::Rgb};

/// Closest palette entry by squared euclidean RGB distance.
///
/// First-match wins: an entry only replaces the current best when it is
/// strictly closer, so equidistant entries resolve to the earliest one.
#[inline]
pub fn closest(observed: Rgb, palette: &Palette) -> Rgb {
    closest_in(observed, palette.colors())
}

/// Index of the closest entry in `colors`, `None` when `colors` is empty.
pub fn closest_index(observed: Rgb, colors: &[Rgb]) -> Option<usize> {
    let mut best = None;
    let mut min_dist = u32::MAX;
    for (idx, color) in colors.iter().enumerate() {
        let dist = observed.distance_sq(*color);
        if dist < min_dist {
            min_dist = dist;
            best = Some(idx);
        }
    }
    best
}

// the largest possible distance (3 * 255^2) is below u32::MAX, so the first
// color always replaces the initial guess
#[multiversion(targets("x86_64+avx512f", "x86_64+avx2", "x86_64+sse2"))]
fn closest_in(observed: Rgb, colors: &[Rgb]) -> Rgb {
    let mut closest = observed;
    let mut min_dist = u32::MAX;
    for &color in colors {
        let dist = observed.distance_sq(color);
        if dist < min_dist {
            min_dist = dist;
            closest = color;
        }
    }
    closest
}
