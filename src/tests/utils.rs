use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{texture::PixelBuffer, utils::pixel::Rgb};

pub const TEST_IMAGE_SIZE: usize = 64;

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn rand_rgb(rng: &mut StdRng) -> Rgb {
    Rgb::new(rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>())
}

/// Random opaque-ish image; alpha is random too so tests can check it gets forced.
pub fn gen_random_image(width: u32, height: u32, seed: u64) -> PixelBuffer {
    let mut rng = seeded_rng(seed);
    let data = (0..width as usize * height as usize * 4)
        .map(|_| rng.random::<u8>())
        .collect::<Vec<u8>>();
    PixelBuffer::from_raw(width, height, data).expect("valid test dimensions")
}

/// Horizontal gray ramp from black to white.
pub fn gen_gradient(width: u32, height: u32) -> PixelBuffer {
    let pixels = (0..height)
        .flat_map(|_| {
            (0..width).map(move |x| {
                let v = (x * 255 / (width - 1).max(1)) as u8;
                Rgb::new(v, v, v)
            })
        })
        .collect::<Vec<Rgb>>();
    PixelBuffer::from_rgb(width, height, &pixels).expect("valid test dimensions")
}

pub fn random_colors(size: usize, seed: u64) -> Vec<Rgb> {
    let mut rng = seeded_rng(seed);
    (0..size).map(|_| rand_rgb(&mut rng)).collect()
}
