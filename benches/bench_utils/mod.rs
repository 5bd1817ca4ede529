use pixeldither::{texture::PixelBuffer, utils::pixel::Rgb};
use rand::Rng;

pub const BENCH_IMAGE_SIZE: u32 = 300;

pub fn rand_rgb(rng: &mut rand::rngs::ThreadRng) -> Rgb {
    Rgb::new(rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>())
}

pub fn gen_random_image(size: u32) -> PixelBuffer {
    let mut rng = rand::rng();
    let pixels: Vec<Rgb> = (0..size * size).map(|_| rand_rgb(&mut rng)).collect();
    PixelBuffer::from_rgb(size, size, &pixels).unwrap()
}

pub fn random_colors(size: usize) -> Vec<Rgb> {
    let mut rng = rand::rng();
    (0..size).map(|_| rand_rgb(&mut rng)).collect()
}
