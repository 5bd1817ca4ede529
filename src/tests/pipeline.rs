#[cfg(test)]
mod pipeline_tests {
    use image::{DynamicImage, Rgba, RgbaImage};

    use crate::{
        config::ProcessConfig,
        dithering::DitheringType,
        run,
        tests::utils::gen_random_image,
        utils::{
            image::{read_image, write_image},
            pixel::Rgb,
        },
    };

    fn config(pixel_size: f32, upscale: bool) -> ProcessConfig {
        ProcessConfig {
            algorithm: DitheringType::Atkinson,
            palette: String::from("cga"),
            pixel_size,
            upscale,
            ..ProcessConfig::default()
        }
    }

    #[test]
    fn test_run_upscales_to_original_size() {
        let input = DynamicImage::ImageRgba8(gen_random_image(8, 6, 21).into_rgba_image());
        let output = run(&config(2.0, true), input).unwrap().to_rgba8();
        assert_eq!(output.dimensions(), (8, 6));

        // every 2x2 block is a single working pixel
        for by in 0..3 {
            for bx in 0..4 {
                let block = output.get_pixel(bx * 2, by * 2);
                for (dx, dy) in [(1, 0), (0, 1), (1, 1)] {
                    assert_eq!(output.get_pixel(bx * 2 + dx, by * 2 + dy), block);
                }
            }
        }
    }

    #[test]
    fn test_run_without_upscale_returns_working_size() {
        let input = DynamicImage::ImageRgba8(gen_random_image(8, 6, 22).into_rgba_image());
        let output = run(&config(2.0, false), input).unwrap();
        assert_eq!((output.width(), output.height()), (4, 3));
    }

    #[test]
    fn test_run_with_custom_colors() {
        let red = Rgb::new(255, 0, 0);
        let blue = Rgb::new(0, 0, 255);
        let config = ProcessConfig {
            algorithm: DitheringType::None,
            palette: String::from("rb"),
            colors: Some(vec![red, blue]),
            ..ProcessConfig::default()
        };
        let input = RgbaImage::from_fn(2, 1, |x, _| match x {
            0 => Rgba([200, 30, 30, 10]),
            _ => Rgba([30, 30, 200, 255]),
        });
        let output = run(&config, DynamicImage::ImageRgba8(input)).unwrap().to_rgba8();
        assert_eq!(output.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(output.get_pixel(1, 0).0, [0, 0, 255, 255]);
    }

    #[test]
    fn test_png_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let input = DynamicImage::ImageRgba8(gen_random_image(5, 4, 23).into_rgba_image());
        let output = run(&config(1.0, true), input).unwrap();

        write_image(&output, &path).unwrap();
        let decoded = read_image(&path).unwrap();
        assert_eq!(decoded.to_rgba8(), output.to_rgba8());
    }

    #[test]
    fn test_unknown_extension_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.dithered");
        let output = DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255])));
        write_image(&output, &path).unwrap();
        assert_eq!(read_image(&path).unwrap().to_rgba8(), output.to_rgba8());
    }
}
