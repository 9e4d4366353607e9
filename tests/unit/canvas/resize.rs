//! Tests for resize policy resolution and source resampling

#[cfg(test)]
mod tests {
    use pixelmix::MixError;
    use pixelmix::canvas::image::{ChannelLayout, Image};
    use pixelmix::canvas::resize::{ResizePolicy, resize_pair, resolve_dimensions};

    fn solid_rgb(width: usize, height: usize, color: [u8; 3]) -> Image {
        let Ok(img) = Image::solid(width, height, &color) else {
            unreachable!("valid dimensions and color");
        };
        img
    }

    // Tests policy resolution on the 800x600 / 400x300 reference pair
    #[test]
    fn test_policy_resolution() {
        let large = solid_rgb(800, 600, [0, 0, 0]);
        let small = solid_rgb(400, 300, [0, 0, 0]);

        assert_eq!(
            resolve_dimensions(&large, &small, ResizePolicy::FitSmaller).ok(),
            Some((400, 300))
        );
        assert_eq!(
            resolve_dimensions(&large, &small, ResizePolicy::FitLarger).ok(),
            Some((800, 600))
        );
        assert_eq!(
            resolve_dimensions(
                &large,
                &small,
                ResizePolicy::Custom {
                    width: 500,
                    height: 500
                }
            )
            .ok(),
            Some((500, 500))
        );
    }

    // Tests per-axis resolution when neither source dominates both axes
    #[test]
    fn test_policy_resolution_is_per_axis() {
        let wide = solid_rgb(100, 20, [0, 0, 0]);
        let tall = solid_rgb(30, 80, [0, 0, 0]);

        assert_eq!(
            resolve_dimensions(&wide, &tall, ResizePolicy::FitSmaller).ok(),
            Some((30, 20))
        );
        assert_eq!(
            resolve_dimensions(&wide, &tall, ResizePolicy::FitLarger).ok(),
            Some((100, 80))
        );
    }

    // Tests custom dimensions of zero are rejected
    #[test]
    fn test_zero_custom_dimensions_are_rejected() {
        let img = solid_rgb(4, 4, [0, 0, 0]);
        let result = resolve_dimensions(
            &img,
            &img.clone(),
            ResizePolicy::Custom {
                width: 0,
                height: 500,
            },
        );
        assert!(matches!(result, Err(MixError::InvalidConfig { .. })));
    }

    // Tests both outputs land on the resolved canvas with matching layouts
    #[test]
    fn test_resize_pair_output_contract() {
        let a = solid_rgb(8, 6, [200, 0, 0]);
        let b = solid_rgb(4, 4, [0, 0, 200]);

        let Ok(pair) = resize_pair(&a, &b, ResizePolicy::FitSmaller) else {
            unreachable!("valid inputs");
        };
        assert_eq!((pair.width, pair.height), (4, 4));
        assert_eq!(pair.a.dimensions(), (4, 4));
        assert_eq!(pair.b.dimensions(), (4, 4));
        assert_eq!(pair.a.layout(), pair.b.layout());

        // The already-fitting source is untouched
        assert_eq!(pair.b, b);
    }

    // Tests resampling a uniform source stays uniform within rounding
    #[test]
    fn test_resample_preserves_uniform_color() {
        let a = solid_rgb(16, 16, [180, 60, 20]);
        let b = solid_rgb(4, 4, [0, 0, 0]);

        let Ok(pair) = resize_pair(&a, &b, ResizePolicy::FitSmaller) else {
            unreachable!("valid inputs");
        };
        for y in 0..4 {
            for x in 0..4 {
                for (c, expected) in [180u8, 60, 20].into_iter().enumerate() {
                    let value = pair.a.sample(x, y, c);
                    assert!(
                        value.abs_diff(expected) <= 1,
                        "channel {c} at ({x}, {y}) drifted: {value} vs {expected}"
                    );
                }
            }
        }
    }

    // Tests mixed channel layouts are normalized to RGB before resampling
    #[test]
    fn test_mixed_layouts_normalize_to_rgb() {
        let rgb = solid_rgb(4, 4, [10, 20, 30]);
        let Ok(gray) = Image::solid(8, 8, &[100]) else {
            unreachable!("valid grayscale color");
        };

        let Ok(pair) = resize_pair(&rgb, &gray, ResizePolicy::FitSmaller) else {
            unreachable!("valid inputs");
        };
        assert_eq!(pair.a.layout(), ChannelLayout::Rgb);
        assert_eq!(pair.b.layout(), ChannelLayout::Rgb);
        assert_eq!(pair.b.dimensions(), (4, 4));
    }

    // Tests upscaling with a custom canvas, independent of source sizes
    #[test]
    fn test_custom_canvas_upscales() {
        let a = solid_rgb(4, 4, [255, 255, 255]);
        let b = solid_rgb(2, 2, [0, 0, 0]);

        let Ok(pair) = resize_pair(
            &a,
            &b,
            ResizePolicy::Custom {
                width: 10,
                height: 5,
            },
        ) else {
            unreachable!("valid inputs");
        };
        assert_eq!((pair.width, pair.height), (10, 5));
        assert_eq!(pair.a.dimensions(), (10, 5));
        assert_eq!(pair.b.dimensions(), (10, 5));
    }
}
