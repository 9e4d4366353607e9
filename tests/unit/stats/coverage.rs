//! Tests for coverage ratios and resolution retention

#[cfg(test)]
mod tests {
    use pixelmix::canvas::image::Image;
    use pixelmix::pattern::mask::{self, PatternKind};
    use pixelmix::stats::coverage::compute_stats;

    fn solid_rgb(width: usize, height: usize) -> Image {
        let Ok(img) = Image::solid(width, height, &[0, 0, 0]) else {
            unreachable!("valid dimensions");
        };
        img
    }

    // Tests coverage is exactly half when both dimensions are multiples of 2b
    #[test]
    fn test_exact_half_coverage_on_aligned_canvas() {
        let Ok(selection) = mask::generate(12, 8, PatternKind::Checkerboard, 2) else {
            unreachable!("valid parameters");
        };
        let final_image = solid_rgb(12, 8);

        let report = compute_stats(&selection, (12, 8), (12, 8), &final_image);
        assert!((report.pixel_ratio_a - 0.5).abs() < f64::EPSILON);
        assert!((report.pixel_ratio_b() - 0.5).abs() < f64::EPSILON);
    }

    // Tests coverage is counted exactly when boundary truncation skews it
    #[test]
    fn test_truncated_coverage_is_counted_not_assumed() {
        let Ok(selection) = mask::generate(10, 10, PatternKind::Checkerboard, 3) else {
            unreachable!("valid parameters");
        };

        // Count from the predicate directly: 10 is not a multiple of 6
        let mut expected = 0usize;
        for y in 0..10 {
            for x in 0..10 {
                if (x / 3 + y / 3) % 2 == 0 {
                    expected += 1;
                }
            }
        }
        assert_ne!(expected * 2, 100, "canvas chosen to break the 50:50 split");

        let final_image = solid_rgb(10, 10);
        let report = compute_stats(&selection, (10, 10), (10, 10), &final_image);
        let expected_ratio = expected as f64 / 100.0;
        assert!((report.pixel_ratio_a - expected_ratio).abs() < f64::EPSILON);
    }

    // Tests retention is measured against the first source only
    #[test]
    fn test_retention_uses_first_source_baseline() {
        let Ok(selection) = mask::generate(400, 300, PatternKind::Checkerboard, 1) else {
            unreachable!("valid parameters");
        };
        let final_image = solid_rgb(400, 300);

        let report = compute_stats(&selection, (800, 600), (400, 300), &final_image);
        assert!((report.resolution_retention - 25.0).abs() < 1e-9);
        assert_eq!(report.original_a, (800, 600));
        assert_eq!(report.original_b, (400, 300));
        assert_eq!(report.final_size, (400, 300));

        // Swapping the sources changes the figure: retention is asymmetric
        let swapped = compute_stats(&selection, (400, 300), (800, 600), &final_image);
        assert!((swapped.resolution_retention - 100.0).abs() < 1e-9);
    }

    // Tests retention exceeds 100 when upscaling past the first source
    #[test]
    fn test_retention_exceeds_hundred_on_upscale() {
        let Ok(selection) = mask::generate(8, 8, PatternKind::Checkerboard, 1) else {
            unreachable!("valid parameters");
        };
        let final_image = solid_rgb(8, 8);

        let report = compute_stats(&selection, (4, 4), (8, 8), &final_image);
        assert!((report.resolution_retention - 400.0).abs() < 1e-9);
    }

    // Tests a uniform mask reports full coverage for the first source
    #[test]
    fn test_uniform_mask_coverage() {
        let Ok(selection) = mask::generate(4, 4, PatternKind::Checkerboard, 16) else {
            unreachable!("valid parameters");
        };
        let final_image = solid_rgb(4, 4);

        let report = compute_stats(&selection, (4, 4), (4, 4), &final_image);
        assert!((report.pixel_ratio_a - 1.0).abs() < f64::EPSILON);
        assert!(report.pixel_ratio_b().abs() < f64::EPSILON);
    }
}
