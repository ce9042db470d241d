//! Tests for cell pitch detection along the fixed scan lines

#[cfg(test)]
mod tests {
    use crate::synthetic::{PAPER, SyntheticPuzzle};
    use nonoscan::ConversionError;
    use nonoscan::analysis::geometry::{GridGeometry, detect_geometry, detect_pitch};
    use nonoscan::io::configuration::DetectionConfig;
    use nonoscan::spatial::{Axis, IntensityImage};

    // Tests pitch detection on plain grids without margins
    // Verified by dropping the separator pixel from the run length
    #[test]
    fn test_detects_pitch_without_margin() {
        let config = DetectionConfig::default();
        for pitch in [3, 5, 8, 10, 12, 20] {
            let image = SyntheticPuzzle::square(pitch, 0, 6, 6).render();
            let geometry = detect_geometry(&image, &config).unwrap();
            assert_eq!(geometry.pitch_x(), pitch, "horizontal pitch for {pitch}");
            assert_eq!(geometry.pitch_y(), pitch, "vertical pitch for {pitch}");
        }
    }

    // Tests that clue margins do not disturb pitch detection
    // Verified by counting the margin colour as ink
    #[test]
    fn test_detects_pitch_through_margin() {
        let image = SyntheticPuzzle::square(9, 2, 5, 5).render();
        let geometry = detect_geometry(&image, &DetectionConfig::default()).unwrap();

        assert_eq!(geometry, GridGeometry::new(9, 9).unwrap());
        assert!(geometry.is_square());
    }

    // Tests independent measurement of both axes
    // Verified by reusing the horizontal pitch for the vertical axis
    #[test]
    fn test_measures_axes_independently() {
        let puzzle = SyntheticPuzzle {
            pitch_x: 8,
            pitch_y: 11,
            ..SyntheticPuzzle::square(8, 1, 4, 4)
        };
        let geometry = detect_geometry(&puzzle.render(), &DetectionConfig::default()).unwrap();

        assert_eq!(geometry.pitch(Axis::Horizontal), 8);
        assert_eq!(geometry.pitch(Axis::Vertical), 11);
        assert!(!geometry.is_square());
        assert!(matches!(
            geometry.ensure_square(),
            Err(ConversionError::AsymmetricGrid {
                horizontal: 8,
                vertical: 11
            })
        ));
    }

    // Tests failure when no transition occurs inside the scan ceiling
    // Verified by returning the run length at the end of the scan
    #[test]
    fn test_blank_image_fails_cleanly() {
        let image = IntensityImage::from_fn(80, 80, |_, _| PAPER);
        let result = detect_pitch(&image, Axis::Horizontal, &DetectionConfig::default());

        assert!(matches!(
            result,
            Err(ConversionError::GeometryDetection {
                axis: Axis::Horizontal,
                scan_limit: 50
            })
        ));
    }

    // Tests that cells wider than the ceiling are unsupported
    // Verified by scanning past the configured ceiling
    #[test]
    fn test_pitch_beyond_ceiling_fails() {
        let image = SyntheticPuzzle::square(60, 0, 2, 2).render();
        let result = detect_geometry(&image, &DetectionConfig::default());

        assert!(matches!(
            result,
            Err(ConversionError::GeometryDetection { .. })
        ));
    }

    // Tests images smaller than the scan origin
    // Verified by treating out-of-bounds pixels as background
    #[test]
    fn test_tiny_image_fails_cleanly() {
        let image = IntensityImage::from_fn(5, 5, |x, _| if x == 2 { 0 } else { PAPER });
        let result = detect_geometry(&image, &DetectionConfig::default());

        assert!(matches!(
            result,
            Err(ConversionError::GeometryDetection {
                axis: Axis::Horizontal,
                ..
            })
        ));
    }

    // Tests that pixels equal to the threshold neither extend nor end a run
    // Verified by using >= for the run comparison
    #[test]
    fn test_threshold_pixels_are_neutral() {
        let config = DetectionConfig::default();
        let threshold = config.color_threshold;
        // bright 1..=4, neutral 5..=6, dark at 7
        let image = IntensityImage::from_fn(20, 20, |x, _| match x {
            1..=4 => PAPER,
            5 | 6 => threshold,
            _ => 0,
        });

        assert_eq!(detect_pitch(&image, Axis::Horizontal, &config).unwrap(), 5);
    }

    // Tests that zero pitches are rejected at construction
    // Verified by removing the positivity checks
    #[test]
    fn test_geometry_rejects_zero_pitch() {
        assert!(GridGeometry::new(0, 8).is_err());
        assert!(GridGeometry::new(8, 0).is_err());
        assert!(GridGeometry::new(1, 1).is_ok());
    }
}
