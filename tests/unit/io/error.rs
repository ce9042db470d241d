//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use nonoscan::ConversionError;
    use nonoscan::io::error::{WithPath, invalid_parameter, invalid_source};
    use nonoscan::spatial::Axis;
    use std::error::Error;
    use std::path::{Path, PathBuf};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConversionError::FileSystem {
            path: "/tmp/out/cat.nonogram".into(),
            operation: "write level file",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(
            ConversionError::AsymmetricGrid {
                horizontal: 8,
                vertical: 9
            }
            .source()
            .is_none()
        );
    }

    // Tests ImageOpen error with decoding source
    // Verified by excluding source error from message
    #[test]
    fn test_image_open_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = ConversionError::ImageOpen {
            path: PathBuf::from("/restricted/cat.gif"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/cat.gif"));
        assert!(message.contains("access denied"), "{message}");
        assert!(error.source().is_some());
    }

    // Tests detection error messages carry the measured values
    // Verified by omitting fields from the messages
    #[test]
    fn test_detection_error_messages() {
        let geometry = ConversionError::GeometryDetection {
            axis: Axis::Vertical,
            scan_limit: 50,
        }
        .to_string();
        assert!(geometry.contains("vertical"));
        assert!(geometry.contains("50"));

        let asymmetric = ConversionError::AsymmetricGrid {
            horizontal: 8,
            vertical: 10,
        }
        .to_string();
        assert!(asymmetric.contains("8px"));
        assert!(asymmetric.contains("10px"));

        let margin = ConversionError::MarginInference {
            axis: Axis::Horizontal,
            cells: 4,
            margin: 4,
        }
        .to_string();
        assert!(margin.contains("horizontal"));
        assert!(margin.contains('4'));

        let oversized = ConversionError::OversizedPuzzle {
            width: 60,
            height: 12,
            limit: 50,
        }
        .to_string();
        assert!(oversized.contains("60x12"));
        assert!(oversized.contains("50x50"));
    }

    // Tests that only asymmetric grids are recoverable
    // Verified by marking every error recoverable
    #[test]
    fn test_recoverable_errors() {
        assert!(
            ConversionError::AsymmetricGrid {
                horizontal: 8,
                vertical: 9
            }
            .is_recoverable()
        );
        assert!(!invalid_source(&"no rows").is_recoverable());
        assert!(
            !ConversionError::OversizedPuzzle {
                width: 51,
                height: 51,
                limit: 50
            }
            .is_recoverable()
        );
    }

    // Tests InvalidParameter helper contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let message = invalid_parameter("threshold", &0, &"must be positive").to_string();

        assert!(message.contains("threshold"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be positive"));
    }

    // Tests that with_path fills unknown paths but keeps known ones
    // Verified by overwriting every path
    #[test]
    fn test_with_path_context() {
        let unknown: Result<(), image::ImageError> = Err(image::ImageError::IoError(
            std::io::Error::other("truncated"),
        ));
        match unknown.with_path(Path::new("in/dog.gif")) {
            Err(ConversionError::ImageOpen { path, .. }) => {
                assert_eq!(path, PathBuf::from("in/dog.gif"));
            }
            other => unreachable!("Expected ImageOpen, got {other:?}"),
        }

        let known: Result<(), ConversionError> = Err(ConversionError::FileSystem {
            path: PathBuf::from("out"),
            operation: "create directory",
            source: std::io::Error::other("denied"),
        });
        match known.with_path(Path::new("in/dog.gif")) {
            Err(ConversionError::FileSystem { path, .. }) => {
                assert_eq!(path, PathBuf::from("out"));
            }
            other => unreachable!("Expected FileSystem, got {other:?}"),
        }
    }
}
