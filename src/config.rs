//! Configuration constants and validation functions for the extractor.

use std::path::Path;

use crate::error::{ExtractorError, Result};

/// Tag name of the drawable-path element kind.
pub const PATH_TAG: &str = "path";

/// Attribute naming the region a path element represents.
pub const ID_ATTRIBUTE: &str = "id";

/// Attribute carrying the vector drawing commands of a path element.
pub const GEOMETRY_ATTRIBUTE: &str = "d";

/// Default output file name, resolved against the current directory.
pub const DEFAULT_OUTPUT_FILE: &str = "locations.json";

/// Indentation unit for pretty-printed JSON output.
pub const JSON_INDENT: &[u8] = b"    ";

/// Validate that the input path exists and is a regular file.
///
/// # Arguments
/// * `path` - Input file path to validate
///
/// # Returns
/// * `Ok(())` if the path points to an existing regular file
/// * `Err(ExtractorError::Io)` with `NotFound` or `InvalidInput` kind otherwise
pub fn validate_input_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ExtractorError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Input file does not exist: {}", path.display()),
        )));
    }
    if !path.is_file() {
        return Err(ExtractorError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Input path is not a file: {}", path.display()),
        )));
    }
    Ok(())
}

/// Validate that the output path is writable in principle.
///
/// Checks that an explicitly given parent directory exists and is a
/// directory, and that the output path itself is not a directory. The file
/// does not have to exist; it is created (atomically) by the writer.
///
/// # Arguments
/// * `path` - Output file path to validate
///
/// # Returns
/// * `Ok(())` if the target location is usable
/// * `Err(ExtractorError::Io)` with `NotFound` or `InvalidInput` kind otherwise
pub fn validate_output_target(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            if !parent.exists() {
                return Err(ExtractorError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("Output directory does not exist: {}", parent.display()),
                )));
            }
            if !parent.is_dir() {
                return Err(ExtractorError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("Output parent is not a directory: {}", parent.display()),
                )));
            }
        }
    }
    if path.is_dir() {
        return Err(ExtractorError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Output path is a directory: {}", path.display()),
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_input_file_existing() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("map.svg");
        std::fs::write(&file, "<svg/>").unwrap();

        assert!(validate_input_file(&file).is_ok());
    }

    #[test]
    fn test_validate_input_file_missing() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.svg");

        let err = validate_input_file(&missing).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_validate_input_file_directory() {
        let dir = tempdir().unwrap();

        let err = validate_input_file(dir.path()).unwrap_err();
        assert!(err.to_string().contains("not a file"));
    }

    #[test]
    fn test_validate_output_target_bare_file_name() {
        // Parent is the empty path; resolved against the current directory.
        assert!(validate_output_target(Path::new(DEFAULT_OUTPUT_FILE)).is_ok());
    }

    #[test]
    fn test_validate_output_target_existing_parent() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("locations.json");

        assert!(validate_output_target(&out).is_ok());
    }

    #[test]
    fn test_validate_output_target_missing_parent() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("missing").join("locations.json");

        let err = validate_output_target(&out).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_validate_output_target_is_directory() {
        let dir = tempdir().unwrap();

        let err = validate_output_target(dir.path()).unwrap_err();
        assert!(err.to_string().contains("is a directory"));
    }
}
