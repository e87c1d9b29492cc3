//! JSON writer for location files.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::JSON_INDENT;
use crate::error::{ExtractorError, Result};
use crate::types::Location;

/// Generate the JSON document for a list of locations.
///
/// Output is an array of objects with keys `name` and `path_data` in that
/// order, pretty-printed with a fixed 4-space indent and a trailing newline.
/// Non-ASCII characters are written as-is (no escaping), so both fields
/// round-trip byte-exact. The same input always produces identical text.
pub fn generate_json(locations: &[Location]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    locations.serialize(&mut serializer)?;
    buf.push(b'\n');

    String::from_utf8(buf).map_err(|e| {
        ExtractorError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Generated JSON is not valid UTF-8: {e}"),
        ))
    })
}

/// Save locations as a JSON file.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
/// This ensures partial writes don't corrupt existing files on crash.
///
/// # Arguments
/// * `locations` - The locations to save
/// * `output` - Destination file path
///
/// # Returns
/// Path to the saved file
pub fn save_json(locations: &[Location], output: &Path) -> Result<PathBuf> {
    let file_name = output.file_name().ok_or_else(|| {
        ExtractorError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Output path has no file name: {}", output.display()),
        ))
    })?;
    let temp_file = output.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));

    let content = generate_json(locations)?;

    // Write to temp file first, then sync and rename for atomicity
    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?; // Ensure data is flushed to disk
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output.exists() {
        fs::remove_file(output)?;
    }

    // Atomic rename (on most filesystems)
    fs::rename(&temp_file, output)?;

    Ok(output.to_path_buf())
}
