//! SVG map extractor - pull named outline paths out of an SVG world map.
//!
//! This crate reads a markup document containing drawable region elements
//! (country boundaries in an SVG world map, possibly embedded in an HTML
//! page), keeps every path element that carries both an identifier and
//! geometry data, and writes the result as pretty-printed JSON for use by a
//! front-end map renderer.
//!
//! # Example
//!
//! ```
//! use svgmap_extractor::extract;
//!
//! let svg = r#"<svg><path id="FRA" d="M0 0 L1 1"/><path d="M2 2"/></svg>"#;
//! let locations = extract(svg).unwrap();
//!
//! assert_eq!(locations.len(), 1);
//! assert_eq!(locations[0].name, "FRA");
//! assert_eq!(locations[0].path_data, "M0 0 L1 1");
//! ```
//!
//! # Architecture
//!
//! The extractor is organized into several modules:
//!
//! - [`config`]: Configuration constants and path validation
//! - [`types`]: The `Location` record type
//! - [`error`]: Error types and Result alias
//! - [`svg`]: SVG document loading and DOM navigation
//! - [`extractor`]: The extraction pipeline (parse + filter)
//! - [`json`]: JSON output generation and atomic file save
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod json;
pub mod svg;
pub mod types;

// Re-export main functions
pub use extractor::{extract_locations, Extraction};
pub use json::{generate_json, save_json};

// Re-export commonly used items
pub use error::{ExtractorError, Result};
pub use types::Location;

/// Extract qualifying path locations from a markup document.
///
/// Convenience wrapper around [`extract_locations`] for callers that only
/// need the records, not the skip count or warnings.
pub fn extract(document: &str) -> Result<Vec<Location>> {
    Ok(extract_locations(document)?.locations)
}
