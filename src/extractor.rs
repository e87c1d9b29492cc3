//! Main extraction logic: parse a map document and collect named paths.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::config::{GEOMETRY_ATTRIBUTE, ID_ATTRIBUTE};
use crate::error::Result;
use crate::svg::{is_path_element, non_empty_attribute, parse_document};
use crate::types::Location;

/// Result of one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Qualifying locations, in document order.
    pub locations: Vec<Location>,

    /// Path elements dropped for lacking an identifier or geometry data.
    pub skipped: usize,

    /// Non-fatal findings, currently one entry per duplicated identifier.
    pub warnings: Vec<String>,
}

/// Extract named path locations from a markup document.
///
/// Parses the document (tolerating HTML wrappers, see
/// [`crate::svg::parse_document`]), walks every descendant path element
/// regardless of nesting depth, and keeps those carrying both a non-empty
/// identifier and non-empty geometry data. Elements missing either are
/// counted as skipped, not errors. Duplicate identifiers pass through
/// unchanged and are reported as warnings.
///
/// An empty or whitespace-only document yields an empty extraction.
///
/// # Arguments
/// * `markup` - Raw markup text (SVG, possibly embedded in an HTML page)
///
/// # Returns
/// An [`Extraction`] with locations in document order
pub fn extract_locations(markup: &str) -> Result<Extraction> {
    if markup.trim().is_empty() {
        return Ok(Extraction {
            locations: Vec::new(),
            skipped: 0,
            warnings: Vec::new(),
        });
    }

    let doc = parse_document(markup)?;

    let mut locations = Vec::new();
    let mut skipped = 0usize;

    for node in doc.descendants().filter(|n| is_path_element(*n)) {
        let id = non_empty_attribute(node, ID_ATTRIBUTE);
        let geometry = non_empty_attribute(node, GEOMETRY_ATTRIBUTE);

        match (id, geometry) {
            (Some(name), Some(path_data)) => {
                locations.push(Location::new(name, path_data));
            }
            _ => {
                skipped += 1;
                debug!(
                    "Skipping path element: missing {}",
                    if id.is_none() { "identifier" } else { "geometry data" }
                );
            }
        }
    }

    let warnings = duplicate_warnings(&locations);
    for warning in &warnings {
        warn!("{warning}");
    }

    Ok(Extraction {
        locations,
        skipped,
        warnings,
    })
}

/// Report duplicated identifiers, one warning per name in first-occurrence order.
///
/// Duplicates are kept in the output; the downstream consumer owns any
/// deduplication policy.
fn duplicate_warnings(locations: &[Location]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut flagged: HashSet<&str> = HashSet::new();
    let mut warnings = Vec::new();

    for location in locations {
        if !seen.insert(location.name.as_str()) && flagged.insert(location.name.as_str()) {
            warnings.push(format!(
                "Duplicate identifier '{}': all occurrences kept",
                location.name
            ));
        }
    }

    warnings
}
