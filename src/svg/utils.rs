//! Utility functions for loading SVG documents and navigating their DOM trees.

use roxmltree::{Document, Node, ParsingOptions};

use crate::config::PATH_TAG;
use crate::error::Result;

/// Get the tag name without namespace prefix.
///
/// # Arguments
/// * `node` - XML node
///
/// # Returns
/// Tag name without namespace (e.g., "path" not "svg:path")
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use svgmap_extractor::svg::get_tag_name;
///
/// let svg = r#"<svg><path d="M0 0"/></svg>"#;
/// let doc = Document::parse(svg).unwrap();
/// let path = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(path), "path");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check whether a node is a drawable-path element.
///
/// The tag name is matched without its namespace prefix and without regard
/// to ASCII case, mirroring the tolerance of HTML parsers toward
/// hand-authored map exports (`<PATH>` and `<svg:path>` both qualify).
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use svgmap_extractor::svg::is_path_element;
///
/// let svg = r#"<svg><PATH d="M0 0"/><rect width="1" height="1"/></svg>"#;
/// let doc = Document::parse(svg).unwrap();
/// let mut children = doc.root_element().children().filter(|n| n.is_element());
/// assert!(is_path_element(children.next().unwrap()));
/// assert!(!is_path_element(children.next().unwrap()));
/// ```
pub fn is_path_element(node: Node<'_, '_>) -> bool {
    node.is_element() && get_tag_name(node).eq_ignore_ascii_case(PATH_TAG)
}

/// Get an attribute value, treating an empty value as absent.
///
/// # Arguments
/// * `node` - Node to read the attribute from
/// * `name` - Attribute name
///
/// # Returns
/// Attribute value, or `None` if the attribute is missing or empty
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use svgmap_extractor::svg::non_empty_attribute;
///
/// let svg = r#"<path id="FRA" d=""/>"#;
/// let doc = Document::parse(svg).unwrap();
/// let path = doc.root_element();
///
/// assert_eq!(non_empty_attribute(path, "id"), Some("FRA"));
/// assert_eq!(non_empty_attribute(path, "d"), None);
/// assert_eq!(non_empty_attribute(path, "missing"), None);
/// ```
pub fn non_empty_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name).filter(|value| !value.is_empty())
}

/// Parse a map document into a DOM tree, tolerating HTML wrappers.
///
/// Map exports are frequently SVG fragments embedded in a hand-authored HTML
/// page that is not well-formed XML (unclosed `<meta>` tags and the like).
/// Parsing is therefore two-stage: first the whole document (with DTD
/// declarations allowed, for `<!DOCTYPE html>` pages), and if that fails,
/// the `<svg>...</svg>` slice on its own. Only when both attempts fail is
/// the original parse error returned.
pub fn parse_document(markup: &str) -> Result<Document<'_>> {
    match Document::parse_with_options(markup, parsing_options()) {
        Ok(doc) => Ok(doc),
        Err(err) => {
            if let Some(fragment) = svg_fragment(markup) {
                if let Ok(doc) = Document::parse_with_options(fragment, parsing_options()) {
                    return Ok(doc);
                }
            }
            Err(err.into())
        }
    }
}

/// Parser options for map documents. Built per call: `ParsingOptions` holds
/// an entity-resolver reference and is not `Copy`.
fn parsing_options<'a>() -> ParsingOptions<'a> {
    ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    }
}

/// Slice out the `<svg>...</svg>` region of a document, if present.
///
/// The scan is ASCII case-insensitive, matching the tag-name tolerance of
/// [`is_path_element`]. ASCII lowercasing maps bytes one-to-one, so indices
/// found in the lowered copy are valid in the original text.
fn svg_fragment(markup: &str) -> Option<&str> {
    let lowered = markup.to_ascii_lowercase();
    let start = lowered.find("<svg")?;
    let end = lowered.rfind("</svg>")?;
    if end < start {
        return None;
    }
    Some(&markup[start..end + "</svg>".len()])
}
