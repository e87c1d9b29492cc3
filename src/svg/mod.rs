//! SVG document loading and DOM navigation helpers.

mod utils;

pub use utils::{get_tag_name, is_path_element, non_empty_attribute, parse_document};
