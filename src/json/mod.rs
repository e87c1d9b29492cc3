//! JSON output generation for location files.

mod writer;

pub use writer::{generate_json, save_json};
