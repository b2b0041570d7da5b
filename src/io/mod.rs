// src/io/mod.rs
pub mod fields;
pub mod lead_xml;

use crate::error::{LeadError, Result};
use crate::model::{LeadDocument, LeadHeader};
use std::fs;
use std::path::Path;

/// Input file name, resolved against the working directory.
pub const INPUT_FILE: &str = "lead.dat";

/// Reads and extracts `path`. `on_header` runs once the scalar groups are
/// known, before any record group is parsed.
pub fn load_lead<F>(path: &Path, on_header: F) -> Result<LeadDocument>
where
    F: FnOnce(&LeadHeader) -> Result<()>,
{
    let text = fs::read_to_string(path).map_err(|source| LeadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    lead_xml::parse_str(&text, path, on_header)
}
