// src/io/lead_xml.rs

use std::path::Path;

use log::debug;
use roxmltree::{Document, Node};

use super::fields::parse_floats;
use crate::error::{LeadError, Result};
use crate::model::{LeadDocument, LeadHeader, PointRecord, SegmentRecord};

pub const SHAPE_TYPE: &str = "shape_type";
pub const SHAPE_DATA: &str = "shape_data";
pub const LEAD_VECTOR: &str = "lead_vector";
pub const LEAD_DATA: &str = "lead_data";
pub const NEXT_CELL_LEAD_DATA: &str = "next_cell_lead_data";
pub const LEAD_COUPLING: &str = "lead_coupling";
pub const NEAREST_ATOMS: &str = "nearest_atoms";
const RECORD: &str = "data";

/// Extracts the whole document. `on_header` sees the scalar groups before any
/// record group is read, so it still runs when a later record is bad.
pub fn parse_str<F>(text: &str, path: &Path, on_header: F) -> Result<LeadDocument>
where
    F: FnOnce(&LeadHeader) -> Result<()>,
{
    let doc = Document::parse(text).map_err(|source| LeadError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    let root = doc.root_element();

    // 1. Scalar groups: first occurrence wins
    let header = read_header(root)?;
    on_header(&header)?;
    let lead_vector = header.offset()?;

    // 2. Record groups, in document order
    let segments = |group: &'static str| -> Result<Vec<_>> {
        records(root, group)
            .map(|tokens| SegmentRecord::parse_line(group, &tokens).map(|r| r.to_segment()))
            .collect()
    };
    let lead_data = segments(LEAD_DATA)?;
    let next_cell_lead_data = segments(NEXT_CELL_LEAD_DATA)?;
    let lead_coupling = segments(LEAD_COUPLING)?;

    let nearest_atoms = records(root, NEAREST_ATOMS)
        .map(|tokens| PointRecord::parse_line(NEAREST_ATOMS, &tokens).map(|r| r.to_point()))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "{}: {} lead, {} next-cell, {} coupling segments, {} atoms",
        path.display(),
        lead_data.len(),
        next_cell_lead_data.len(),
        lead_coupling.len(),
        nearest_atoms.len()
    );

    Ok(LeadDocument {
        header,
        lead_vector,
        lead_data,
        next_cell_lead_data,
        lead_coupling,
        nearest_atoms,
    })
}

/// `shape_type` is kept exactly as written; padded text matches no shape tag.
fn read_header(root: Node) -> Result<LeadHeader> {
    let shape_type = first_text(root, SHAPE_TYPE).map(str::to_string);

    let shape_data = first_text(root, SHAPE_DATA).ok_or(LeadError::MissingGroup(SHAPE_DATA))?;
    let shape_data = parse_floats(SHAPE_DATA, shape_data)?;

    let lead_vector =
        first_text(root, LEAD_VECTOR).ok_or(LeadError::MissingGroup(LEAD_VECTOR))?;
    let lead_vector = parse_floats(LEAD_VECTOR, lead_vector)?;

    Ok(LeadHeader {
        shape_type,
        shape_data,
        lead_vector,
    })
}

fn elements<'a, 'input: 'a>(
    root: Node<'a, 'input>,
    tag: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    root.descendants()
        .filter(move |n| n.is_element() && n.has_tag_name(tag))
}

fn first_text<'a>(root: Node<'a, '_>, tag: &'static str) -> Option<&'a str> {
    elements(root, tag).next().and_then(|n| n.text())
}

/// Tokens of every `<data>` row below every `<group>` element. A row with no
/// text yields no tokens and fails as a short record.
fn records<'a, 'input: 'a>(
    root: Node<'a, 'input>,
    group: &'static str,
) -> impl Iterator<Item = Vec<&'a str>> {
    elements(root, group)
        .flat_map(|g| g.descendants().skip(1).filter(|n| n.is_element() && n.has_tag_name(RECORD)))
        .map(|row| row.text().unwrap_or("").split_whitespace().collect())
}
