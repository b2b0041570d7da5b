// src/model/lead.rs

use crate::error::{LeadError, Result};
use crate::io::fields::parse_number;

pub type Point2 = [f64; 2];

const SEGMENT_ARITY: usize = 7;
const POINT_ARITY: usize = 4;

/// One `<data>` row of `lead_data`, `next_cell_lead_data` or `lead_coupling`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentRecord {
    pub x1: f64,
    pub y1: f64,
    pub z1: f64,
    pub x2: f64,
    pub y2: f64,
    pub z2: f64,
    pub weight: f64,
}

impl SegmentRecord {
    /// Parses the first seven tokens. Anything after them is never looked at.
    pub fn parse_line(group: &'static str, tokens: &[&str]) -> Result<Self> {
        let v = take_prefix::<{ SEGMENT_ARITY }>(group, tokens)?;
        Ok(Self {
            x1: v[0],
            y1: v[1],
            z1: v[2],
            x2: v[3],
            y2: v[4],
            z2: v[5],
            weight: v[6],
        })
    }

    /// Planar projection; z is dropped.
    pub fn to_segment(&self) -> WeightedSegment {
        WeightedSegment {
            start: [self.x1, self.y1],
            end: [self.x2, self.y2],
            weight: self.weight,
        }
    }
}

/// One `<data>` row of `nearest_atoms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub weight: f64,
}

impl PointRecord {
    pub fn parse_line(group: &'static str, tokens: &[&str]) -> Result<Self> {
        let v = take_prefix::<{ POINT_ARITY }>(group, tokens)?;
        Ok(Self {
            x: v[0],
            y: v[1],
            z: v[2],
            weight: v[3],
        })
    }

    pub fn to_point(&self) -> WeightedPoint {
        WeightedPoint {
            position: [self.x, self.y],
            weight: self.weight,
        }
    }
}

// Length is checked before any token is parsed, so a short record with a bad
// token still reports as short.
fn take_prefix<const N: usize>(group: &'static str, tokens: &[&str]) -> Result<[f64; N]> {
    if tokens.len() < N {
        return Err(LeadError::ShortRecord {
            group,
            needed: N,
            found: tokens.len(),
        });
    }
    let mut out = [0.0; N];
    for (slot, token) in out.iter_mut().zip(tokens) {
        *slot = parse_number(group, token)?;
    }
    Ok(out)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedSegment {
    pub start: Point2,
    pub end: Point2,
    pub weight: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedPoint {
    pub position: Point2,
    pub weight: f64,
}

/// The scalar groups, read before any record group.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadHeader {
    /// Raw tag text, untrimmed; `None` when the element is absent.
    pub shape_type: Option<String>,
    pub shape_data: Vec<f64>,
    /// Every number in `<lead_vector>`, including any past the second.
    pub lead_vector: Vec<f64>,
}

impl LeadHeader {
    /// The in-plane translation: the first two `lead_vector` values.
    pub fn offset(&self) -> Result<Point2> {
        match self.lead_vector.as_slice() {
            [x, y, ..] => Ok([*x, *y]),
            short => Err(LeadError::ShortRecord {
                group: "lead_vector",
                needed: 2,
                found: short.len(),
            }),
        }
    }
}

/// Everything read from a lead file, extracted in one pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadDocument {
    pub header: LeadHeader,
    pub lead_vector: Point2,
    pub lead_data: Vec<WeightedSegment>,
    pub next_cell_lead_data: Vec<WeightedSegment>,
    pub lead_coupling: Vec<WeightedSegment>,
    pub nearest_atoms: Vec<WeightedPoint>,
}

impl LeadDocument {
    pub fn segment_count(&self) -> usize {
        self.lead_data.len() + self.next_cell_lead_data.len() + self.lead_coupling.len()
    }
}
