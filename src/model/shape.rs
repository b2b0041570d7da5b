// src/model/shape.rs

use super::lead::Point2;
use crate::error::{LeadError, Result};
use crate::utils::geometry::translate;

pub const RECTANGLE_TAG: &str = "SHAPE_RECTANGLE_XY";
pub const QUAD_TAG: &str = "SHAPE_CONVEX_QUAD_XY";

/// Bounding region of a lead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Two opposite corners. Not normalized: `max` may sit left of or below `min`.
    Rectangle { min: Point2, max: Point2 },
    /// Four vertices in file order. Convexity and winding are not checked.
    Quad([Point2; 4]),
}

impl Shape {
    /// Decodes `shape_type`/`shape_data`. Unknown or absent tags give `Ok(None)`.
    pub fn resolve(shape_type: Option<&str>, data: &[f64]) -> Result<Option<Shape>> {
        match shape_type {
            Some(RECTANGLE_TAG) => {
                let v = exact::<4>("rectangle", data)?;
                Ok(Some(Shape::Rectangle {
                    min: [v[0], v[1]],
                    max: [v[2], v[3]],
                }))
            }
            Some(QUAD_TAG) => {
                let v = exact::<8>("quad", data)?;
                Ok(Some(Shape::Quad([
                    [v[0], v[1]],
                    [v[2], v[3]],
                    [v[4], v[5]],
                    [v[6], v[7]],
                ])))
            }
            _ => Ok(None),
        }
    }

    pub fn translated(&self, offset: Point2) -> Shape {
        match *self {
            Shape::Rectangle { min, max } => Shape::Rectangle {
                min: translate(min, offset),
                max: translate(max, offset),
            },
            Shape::Quad(verts) => Shape::Quad(verts.map(|p| translate(p, offset))),
        }
    }

    /// Origin corner and signed size, the way a rectangle patch is specified.
    pub fn rect_origin_size(&self) -> Option<(Point2, Point2)> {
        match *self {
            Shape::Rectangle { min, max } => Some((min, [max[0] - min[0], max[1] - min[1]])),
            Shape::Quad(_) => None,
        }
    }

    /// Outline in drawing order.
    pub fn outline(&self) -> Vec<Point2> {
        match *self {
            Shape::Rectangle { min, max } => vec![min, [max[0], min[1]], max, [min[0], max[1]]],
            Shape::Quad(verts) => verts.to_vec(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Rectangle { .. } => "rectangle",
            Shape::Quad(_) => "quad",
        }
    }
}

/// A lead's shape together with its copy shifted into the neighbour cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapePair {
    pub native: Shape,
    pub shifted: Shape,
}

impl ShapePair {
    pub fn new(native: Shape, lead_vector: Point2) -> Self {
        Self {
            native,
            shifted: native.translated(lead_vector),
        }
    }
}

fn exact<const N: usize>(kind: &'static str, data: &[f64]) -> Result<[f64; N]> {
    <[f64; N]>::try_from(data).map_err(|_| LeadError::ShapeArity {
        kind,
        expected: N,
        found: data.len(),
    })
}
