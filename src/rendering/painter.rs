// src/rendering/painter.rs
// Vector layers of a lead figure, drawn straight onto a cairo context in
// page coordinates.

use super::colormap::{normalize, pubu};
use super::primitives::*;
use super::scene::SceneBounds;
use crate::config::RenderStyle;
use crate::model::{Shape, ShapePair, WeightedPoint, WeightedSegment};
use cairo::Context;

// ============================================================================
// SHAPES
// ============================================================================

fn shape_alpha(shape: &Shape, style: &RenderStyle) -> f64 {
    match shape {
        Shape::Rectangle { .. } => style.rectangle_alpha,
        Shape::Quad(_) => style.quad_alpha,
    }
}

fn fill_shape(
    cr: &Context,
    shape: &Shape,
    bounds: &SceneBounds,
    color: Rgb,
    style: &RenderStyle,
) -> Result<(), cairo::Error> {
    let verts: Vec<(f64, f64)> = shape.outline().into_iter().map(|p| bounds.to_page(p)).collect();
    fill_polygon(cr, &verts, color, shape_alpha(shape, style), style.shape_edge_width)
}

/// Layers 1 and 2: the lead region and its neighbour-cell copy.
pub fn draw_shapes(
    cr: &Context,
    pair: &ShapePair,
    bounds: &SceneBounds,
    style: &RenderStyle,
) -> Result<(), cairo::Error> {
    fill_shape(cr, &pair.native, bounds, style.shape_color, style)?;
    fill_shape(cr, &pair.shifted, bounds, style.shifted_shape_color, style)
}

// ============================================================================
// SEGMENTS
// ============================================================================

/// One segment layer. Line width in points equals the record weight.
pub fn draw_segments(
    cr: &Context,
    segments: &[WeightedSegment],
    bounds: &SceneBounds,
    color: Rgb,
) -> Result<(), cairo::Error> {
    for seg in segments {
        stroke_segment(
            cr,
            bounds.to_page(seg.start),
            bounds.to_page(seg.end),
            seg.weight,
            color,
        )?;
    }
    Ok(())
}

// ============================================================================
// ATOMS
// ============================================================================

/// Circle radius for a marker of size `area` (pt²). As with scatter sizes,
/// the diameter is the square root of the size.
pub fn marker_radius(area: f64) -> f64 {
    area.max(0.0).sqrt() / 2.0
}

/// Top layer: nearby atoms, coloured by normalized weight.
pub fn draw_atoms(
    cr: &Context,
    atoms: &[WeightedPoint],
    bounds: &SceneBounds,
    style: &RenderStyle,
) -> Result<(), cairo::Error> {
    let weights: Vec<f64> = atoms.iter().map(|a| a.weight).collect();
    let levels = normalize(&weights);
    let radius = marker_radius(style.marker_area);

    for (atom, level) in atoms.iter().zip(levels) {
        let (x, y) = bounds.to_page(atom.position);
        if !(x.is_finite() && y.is_finite()) {
            continue;
        }
        draw_marker(
            cr,
            x,
            y,
            radius,
            pubu(level),
            style.marker_edge_color,
            style.marker_edge_width,
        )?;
    }
    Ok(())
}

// ============================================================================
// FRAME
// ============================================================================

pub fn draw_frame(cr: &Context, bounds: &SceneBounds, style: &RenderStyle) -> Result<(), cairo::Error> {
    cr.new_path();
    cr.set_source_rgb(0.0, 0.0, 0.0);
    cr.set_line_width(style.frame_width);
    cr.rectangle(bounds.left, bounds.top, bounds.width, bounds.height);
    cr.stroke()
}

/// Restricts drawing to the plot box until the matching `restore`.
pub fn clip_to_plot(cr: &Context, bounds: &SceneBounds) -> Result<(), cairo::Error> {
    cr.save()?;
    cr.new_path();
    cr.rectangle(bounds.left, bounds.top, bounds.width, bounds.height);
    cr.clip();
    Ok(())
}
