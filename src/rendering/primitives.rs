// src/rendering/primitives.rs

use cairo::{Context, LineCap, LineJoin};
use std::f64::consts::PI;

pub type Rgb = (f64, f64, f64);

/// Closed polygon, filled and outlined in the same translucent colour.
pub fn fill_polygon(
    cr: &Context,
    verts: &[(f64, f64)],
    color: Rgb,
    alpha: f64,
    edge_width: f64,
) -> Result<(), cairo::Error> {
    let Some((&(x0, y0), rest)) = verts.split_first() else {
        return Ok(());
    };

    cr.new_path();
    cr.move_to(x0, y0);
    for &(x, y) in rest {
        cr.line_to(x, y);
    }
    cr.close_path();

    let (r, g, b) = color;
    cr.set_source_rgba(r, g, b, alpha);
    cr.fill_preserve()?;
    cr.set_line_width(edge_width);
    cr.set_line_join(LineJoin::Miter);
    cr.stroke()
}

/// Straight segment of the given width in points. Zero, negative and
/// non-finite widths draw nothing.
pub fn stroke_segment(
    cr: &Context,
    p1: (f64, f64),
    p2: (f64, f64),
    width: f64,
    color: Rgb,
) -> Result<(), cairo::Error> {
    if !(width.is_finite() && width > 0.0) {
        return Ok(());
    }
    let (r, g, b) = color;
    cr.set_source_rgb(r, g, b);
    cr.set_line_width(width);
    cr.set_line_cap(LineCap::Butt);
    cr.move_to(p1.0, p1.1);
    cr.line_to(p2.0, p2.1);
    cr.stroke()
}

/// Flat circular marker with a solid outline.
pub fn draw_marker(
    cr: &Context,
    x: f64,
    y: f64,
    radius: f64,
    fill: Rgb,
    edge: Rgb,
    edge_width: f64,
) -> Result<(), cairo::Error> {
    cr.new_path();
    cr.arc(x, y, radius, 0.0, 2.0 * PI);

    let (r, g, b) = fill;
    cr.set_source_rgb(r, g, b);
    cr.fill_preserve()?;

    if edge_width > 0.0 {
        let (r, g, b) = edge;
        cr.set_source_rgb(r, g, b);
        cr.set_line_width(edge_width);
        cr.stroke()
    } else {
        cr.new_path();
        Ok(())
    }
}
