// src/rendering/export.rs

use super::painter;
use super::scene::{self, SceneBounds};
use crate::config::RenderStyle;
use crate::error::{LeadError, Result};
use crate::model::{LeadDocument, ShapePair};
use cairo::Context;
use log::debug;
use plotters::prelude::*;
use plotters_cairo::CairoBackend;
use std::path::Path;

// Room reserved outside the plot box for tick labels.
const LABEL_AREA: u32 = 28;
const TICK_COUNT: usize = 6;

fn render_err<E: std::fmt::Display>(e: E) -> LeadError {
    LeadError::Render(e.to_string())
}

// --- Tick frame (plotters) ---
fn draw_mesh(cr: &Context, bounds: &SceneBounds, style: &RenderStyle) -> Result<()> {
    let page = (
        style.page_width.round() as u32,
        style.page_height.round() as u32,
    );
    let backend = CairoBackend::new(cr, page).map_err(render_err)?;
    let root = backend.into_drawing_area();

    let left = bounds.left.round() as u32;
    let top = bounds.top.round() as u32;
    let right = (style.page_width - bounds.left - bounds.width).round().max(0.0) as u32;
    let bottom = (style.page_height - bounds.top - bounds.height).round().max(0.0) as u32;

    let mut chart = ChartBuilder::on(&root)
        .margin_left(left.saturating_sub(LABEL_AREA))
        .margin_top(top)
        .margin_right(right)
        .margin_bottom(bottom.saturating_sub(LABEL_AREA))
        .x_label_area_size(LABEL_AREA)
        .y_label_area_size(LABEL_AREA)
        .build_cartesian_2d(
            bounds.x_range.0..bounds.x_range.1,
            bounds.y_range.0..bounds.y_range.1,
        )
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(TICK_COUNT)
        .y_labels(TICK_COUNT)
        .label_style(("sans-serif", style.tick_font_size))
        .draw()
        .map_err(render_err)?;

    Ok(())
}

/// Full figure, back to front.
pub fn render_figure(
    cr: &Context,
    doc: &LeadDocument,
    shapes: Option<&ShapePair>,
    bounds: &SceneBounds,
    style: &RenderStyle,
) -> Result<()> {
    // 0. Page
    cr.set_source_rgb(1.0, 1.0, 1.0);
    cr.paint()?;
    draw_mesh(cr, bounds, style)?;

    painter::clip_to_plot(cr, bounds)?;

    // 1-2. Lead region and its shifted copy
    if let Some(pair) = shapes {
        painter::draw_shapes(cr, pair, bounds, style)?;
    }

    // 3-5. Weighted links
    painter::draw_segments(cr, &doc.lead_data, bounds, style.lead_color)?;
    painter::draw_segments(cr, &doc.next_cell_lead_data, bounds, style.next_cell_color)?;
    painter::draw_segments(cr, &doc.lead_coupling, bounds, style.coupling_color)?;

    // 6. Atoms on top
    painter::draw_atoms(cr, &doc.nearest_atoms, bounds, style)?;

    cr.restore()?;
    painter::draw_frame(cr, bounds, style)?;
    Ok(())
}

// --- File Export Entry Point ---

/// Fixed creation date, so the same input always yields the same bytes.
const PDF_CREATE_DATE: &str = "2000-01-01T00:00:00Z";

/// Writes the figure as a single-page PDF at `path`.
pub fn export_figure(
    doc: &LeadDocument,
    shapes: Option<&ShapePair>,
    style: &RenderStyle,
    path: &Path,
) -> Result<SceneBounds> {
    let bounds = scene::calculate_scene(doc, shapes, style);
    debug!(
        "plot box {:.1}x{:.1} pt at ({:.1}, {:.1}), x {:?}, y {:?}",
        bounds.width, bounds.height, bounds.left, bounds.top, bounds.x_range, bounds.y_range
    );

    let surface = cairo::PdfSurface::new(style.page_width, style.page_height, path)?;
    surface.set_metadata(cairo::PdfMetadata::CreateDate, PDF_CREATE_DATE)?;
    {
        let cr = Context::new(&surface)?;
        render_figure(&cr, doc, shapes, &bounds, style)?;
    }
    surface.finish();
    surface.status()?;

    Ok(bounds)
}
