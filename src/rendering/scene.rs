// src/rendering/scene.rs

use crate::config::RenderStyle;
use crate::model::{LeadDocument, Point2, ShapePair};
use crate::utils::geometry::Extent;

/// Data limits and where they land on the page. Page coordinates grow
/// downwards, data coordinates grow upwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneBounds {
  pub x_range: (f64, f64),
  pub y_range: (f64, f64),
  /// Plot box on the page: left, top, width, height (points).
  pub left: f64,
  pub top: f64,
  pub width: f64,
  pub height: f64,
  /// Points per data unit, identical on both axes.
  pub scale: f64,
}

impl SceneBounds {
  pub fn to_page(&self, p: Point2) -> (f64, f64) {
    (
      self.left + (p[0] - self.x_range.0) * self.scale,
      self.top + self.height - (p[1] - self.y_range.0) * self.scale,
    )
  }
}

pub fn data_extent(doc: &LeadDocument, shapes: Option<&ShapePair>) -> Extent {
  let mut extent = Extent::empty();

  if let Some(pair) = shapes {
    for p in pair.native.outline().into_iter().chain(pair.shifted.outline()) {
      extent.include(p);
    }
  }

  let segments = doc
    .lead_data
    .iter()
    .chain(&doc.next_cell_lead_data)
    .chain(&doc.lead_coupling);
  for seg in segments {
    extent.include(seg.start);
    extent.include(seg.end);
  }

  for atom in &doc.nearest_atoms {
    extent.include(atom.position);
  }

  extent
}

// Pads [lo, hi] by `margin` of its span; a flat or empty range opens to unit width first.
fn padded(lo: f64, hi: f64, margin: f64) -> (f64, f64) {
  let (lo, hi) = if hi > lo {
    (lo, hi)
  } else {
    (lo - 0.5, lo + 0.5)
  };
  let pad = (hi - lo) * margin;
  (lo - pad, hi + pad)
}

pub fn calculate_scene(
  doc: &LeadDocument,
  shapes: Option<&ShapePair>,
  style: &RenderStyle,
) -> SceneBounds {
  // 1. Data limits
  let extent = data_extent(doc, shapes);
  let (x_range, y_range) = if extent.is_empty() {
    (
      padded(0.0, 1.0, style.margin),
      padded(0.0, 1.0, style.margin),
    )
  } else {
    (
      padded(extent.min[0], extent.max[0], style.margin),
      padded(extent.min[1], extent.max[1], style.margin),
    )
  };

  // 2. Available box on the page
  let [l, r, b, t] = style.plot_box;
  let avail_left = style.page_width * l;
  let avail_width = style.page_width * (r - l);
  let avail_top = style.page_height * (1.0 - t);
  let avail_height = style.page_height * (t - b);

  // 3. Equal aspect: shrink one side, keep the box centred
  let dx = x_range.1 - x_range.0;
  let dy = y_range.1 - y_range.0;
  let scale = (avail_width / dx).min(avail_height / dy);
  let width = dx * scale;
  let height = dy * scale;

  SceneBounds {
    x_range,
    y_range,
    left: avail_left + (avail_width - width) / 2.0,
    top: avail_top + (avail_height - height) / 2.0,
    width,
    height,
    scale,
  }
}
