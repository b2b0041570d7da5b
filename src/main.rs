use log::{debug, error, info, warn};
use std::io::Write;
use std::path::Path;

pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod rendering;
pub mod utils;

use config::Config;
use error::{LeadError, Result};
use model::{Shape, ShapePair};
use rendering::scene::SceneBounds;
use utils::report;

/// Fixed output file, written to the working directory.
const OUTPUT_FILE: &str = "lead.pdf";

fn main() {
    utils::logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let (config, outcome) = Config::load();
    if outcome.is_fallback() {
        warn!("{}", outcome);
    } else {
        info!("{}", outcome);
    }

    let input = Path::new(io::INPUT_FILE);
    let output = Path::new(OUTPUT_FILE);

    plot_lead(input, output, &config, &mut std::io::stdout().lock())?;
    info!("Figure written to {}", output.display());
    Ok(())
}

/// Loader → extractor → renderer, once. The shape summary goes to `out` as
/// soon as the scalar groups are read. Nothing is written unless every group
/// parsed cleanly.
pub fn plot_lead<W: Write>(
    input: &Path,
    output: &Path,
    config: &Config,
    out: &mut W,
) -> Result<SceneBounds> {
    // 1. Load + extract
    let doc = io::load_lead(input, |header| {
        out.write_all(report::lead_summary(header).as_bytes())
            .and_then(|()| out.flush())
            .map_err(LeadError::Summary)
    })?;
    info!(
        "Loaded {}: {} segments, {} atoms",
        input.display(),
        doc.segment_count(),
        doc.nearest_atoms.len()
    );

    // 2. Shape
    let header = &doc.header;
    let shapes = Shape::resolve(header.shape_type.as_deref(), &header.shape_data)?
        .map(|s| ShapePair::new(s, doc.lead_vector));
    match &shapes {
        Some(pair) => {
            info!(
                "Lead region: {} shifted by {:?}",
                pair.native.kind(),
                doc.lead_vector
            );
            if let Some((origin, size)) = pair.native.rect_origin_size() {
                debug!("Rectangle origin {:?}, size {:?}", origin, size);
            }
        }
        None => info!("No drawable shape type, skipping region layers"),
    }

    // 3. Render
    rendering::export_figure(&doc, shapes.as_ref(), &config.style, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    const QUAD_LEAD: &str = r#"<lead>
  <shape_type>SHAPE_CONVEX_QUAD_XY</shape_type>
  <shape_data>0 0 1 0 1 1 0 1</shape_data>
  <lead_vector>1 0</lead_vector>
  <lead_data><data>0 0 0 1 1 0 2.5 extra_ignored_token</data></lead_data>
  <next_cell_lead_data><data>1 0 0 2 1 0 1.5</data></next_cell_lead_data>
  <lead_coupling><data>1 1 0 1 0 0 0.5</data></lead_coupling>
  <nearest_atoms>
    <data>0.5 0.5 0.0 0.2</data>
    <data>1.5 0.5 0.0 0.8</data>
  </nearest_atoms>
</lead>"#;

    fn write_input(dir: &Path, text: &str) -> PathBuf {
        let path = dir.join(io::INPUT_FILE);
        fs::write(&path, text).unwrap();
        path
    }

    fn plot(input: &Path, output: &Path, config: &Config) -> (Result<SceneBounds>, String) {
        let mut out = Vec::new();
        let result = plot_lead(input, output, config, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_quad_lead_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), QUAD_LEAD);
        let output = dir.path().join(OUTPUT_FILE);

        let (result, summary) = plot(&input, &output, &Config::default());
        let bounds = result.unwrap();

        assert!(fs::read(&output).unwrap().starts_with(b"%PDF"));
        assert!(summary.starts_with("Shape type  : SHAPE_CONVEX_QUAD_XY\n"));
        // Quad plus its copy shifted by (1, 0): x 0..2, y 0..1
        assert!((bounds.x_range.0 + 0.2).abs() < 1e-9);
        assert!((bounds.x_range.1 - 2.2).abs() < 1e-9);
        assert!((bounds.y_range.1 - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_shape_still_renders() {
        let dir = tempfile::tempdir().unwrap();
        let text = QUAD_LEAD.replace("SHAPE_CONVEX_QUAD_XY", "SHAPE_TRIANGLE");
        let input = write_input(dir.path(), &text);
        let output = dir.path().join(OUTPUT_FILE);

        plot(&input, &output, &Config::default()).0.unwrap();
        assert!(output.exists());
    }

    #[test]
    fn test_short_atom_record_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let text = QUAD_LEAD.replace("1.5 0.5 0.0 0.8", "1.5 0.5 0.0");
        let input = write_input(dir.path(), &text);
        let output = dir.path().join(OUTPUT_FILE);

        let err = plot(&input, &output, &Config::default()).0.unwrap_err();
        assert!(matches!(err, LeadError::ShortRecord { group: "nearest_atoms", .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_summary_printed_before_bad_record() {
        let dir = tempfile::tempdir().unwrap();
        let text = QUAD_LEAD
            .replace("<lead_vector>1 0</lead_vector>", "<lead_vector>1 0 0.25</lead_vector>")
            .replace("1 0 0 2 1 0 1.5", "1 0 0 2");
        let input = write_input(dir.path(), &text);
        let output = dir.path().join(OUTPUT_FILE);

        let (result, summary) = plot(&input, &output, &Config::default());
        assert!(matches!(
            result,
            Err(LeadError::ShortRecord { group: "next_cell_lead_data", .. })
        ));
        assert_eq!(
            summary,
            "Shape type  : SHAPE_CONVEX_QUAD_XY\n\
             Shape data  : [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]\n\
             Shape vector: [1.0, 0.0, 0.25]\n"
        );
        assert!(!output.exists());
    }

    #[test]
    fn test_bad_quad_arity_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let text = QUAD_LEAD.replace("0 0 1 0 1 1 0 1", "0 0 1 0 1 1");
        let input = write_input(dir.path(), &text);
        let output = dir.path().join(OUTPUT_FILE);

        let (result, summary) = plot(&input, &output, &Config::default());
        assert!(matches!(result, Err(LeadError::ShapeArity { found: 6, .. })));
        assert!(summary.contains("Shape data  : [0.0, 0.0, 1.0, 0.0, 1.0, 1.0]"));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let (result, summary) = plot(
            &dir.path().join(io::INPUT_FILE),
            &dir.path().join(OUTPUT_FILE),
            &Config::default(),
        );
        assert!(matches!(result, Err(LeadError::Read { .. })));
        assert!(summary.is_empty());
    }

    #[test]
    fn test_settings_cannot_change_output_format() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), QUAD_LEAD);
        let settings = dir.path().join("settings.json");
        fs::write(&settings, r#"{ "export_format": "Png", "style": { "marker_area": 40.0 } }"#)
            .unwrap();
        let (config, _) = Config::load_from(&settings);
        let output = dir.path().join(OUTPUT_FILE);

        plot(&input, &output, &config).0.unwrap();
        assert!(fs::read(&output).unwrap().starts_with(b"%PDF"));
        assert!(!dir.path().join("lead.png").exists());
    }

    #[test]
    fn test_same_input_same_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(dir.path(), QUAD_LEAD);
        let config = Config::default();

        let a = dir.path().join("a.pdf");
        let b = dir.path().join("b.pdf");
        let first = plot(&input, &a, &config).0.unwrap();
        let second = plot(&input, &b, &config).0.unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
    }
}
