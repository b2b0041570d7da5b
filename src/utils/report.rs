// src/utils/report.rs

use crate::model::LeadHeader;

fn list(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| format!("{:?}", v)).collect();
    format!("[{}]", items.join(", "))
}

/// The three header lines, printed before any record is read.
pub fn lead_summary(header: &LeadHeader) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Shape type  : {}\n",
        header.shape_type.as_deref().unwrap_or("<none>")
    ));
    out.push_str(&format!("Shape data  : {}\n", list(&header.shape_data)));
    out.push_str(&format!("Shape vector: {}\n", list(&header.lead_vector)));
    out
}
