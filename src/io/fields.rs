// src/io/fields.rs

use crate::error::{LeadError, Result};

pub fn parse_number(group: &'static str, token: &str) -> Result<f64> {
    token.parse::<f64>().map_err(|_| LeadError::BadNumber {
        group,
        token: token.to_string(),
    })
}

/// Every whitespace-separated token of `text`, parsed in order.
pub fn parse_floats(group: &'static str, text: &str) -> Result<Vec<f64>> {
    text.split_whitespace()
        .map(|t| parse_number(group, t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_floats_formats() {
        let v = parse_floats("shape_data", " 1 -2.5\n\t+3e2  4.0E-1 ").unwrap();
        assert_eq!(v, vec![1.0, -2.5, 300.0, 0.4]);
    }

    #[test]
    fn test_parse_floats_empty() {
        assert!(parse_floats("shape_data", "   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_floats_rejects_words() {
        let err = parse_floats("lead_vector", "1.0 abc").unwrap_err();
        assert_eq!(err.to_string(), "invalid number \"abc\" in <lead_vector>");
    }
}
