// src/utils/geometry.rs

use crate::model::Point2;

pub fn translate(p: Point2, offset: Point2) -> Point2 {
    [p[0] + offset[0], p[1] + offset[1]]
}

/// Axis-aligned extent of a set of points, grown one point at a time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min: Point2,
    pub max: Point2,
}

impl Extent {
    pub fn empty() -> Self {
        Self {
            min: [f64::INFINITY, f64::INFINITY],
            max: [f64::NEG_INFINITY, f64::NEG_INFINITY],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min[0] > self.max[0] || self.min[1] > self.max[1]
    }

    /// Non-finite coordinates are skipped so one NaN cannot poison the limits.
    pub fn include(&mut self, p: Point2) {
        if !(p[0].is_finite() && p[1].is_finite()) {
            return;
        }
        self.min[0] = self.min[0].min(p[0]);
        self.min[1] = self.min[1].min(p[1]);
        self.max[0] = self.max[0].max(p[0]);
        self.max[1] = self.max[1].max(p[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_growth() {
        let mut e = Extent::empty();
        assert!(e.is_empty());
        e.include([1.0, -2.0]);
        e.include([-3.0, 4.0]);
        e.include([f64::NAN, 100.0]);
        assert!(!e.is_empty());
        assert_eq!(e.min, [-3.0, -2.0]);
        assert_eq!(e.max, [1.0, 4.0]);
    }
}
