//src/model/mod.rs
pub mod lead;
pub mod shape;

// Re-exports for cleaner imports
pub use lead::{LeadDocument, LeadHeader, Point2, PointRecord, SegmentRecord, WeightedPoint, WeightedSegment};
pub use shape::{Shape, ShapePair};
