//! Receipt processing
//!
//! Turns a stored receipt into its points total.

pub mod scoring;

pub use scoring::{compute_points, PointsCalculator, PointsResult, RuleBreakdown};
