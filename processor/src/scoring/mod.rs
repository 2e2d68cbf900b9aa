//! Points scoring module
//!
//! Scores a receipt with seven independent, additive rules:
//! - Retailer name: one point per ASCII alphanumeric character
//! - Round total (50) and quarter-multiple total (25)
//! - Item pairs: 5 points per two items
//! - Item descriptions: a price bonus for trimmed lengths divisible by 3
//! - Odd purchase day (6) and a 2pm-4pm purchase window (10)

pub mod points;

pub use points::{compute_points, PointsCalculator, PointsResult, RuleBreakdown};
