// Submitted records
pub mod receipt;

// Response bodies
pub mod response;

// Re-exports for convenience
pub use receipt::{Item, Receipt};
pub use response::{IdResponse, PointsResponse};
