pub mod entity;
pub mod store;

// Re-export commonly used types
pub use entity::{IdResponse, Item, PointsResponse, Receipt};
pub use store::ReceiptStore;
