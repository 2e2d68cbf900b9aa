use serde::{Deserialize, Serialize};

/// Body returned after a receipt is stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdResponse {
    pub id: String,
}

/// Body returned for a points lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: i64,
}
