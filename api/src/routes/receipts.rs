//! Receipt API routes

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use processor::PointsCalculator;
use receipt_db::entity::{IdResponse, PointsResponse, Receipt};

use crate::{error::AppError, AppState};

/// /receipts/process
/// Stores the submitted receipt and returns its id.
///
/// The body is decoded regardless of Content-Type.
pub async fn process_receipt(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<IdResponse>, AppError> {
    let receipt: Receipt = serde_json::from_slice(&body)
        .inspect_err(|e| tracing::warn!("Rejected receipt: {}", e))?;

    let id = state.store.put(receipt);
    tracing::info!("Processed receipt {}", id);

    Ok(Json(IdResponse { id }))
}

/// /receipts/:id/points
/// Scores a stored receipt. Points are recomputed on every call.
pub async fn get_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, AppError> {
    let Some(receipt) = state.store.get(&id) else {
        tracing::warn!("Receipt {} not found", id);
        return Err(AppError::NotFound);
    };

    let result = PointsCalculator::calculate(&receipt);
    for rule in &result.breakdown {
        tracing::debug!("{} {}: +{} ({})", id, rule.name, rule.points, rule.reason);
    }

    Ok(Json(PointsResponse {
        points: result.total,
    }))
}
