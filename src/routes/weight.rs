// ABOUTME: Weight tracking route handlers
// ABOUTME: Lists the weight time series oldest-first and logs new entries
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Weight tracking routes
//!
//! Entries list oldest-first so chart consumers read the series in order
//! and the latest entry is the last element.

use crate::errors::AppError;
use crate::models::CreateWeightEntryRequest;
use crate::server::ServerResources;
use crate::storage::StorageProvider;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Weight routes implementation
pub struct WeightRoutes;

impl WeightRoutes {
    /// Create all weight tracking routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/weight",
                get(Self::list_entries).post(Self::create_entry),
            )
            .with_state(resources)
    }

    /// List the demo user's weight entries, oldest first
    async fn list_entries(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let entries = resources
            .storage
            .get_weight_entries(resources.demo_user_id)
            .await?;

        Ok((StatusCode::OK, Json(entries)).into_response())
    }

    /// Log a weight entry
    async fn create_entry(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateWeightEntryRequest>,
    ) -> Result<Response, AppError> {
        if !request.weight.is_finite() || request.weight <= 0.0 {
            return Err(AppError::out_of_range("weight must be positive"));
        }

        let entry = resources
            .storage
            .create_weight_entry(resources.demo_user_id, request)
            .await?;

        Ok((StatusCode::OK, Json(entry)).into_response())
    }
}
