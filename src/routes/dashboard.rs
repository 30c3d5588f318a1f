// ABOUTME: Dashboard route handlers for the stats snapshot endpoint
// ABOUTME: Thin handler delegating to the stats service
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Dashboard routes
//!
//! One endpoint: the aggregated stats snapshot the dashboard cards render.

use crate::errors::AppError;
use crate::server::ServerResources;
use crate::stats::StatsService;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Dashboard routes implementation
pub struct DashboardRoutes;

impl DashboardRoutes {
    /// Create all dashboard routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/dashboard/stats", get(Self::handle_stats))
            .with_state(resources)
    }

    /// Handle the stats snapshot request
    async fn handle_stats(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let service = StatsService::new(resources.storage.clone());
        let stats = service.dashboard_stats(resources.demo_user_id).await?;

        Ok((StatusCode::OK, Json(stats)).into_response())
    }
}
