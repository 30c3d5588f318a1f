// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Reports service identity, version and the active storage backend
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Health check routes for service monitoring
//!
//! `/health` reports liveness plus the active storage backend; `/ready`
//! answers load balancer readiness probes. Neither touches stored data.

use crate::server::ServerResources;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::health_handler))
            .route("/ready", get(Self::ready_handler))
            .with_state(resources)
    }

    async fn health_handler(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "service": "fittrack",
            "version": env!("CARGO_PKG_VERSION"),
            "storage": resources.storage.backend_info(),
            "environment": resources.config.environment.to_string(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn ready_handler() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "ready",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}
