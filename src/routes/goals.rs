// ABOUTME: Goal route handlers for creation, listing and progress updates
// ABOUTME: PATCH merges partial payloads over the stored goal
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Goal routes
//!
//! Goals are the only mutable record: progress updates arrive as partial
//! PATCH payloads and merge shallowly over the stored value. An unknown id
//! on PATCH is a 404, unlike the idempotent delete endpoints.

use crate::errors::AppError;
use crate::models::{CreateGoalRequest, UpdateGoalRequest};
use crate::server::ServerResources;
use crate::storage::StorageProvider;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch},
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

/// Goal routes implementation
pub struct GoalRoutes;

impl GoalRoutes {
    /// Create all goal routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/goals", get(Self::list_goals).post(Self::create_goal))
            .route("/api/goals/:id", patch(Self::update_goal))
            .with_state(resources)
    }

    /// List the demo user's goals by target date, soonest first
    async fn list_goals(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let goals = resources.storage.get_goals(resources.demo_user_id).await?;
        Ok((StatusCode::OK, Json(goals)).into_response())
    }

    /// Create a goal
    async fn create_goal(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateGoalRequest>,
    ) -> Result<Response, AppError> {
        validate_goal(&request)?;

        let goal = resources
            .storage
            .create_goal(resources.demo_user_id, request)
            .await?;

        Ok((StatusCode::OK, Json(goal)).into_response())
    }

    /// Merge a partial update into a goal
    async fn update_goal(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        Json(update): Json<UpdateGoalRequest>,
    ) -> Result<Response, AppError> {
        validate_goal_update(&update)?;

        let goal_id = Uuid::parse_str(&id)
            .map_err(|_| AppError::not_found("Goal").with_resource_id(id.clone()))?;

        let updated = resources
            .storage
            .update_goal(goal_id, update)
            .await?
            .ok_or_else(|| AppError::not_found("Goal").with_resource_id(id))?;

        Ok((StatusCode::OK, Json(updated)).into_response())
    }
}

/// Validate a goal creation payload
fn validate_goal(request: &CreateGoalRequest) -> Result<(), AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::missing_field("title"));
    }
    if request.unit.trim().is_empty() {
        return Err(AppError::missing_field("unit"));
    }
    if !request.target_value.is_finite() {
        return Err(AppError::out_of_range("targetValue must be finite"));
    }
    if let Some(current_value) = request.current_value {
        if !current_value.is_finite() {
            return Err(AppError::out_of_range("currentValue must be finite"));
        }
    }
    Ok(())
}

/// Validate a partial goal update
fn validate_goal_update(update: &UpdateGoalRequest) -> Result<(), AppError> {
    if let Some(title) = &update.title {
        if title.trim().is_empty() {
            return Err(AppError::invalid_input("title must not be blank"));
        }
    }
    if let Some(unit) = &update.unit {
        if unit.trim().is_empty() {
            return Err(AppError::invalid_input("unit must not be blank"));
        }
    }
    for (field, value) in [
        ("targetValue", update.target_value),
        ("currentValue", update.current_value),
    ] {
        if let Some(value) = value {
            if !value.is_finite() {
                return Err(AppError::out_of_range(format!("{field} must be finite")));
            }
        }
    }
    Ok(())
}
