// ABOUTME: Workout route handlers for listing, creating and deleting sessions
// ABOUTME: Validates workout and exercise payloads before anything is committed
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Workout routes
//!
//! A workout is created together with its exercises in one request. The
//! whole payload is validated up front so a bad exercise rejects the
//! request before the workout exists; no partially-created session is ever
//! observable.

use crate::errors::AppError;
use crate::models::{
    CreateExerciseRequest, CreateWorkoutRequest, Exercise, Workout,
};
use crate::server::ServerResources;
use crate::storage::StorageProvider;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::MessageResponse;

/// Workout creation payload: the session plus its exercises
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutPayload {
    pub name: String,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub exercises: Vec<CreateExerciseRequest>,
}

/// A workout with its exercises attached
#[derive(Debug, Serialize)]
pub struct WorkoutWithExercises {
    #[serde(flatten)]
    pub workout: Workout,
    pub exercises: Vec<Exercise>,
}

/// Workout routes implementation
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/workouts",
                get(Self::list_workouts).post(Self::create_workout),
            )
            .route("/api/workouts/:id", delete(Self::delete_workout))
            .with_state(resources)
    }

    /// List the demo user's workouts, most recent first, with exercises
    async fn list_workouts(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let workouts = resources
            .storage
            .get_workouts(resources.demo_user_id)
            .await?;

        let mut with_exercises = Vec::with_capacity(workouts.len());
        for workout in workouts {
            let exercises = resources
                .storage
                .get_exercises_by_workout(workout.id)
                .await?;
            with_exercises.push(WorkoutWithExercises { workout, exercises });
        }

        Ok((StatusCode::OK, Json(with_exercises)).into_response())
    }

    /// Create a workout and its exercises as one unit
    async fn create_workout(
        State(resources): State<Arc<ServerResources>>,
        Json(payload): Json<CreateWorkoutPayload>,
    ) -> Result<Response, AppError> {
        // Validate everything before creating anything; a bad exercise must
        // not leave a committed workout behind
        validate_workout(&payload)?;
        for exercise in &payload.exercises {
            validate_exercise(exercise)?;
        }

        let workout = resources
            .storage
            .create_workout(
                resources.demo_user_id,
                CreateWorkoutRequest {
                    name: payload.name,
                    duration: payload.duration,
                    notes: payload.notes,
                },
            )
            .await?;

        let mut created_exercises = Vec::with_capacity(payload.exercises.len());
        for exercise in payload.exercises {
            let created = resources
                .storage
                .create_exercise(workout.id, exercise)
                .await?;
            created_exercises.push(created);
        }

        info!(
            workout.id = %workout.id,
            workout.exercises = created_exercises.len(),
            "Workout created"
        );

        Ok((
            StatusCode::OK,
            Json(WorkoutWithExercises {
                workout,
                exercises: created_exercises,
            }),
        )
            .into_response())
    }

    /// Delete a workout and its exercises; unknown ids are a no-op
    async fn delete_workout(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        // Deletes are idempotent, so an unparseable id gets the same
        // acknowledgement as an unknown one
        if let Ok(workout_id) = Uuid::parse_str(&id) {
            resources.storage.delete_workout(workout_id).await?;
        }

        Ok((
            StatusCode::OK,
            Json(MessageResponse::new("Workout deleted successfully")),
        )
            .into_response())
    }
}

/// Validate the workout portion of a creation payload
fn validate_workout(payload: &CreateWorkoutPayload) -> Result<(), AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::missing_field("name"));
    }
    if let Some(duration) = payload.duration {
        if duration <= 0 {
            return Err(AppError::out_of_range("duration must be positive"));
        }
    }
    Ok(())
}

/// Validate a single exercise payload
fn validate_exercise(exercise: &CreateExerciseRequest) -> Result<(), AppError> {
    if exercise.name.trim().is_empty() {
        return Err(AppError::missing_field("name"));
    }
    if exercise.sets <= 0 {
        return Err(AppError::out_of_range("sets must be positive"));
    }
    if exercise.reps <= 0 {
        return Err(AppError::out_of_range("reps must be positive"));
    }
    if let Some(weight) = exercise.weight {
        if !weight.is_finite() || weight < 0.0 {
            return Err(AppError::out_of_range("weight must be non-negative"));
        }
    }
    Ok(())
}
