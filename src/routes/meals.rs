// ABOUTME: Meal route handlers for nutrition logging
// ABOUTME: Supports listing with an optional calendar-day filter, creation and deletion
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Meal routes
//!
//! The list endpoint accepts an optional `?date=YYYY-MM-DD` filter,
//! interpreted as a UTC calendar day.

use crate::errors::AppError;
use crate::models::CreateMealRequest;
use crate::server::ServerResources;
use crate::storage::StorageProvider;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use super::MessageResponse;

/// Query parameters for listing meals
#[derive(Debug, Deserialize)]
struct MealsQuery {
    #[serde(default)]
    date: Option<String>,
}

/// Meal routes implementation
pub struct MealRoutes;

impl MealRoutes {
    /// Create all meal routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/meals", get(Self::list_meals).post(Self::create_meal))
            .route("/api/meals/:id", delete(Self::delete_meal))
            .with_state(resources)
    }

    /// List the demo user's meals, optionally restricted to one day
    async fn list_meals(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<MealsQuery>,
    ) -> Result<Response, AppError> {
        let day = params
            .date
            .as_deref()
            .map(parse_day)
            .transpose()?;

        let meals = resources
            .storage
            .get_meals(resources.demo_user_id, day)
            .await?;

        Ok((StatusCode::OK, Json(meals)).into_response())
    }

    /// Log a meal
    async fn create_meal(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateMealRequest>,
    ) -> Result<Response, AppError> {
        validate_meal(&request)?;

        let meal = resources
            .storage
            .create_meal(resources.demo_user_id, request)
            .await?;

        Ok((StatusCode::OK, Json(meal)).into_response())
    }

    /// Delete a meal; unknown ids are a no-op
    async fn delete_meal(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        if let Ok(meal_id) = Uuid::parse_str(&id) {
            resources.storage.delete_meal(meal_id).await?;
        }

        Ok((
            StatusCode::OK,
            Json(MessageResponse::new("Meal deleted successfully")),
        )
            .into_response())
    }
}

/// Parse a `YYYY-MM-DD` day filter
fn parse_day(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::invalid_input(format!("Invalid date filter: {raw}")))
}

/// Validate a meal payload
fn validate_meal(request: &CreateMealRequest) -> Result<(), AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::missing_field("name"));
    }
    if request.calories < 0 {
        return Err(AppError::out_of_range("calories must be non-negative"));
    }
    for (field, value) in [
        ("protein", request.protein),
        ("carbs", request.carbs),
        ("fats", request.fats),
    ] {
        if let Some(value) = value {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::out_of_range(format!(
                    "{field} must be non-negative"
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;

    #[test]
    fn test_parse_day_accepts_iso_dates_only() {
        assert!(parse_day("2024-03-15").is_ok());
        assert!(parse_day("03/15/2024").is_err());
        assert!(parse_day("yesterday").is_err());
    }

    #[test]
    fn test_rejects_negative_macros() {
        let request = CreateMealRequest {
            name: "Shake".to_owned(),
            meal_type: MealType::Snack,
            calories: 200,
            protein: Some(-1.0),
            carbs: None,
            fats: None,
        };
        assert!(validate_meal(&request).is_err());
    }
}
