// ABOUTME: Route module organization for FitTrack HTTP endpoints
// ABOUTME: Provides route definitions organized by domain with thin handlers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Route module for FitTrack
//!
//! This module organizes all HTTP routes by domain. Each domain module
//! contains only route definitions and thin handler functions that validate
//! input and delegate to the storage layer or a service.

/// Dashboard statistics routes
pub mod dashboard;
/// Goal management routes
pub mod goals;
/// Health check and system status routes
pub mod health;
/// Meal logging routes
pub mod meals;
/// Body measurement routes
pub mod measurements;
/// Weight tracking routes
pub mod weight;
/// Workout and exercise routes
pub mod workouts;

/// Dashboard route handlers
pub use dashboard::DashboardRoutes;
/// Goal route handlers
pub use goals::GoalRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Meal route handlers
pub use meals::MealRoutes;
/// Measurement route handlers
pub use measurements::MeasurementRoutes;
/// Weight route handlers
pub use weight::WeightRoutes;
/// Workout route handlers
pub use workouts::WorkoutRoutes;

/// Standard acknowledgement body for delete endpoints
#[derive(Debug, serde::Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// Build an acknowledgement with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
