// ABOUTME: Core data models for the FitTrack API
// ABOUTME: Defines User, Workout, Exercise, Meal, WeightEntry, Measurement and Goal records
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! # Data Models
//!
//! This module contains the core data structures used throughout FitTrack.
//!
//! ## Design Principles
//!
//! - **Backend Agnostic**: Records carry no storage-specific fields beyond
//!   the insertion sequence used for deterministic ordering
//! - **Serializable**: All models support JSON serialization for the REST API
//! - **Type Safe**: Strong typing prevents common data handling errors
//!
//! ## Core Models
//!
//! - [`User`]: account record; every other entity is partitioned by `user_id`
//! - [`Workout`] / [`Exercise`]: a training session and its child exercises
//! - [`Meal`]: a logged meal with calories and optional macros
//! - [`WeightEntry`] / [`Measurement`]: body-composition time series
//! - [`Goal`]: a target with progress tracking, the only mutable record

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// A registered user account
///
/// The deployment bootstraps a single demo user; the model still carries the
/// full account shape so a real registration flow slots in without schema
/// changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// Username (unique across the deployment)
    pub username: String,
    /// Password for the account
    ///
    /// Never serialized into API responses.
    #[serde(skip_serializing)]
    pub password: String,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a generated id
    #[must_use]
    pub fn new(username: String, password: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password,
            created_at: Utc::now(),
        }
    }
}

/// Fields accepted when creating a user
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
}

/// A logged training session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Unique workout identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Session name, e.g. "Upper Body"
    pub name: String,
    /// Duration in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    /// When the workout was logged (server-assigned)
    pub date: DateTime<Utc>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Fields accepted when creating a workout
///
/// `date` is deliberately absent: the storage layer stamps it at creation
/// time and ignores anything a client might send.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutRequest {
    pub name: String,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A single exercise performed within a workout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Unique exercise identifier
    pub id: Uuid,
    /// Parent workout; the exercise is removed when the workout is deleted
    pub workout_id: Uuid,
    /// Exercise name, e.g. "Bench Press"
    pub name: String,
    /// Number of sets
    pub sets: i32,
    /// Repetitions per set
    pub reps: i32,
    /// Weight used, in pounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Fields accepted when creating an exercise
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExerciseRequest {
    pub name: String,
    pub sets: i32,
    pub reps: i32,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Meal type classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Stable string form used in API payloads
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl Display for MealType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MealType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            _ => Err(AppError::invalid_input(format!("Invalid meal type: {s}"))),
        }
    }
}

/// A logged meal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Unique meal identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Meal name, e.g. "Grilled Chicken Salad"
    pub name: String,
    /// Breakfast, lunch, dinner or snack
    #[serde(rename = "type")]
    pub meal_type: MealType,
    /// When the meal was logged (server-assigned)
    pub date: DateTime<Utc>,
    /// Total calories
    pub calories: i32,
    /// Protein in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    /// Carbohydrates in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    /// Fats in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fats: Option<f64>,
}

/// Fields accepted when creating a meal
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMealRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub calories: i32,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub fats: Option<f64>,
}

/// A body-weight measurement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightEntry {
    /// Unique entry identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Body weight in pounds
    pub weight: f64,
    /// When the entry was logged (server-assigned)
    pub date: DateTime<Utc>,
}

/// Fields accepted when logging a weight entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWeightEntryRequest {
    pub weight: f64,
}

/// A set of body measurements, all in inches
///
/// Every field is independently optional; users rarely tape every site in
/// one sitting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// Unique measurement identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chest: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thighs: Option<f64>,
    /// When the measurement was logged (server-assigned)
    pub date: DateTime<Utc>,
}

/// Fields accepted when logging measurements
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeasurementRequest {
    #[serde(default)]
    pub waist: Option<f64>,
    #[serde(default)]
    pub chest: Option<f64>,
    #[serde(default)]
    pub arms: Option<f64>,
    #[serde(default)]
    pub thighs: Option<f64>,
}

/// A fitness goal with progress tracking
///
/// The only mutable record: progress updates arrive as partial PATCH
/// payloads merged over the stored value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Unique goal identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Goal title, e.g. "Bench 225"
    pub title: String,
    /// Longer description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Target value in `unit`
    pub target_value: f64,
    /// Current progress in `unit`
    pub current_value: f64,
    /// Unit of measure, e.g. "lbs", "reps", "minutes"
    pub unit: String,
    /// Deadline chosen by the user (client-supplied, preserved as-is)
    pub target_date: DateTime<Utc>,
    /// Whether the goal has been reached
    pub completed: bool,
}

/// Fields accepted when creating a goal
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub target_value: f64,
    #[serde(default)]
    pub current_value: Option<f64>,
    pub unit: String,
    pub target_date: DateTime<Utc>,
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Partial goal update
///
/// Fields absent from the payload are left untouched; present fields
/// replace the stored value (shallow merge). `description` uses a nested
/// `Option` so "set description to null" and "leave description alone"
/// stay distinguishable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGoalRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub target_value: Option<f64>,
    #[serde(default)]
    pub current_value: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub target_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Serde helper distinguishing an absent field from an explicit `null`
mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}
