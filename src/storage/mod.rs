// ABOUTME: Storage abstraction layer for FitTrack
// ABOUTME: Plugin architecture for storage support with an in-memory backend

//! Storage abstraction layer
//!
//! All storage backends implement [`StorageProvider`] to give the API layer
//! a consistent contract. The in-memory backend is the reference
//! implementation; a durable database backend would slot in behind the same
//! trait provided its external behavior matches (ordering, cascade-delete
//! atomicity, idempotent deletes).
//!
//! Misses on id-based lookups are `Ok(None)`, never an error; deletes are
//! idempotent no-ops when the id is unknown. The only storage-originated
//! failure in the in-memory backend is a username conflict on user
//! creation.

use crate::models::{
    CreateExerciseRequest, CreateGoalRequest, CreateMealRequest, CreateMeasurementRequest,
    CreateUserRequest, CreateWeightEntryRequest, CreateWorkoutRequest, Exercise, Goal, Meal,
    Measurement, UpdateGoalRequest, User, WeightEntry, Workout,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

pub mod factory;
pub mod memory;

pub use factory::Storage;
pub use memory::InMemoryStorage;

/// Core storage abstraction trait
///
/// All storage implementations must implement this trait to provide
/// a consistent interface for the application layer.
#[async_trait]
pub trait StorageProvider: Send + Sync + Clone {
    // ================================
    // Users
    // ================================

    /// Create a new user account
    ///
    /// Fails if the username is already taken.
    async fn create_user(&self, request: CreateUserRequest) -> Result<User>;

    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> Result<Option<User>>;

    /// Get user by username
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    // ================================
    // Workouts
    // ================================

    /// Get all workouts for a user, most recent first
    async fn get_workouts(&self, user_id: Uuid) -> Result<Vec<Workout>>;

    /// Get workout by ID
    async fn get_workout(&self, id: Uuid) -> Result<Option<Workout>>;

    /// Create a workout; the creation timestamp is assigned here, not by
    /// the caller
    async fn create_workout(&self, user_id: Uuid, request: CreateWorkoutRequest)
        -> Result<Workout>;

    /// Delete a workout and, as one logical unit, every exercise belonging
    /// to it. No-op when the id is unknown.
    async fn delete_workout(&self, id: Uuid) -> Result<()>;

    // ================================
    // Exercises
    // ================================

    /// Get the exercises of a workout in insertion order
    async fn get_exercises_by_workout(&self, workout_id: Uuid) -> Result<Vec<Exercise>>;

    /// Create an exercise under a workout
    async fn create_exercise(
        &self,
        workout_id: Uuid,
        request: CreateExerciseRequest,
    ) -> Result<Exercise>;

    // ================================
    // Meals
    // ================================

    /// Get all meals for a user, most recent first, optionally restricted
    /// to a single UTC calendar day
    async fn get_meals(&self, user_id: Uuid, date: Option<NaiveDate>) -> Result<Vec<Meal>>;

    /// Create a meal; the creation timestamp is assigned here
    async fn create_meal(&self, user_id: Uuid, request: CreateMealRequest) -> Result<Meal>;

    /// Delete a meal. No-op when the id is unknown.
    async fn delete_meal(&self, id: Uuid) -> Result<()>;

    // ================================
    // Weight tracking
    // ================================

    /// Get all weight entries for a user, oldest first
    async fn get_weight_entries(&self, user_id: Uuid) -> Result<Vec<WeightEntry>>;

    /// Log a weight entry; the creation timestamp is assigned here
    async fn create_weight_entry(
        &self,
        user_id: Uuid,
        request: CreateWeightEntryRequest,
    ) -> Result<WeightEntry>;

    // ================================
    // Measurements
    // ================================

    /// Get all measurements for a user, most recent first
    async fn get_measurements(&self, user_id: Uuid) -> Result<Vec<Measurement>>;

    /// Log a measurement; the creation timestamp is assigned here
    async fn create_measurement(
        &self,
        user_id: Uuid,
        request: CreateMeasurementRequest,
    ) -> Result<Measurement>;

    // ================================
    // Goals
    // ================================

    /// Get all goals for a user, ordered by target date ascending
    async fn get_goals(&self, user_id: Uuid) -> Result<Vec<Goal>>;

    /// Create a goal
    async fn create_goal(&self, user_id: Uuid, request: CreateGoalRequest) -> Result<Goal>;

    /// Merge a partial update into an existing goal and return the updated
    /// record, or `None` when the id is unknown
    async fn update_goal(&self, id: Uuid, update: UpdateGoalRequest) -> Result<Option<Goal>>;
}
