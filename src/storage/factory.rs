// ABOUTME: Storage factory and provider abstraction for backend selection
// ABOUTME: Provides a unified wrapper that delegates to the configured backend

//! Storage factory for creating storage providers
//!
//! The [`Storage`] enum wraps the configured backend behind one concrete
//! type so the rest of the application never names a backend directly.
//! Only the in-memory backend exists today; a durable backend adds a
//! variant here and an arm per operation.

use super::memory::InMemoryStorage;
use super::StorageProvider;
use crate::config::StorageBackend;
use crate::models::{
    CreateExerciseRequest, CreateGoalRequest, CreateMealRequest, CreateMeasurementRequest,
    CreateUserRequest, CreateWeightEntryRequest, CreateWorkoutRequest, Exercise, Goal, Meal,
    Measurement, UpdateGoalRequest, User, WeightEntry, Workout,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

/// Storage instance wrapper that delegates to the appropriate implementation
#[derive(Debug, Clone)]
pub enum Storage {
    Memory(InMemoryStorage),
}

impl Storage {
    /// Create a new storage instance for the configured backend
    #[must_use]
    pub fn new(backend: StorageBackend) -> Self {
        match backend {
            StorageBackend::Memory => {
                info!("Initializing in-memory storage");
                Self::Memory(InMemoryStorage::new())
            }
        }
    }

    /// Get a descriptive string for the current storage backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Memory(_) => "In-Memory (process lifetime)",
        }
    }

    /// Access the in-memory backend, if that is what is configured
    ///
    /// Demo seeding needs the backdating helpers the trait deliberately
    /// does not expose.
    #[must_use]
    pub const fn as_memory(&self) -> Option<&InMemoryStorage> {
        match self {
            Self::Memory(memory) => Some(memory),
        }
    }
}

#[async_trait]
impl StorageProvider for Storage {
    async fn create_user(&self, request: CreateUserRequest) -> Result<User> {
        match self {
            Self::Memory(memory) => memory.create_user(request).await,
        }
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        match self {
            Self::Memory(memory) => memory.get_user(id).await,
        }
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        match self {
            Self::Memory(memory) => memory.get_user_by_username(username).await,
        }
    }

    async fn get_workouts(&self, user_id: Uuid) -> Result<Vec<Workout>> {
        match self {
            Self::Memory(memory) => memory.get_workouts(user_id).await,
        }
    }

    async fn get_workout(&self, id: Uuid) -> Result<Option<Workout>> {
        match self {
            Self::Memory(memory) => memory.get_workout(id).await,
        }
    }

    async fn create_workout(
        &self,
        user_id: Uuid,
        request: CreateWorkoutRequest,
    ) -> Result<Workout> {
        match self {
            Self::Memory(memory) => memory.create_workout(user_id, request).await,
        }
    }

    async fn delete_workout(&self, id: Uuid) -> Result<()> {
        match self {
            Self::Memory(memory) => memory.delete_workout(id).await,
        }
    }

    async fn get_exercises_by_workout(&self, workout_id: Uuid) -> Result<Vec<Exercise>> {
        match self {
            Self::Memory(memory) => memory.get_exercises_by_workout(workout_id).await,
        }
    }

    async fn create_exercise(
        &self,
        workout_id: Uuid,
        request: CreateExerciseRequest,
    ) -> Result<Exercise> {
        match self {
            Self::Memory(memory) => memory.create_exercise(workout_id, request).await,
        }
    }

    async fn get_meals(&self, user_id: Uuid, date: Option<NaiveDate>) -> Result<Vec<Meal>> {
        match self {
            Self::Memory(memory) => memory.get_meals(user_id, date).await,
        }
    }

    async fn create_meal(&self, user_id: Uuid, request: CreateMealRequest) -> Result<Meal> {
        match self {
            Self::Memory(memory) => memory.create_meal(user_id, request).await,
        }
    }

    async fn delete_meal(&self, id: Uuid) -> Result<()> {
        match self {
            Self::Memory(memory) => memory.delete_meal(id).await,
        }
    }

    async fn get_weight_entries(&self, user_id: Uuid) -> Result<Vec<WeightEntry>> {
        match self {
            Self::Memory(memory) => memory.get_weight_entries(user_id).await,
        }
    }

    async fn create_weight_entry(
        &self,
        user_id: Uuid,
        request: CreateWeightEntryRequest,
    ) -> Result<WeightEntry> {
        match self {
            Self::Memory(memory) => memory.create_weight_entry(user_id, request).await,
        }
    }

    async fn get_measurements(&self, user_id: Uuid) -> Result<Vec<Measurement>> {
        match self {
            Self::Memory(memory) => memory.get_measurements(user_id).await,
        }
    }

    async fn create_measurement(
        &self,
        user_id: Uuid,
        request: CreateMeasurementRequest,
    ) -> Result<Measurement> {
        match self {
            Self::Memory(memory) => memory.create_measurement(user_id, request).await,
        }
    }

    async fn get_goals(&self, user_id: Uuid) -> Result<Vec<Goal>> {
        match self {
            Self::Memory(memory) => memory.get_goals(user_id).await,
        }
    }

    async fn create_goal(&self, user_id: Uuid, request: CreateGoalRequest) -> Result<Goal> {
        match self {
            Self::Memory(memory) => memory.create_goal(user_id, request).await,
        }
    }

    async fn update_goal(&self, id: Uuid, update: UpdateGoalRequest) -> Result<Option<Goal>> {
        match self {
            Self::Memory(memory) => memory.update_goal(id, update).await,
        }
    }
}
