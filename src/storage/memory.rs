// ABOUTME: In-memory storage backend holding all collections under one lock
// ABOUTME: Implements cascade delete, ordering guarantees, and seeding helpers

//! In-memory storage backend
//!
//! All six collections live in a single [`StoreInner`] guarded by one
//! `tokio::sync::RwLock`. One lock rather than one per collection: the
//! cascade delete from workout to exercises must be atomic for readers,
//! and a single writer guard makes every mutation appear atomic without a
//! transaction mechanism.
//!
//! Records carry a monotonic insertion sequence so date sorts break ties
//! deterministically and exercises list in insertion order, independent of
//! `HashMap` iteration order.

use super::StorageProvider;
use crate::errors::AppError;
use crate::models::{
    CreateExerciseRequest, CreateGoalRequest, CreateMealRequest, CreateMeasurementRequest,
    CreateUserRequest, CreateWeightEntryRequest, CreateWorkoutRequest, Exercise, Goal, Meal,
    Measurement, UpdateGoalRequest, User, WeightEntry, Workout,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A stored record tagged with its insertion sequence
#[derive(Debug, Clone)]
struct Stored<T> {
    seq: u64,
    record: T,
}

/// All collections behind the storage lock
#[derive(Debug, Default)]
struct StoreInner {
    seq: u64,
    users: HashMap<Uuid, Stored<User>>,
    workouts: HashMap<Uuid, Stored<Workout>>,
    exercises: HashMap<Uuid, Stored<Exercise>>,
    meals: HashMap<Uuid, Stored<Meal>>,
    weight_entries: HashMap<Uuid, Stored<WeightEntry>>,
    measurements: HashMap<Uuid, Stored<Measurement>>,
    goals: HashMap<Uuid, Stored<Goal>>,
}

impl StoreInner {
    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }
}

/// In-memory storage backend
///
/// Cloning is cheap and clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    inner: Arc<RwLock<StoreInner>>,
}

impl InMemoryStorage {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ================================
    // Seeding
    // ================================
    //
    // The trait surface stamps creation timestamps server-side, so API
    // callers cannot forge history. Demo seeding and integration tests
    // need backdated records; these helpers insert fully-formed records
    // as-is.

    /// Insert a fully-formed workout, keeping its id and date
    pub async fn seed_workout(&self, workout: Workout) {
        let mut inner = self.inner.write().await;
        let seq = inner.next_seq();
        inner.workouts.insert(workout.id, Stored { seq, record: workout });
    }

    /// Insert a fully-formed exercise, keeping its id
    pub async fn seed_exercise(&self, exercise: Exercise) {
        let mut inner = self.inner.write().await;
        let seq = inner.next_seq();
        inner
            .exercises
            .insert(exercise.id, Stored { seq, record: exercise });
    }

    /// Insert a fully-formed meal, keeping its id and date
    pub async fn seed_meal(&self, meal: Meal) {
        let mut inner = self.inner.write().await;
        let seq = inner.next_seq();
        inner.meals.insert(meal.id, Stored { seq, record: meal });
    }

    /// Insert a fully-formed weight entry, keeping its id and date
    pub async fn seed_weight_entry(&self, entry: WeightEntry) {
        let mut inner = self.inner.write().await;
        let seq = inner.next_seq();
        inner
            .weight_entries
            .insert(entry.id, Stored { seq, record: entry });
    }

    /// Insert a fully-formed measurement, keeping its id and date
    pub async fn seed_measurement(&self, measurement: Measurement) {
        let mut inner = self.inner.write().await;
        let seq = inner.next_seq();
        inner
            .measurements
            .insert(measurement.id, Stored { seq, record: measurement });
    }
}

#[async_trait]
impl StorageProvider for InMemoryStorage {
    async fn create_user(&self, request: CreateUserRequest) -> Result<User> {
        let mut inner = self.inner.write().await;

        // Uniqueness check and insert under the same writer guard
        if inner
            .users
            .values()
            .any(|stored| stored.record.username == request.username)
        {
            return Err(AppError::conflict(format!(
                "Username '{}' is already taken",
                request.username
            ))
            .into());
        }

        let user = User::new(request.username, request.password);
        let seq = inner.next_seq();
        inner.users.insert(user.id, Stored { seq, record: user.clone() });
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id).map(|stored| stored.record.clone()))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .values()
            .find(|stored| stored.record.username == username)
            .map(|stored| stored.record.clone()))
    }

    async fn get_workouts(&self, user_id: Uuid) -> Result<Vec<Workout>> {
        let inner = self.inner.read().await;
        let mut entries: Vec<&Stored<Workout>> = inner
            .workouts
            .values()
            .filter(|stored| stored.record.user_id == user_id)
            .collect();
        // Most recent first; ties keep insertion order
        entries.sort_by(|a, b| {
            b.record
                .date
                .cmp(&a.record.date)
                .then_with(|| a.seq.cmp(&b.seq))
        });
        Ok(entries.into_iter().map(|stored| stored.record.clone()).collect())
    }

    async fn get_workout(&self, id: Uuid) -> Result<Option<Workout>> {
        let inner = self.inner.read().await;
        Ok(inner.workouts.get(&id).map(|stored| stored.record.clone()))
    }

    async fn create_workout(
        &self,
        user_id: Uuid,
        request: CreateWorkoutRequest,
    ) -> Result<Workout> {
        let workout = Workout {
            id: Uuid::new_v4(),
            user_id,
            name: request.name,
            duration: request.duration,
            date: Utc::now(),
            notes: request.notes,
        };

        let mut inner = self.inner.write().await;
        let seq = inner.next_seq();
        inner
            .workouts
            .insert(workout.id, Stored { seq, record: workout.clone() });
        Ok(workout)
    }

    async fn delete_workout(&self, id: Uuid) -> Result<()> {
        // Workout and child exercises go in one writer guard, so readers
        // never observe the workout gone while an exercise remains
        let mut inner = self.inner.write().await;
        inner.workouts.remove(&id);
        inner
            .exercises
            .retain(|_, stored| stored.record.workout_id != id);
        Ok(())
    }

    async fn get_exercises_by_workout(&self, workout_id: Uuid) -> Result<Vec<Exercise>> {
        let inner = self.inner.read().await;
        let mut entries: Vec<&Stored<Exercise>> = inner
            .exercises
            .values()
            .filter(|stored| stored.record.workout_id == workout_id)
            .collect();
        entries.sort_by_key(|stored| stored.seq);
        Ok(entries.into_iter().map(|stored| stored.record.clone()).collect())
    }

    async fn create_exercise(
        &self,
        workout_id: Uuid,
        request: CreateExerciseRequest,
    ) -> Result<Exercise> {
        let exercise = Exercise {
            id: Uuid::new_v4(),
            workout_id,
            name: request.name,
            sets: request.sets,
            reps: request.reps,
            weight: request.weight,
            notes: request.notes,
        };

        let mut inner = self.inner.write().await;
        let seq = inner.next_seq();
        inner
            .exercises
            .insert(exercise.id, Stored { seq, record: exercise.clone() });
        Ok(exercise)
    }

    async fn get_meals(&self, user_id: Uuid, date: Option<NaiveDate>) -> Result<Vec<Meal>> {
        let inner = self.inner.read().await;
        let mut entries: Vec<&Stored<Meal>> = inner
            .meals
            .values()
            .filter(|stored| stored.record.user_id == user_id)
            .filter(|stored| {
                // Day-granularity comparison against the UTC calendar date
                date.is_none_or(|day| stored.record.date.date_naive() == day)
            })
            .collect();
        entries.sort_by(|a, b| {
            b.record
                .date
                .cmp(&a.record.date)
                .then_with(|| a.seq.cmp(&b.seq))
        });
        Ok(entries.into_iter().map(|stored| stored.record.clone()).collect())
    }

    async fn create_meal(&self, user_id: Uuid, request: CreateMealRequest) -> Result<Meal> {
        let meal = Meal {
            id: Uuid::new_v4(),
            user_id,
            name: request.name,
            meal_type: request.meal_type,
            date: Utc::now(),
            calories: request.calories,
            protein: request.protein,
            carbs: request.carbs,
            fats: request.fats,
        };

        let mut inner = self.inner.write().await;
        let seq = inner.next_seq();
        inner.meals.insert(meal.id, Stored { seq, record: meal.clone() });
        Ok(meal)
    }

    async fn delete_meal(&self, id: Uuid) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.meals.remove(&id);
        Ok(())
    }

    async fn get_weight_entries(&self, user_id: Uuid) -> Result<Vec<WeightEntry>> {
        let inner = self.inner.read().await;
        let mut entries: Vec<&Stored<WeightEntry>> = inner
            .weight_entries
            .values()
            .filter(|stored| stored.record.user_id == user_id)
            .collect();
        // Oldest first, unlike workouts and meals; the dashboard reads the
        // last element as the current weight
        entries.sort_by(|a, b| {
            a.record
                .date
                .cmp(&b.record.date)
                .then_with(|| a.seq.cmp(&b.seq))
        });
        Ok(entries.into_iter().map(|stored| stored.record.clone()).collect())
    }

    async fn create_weight_entry(
        &self,
        user_id: Uuid,
        request: CreateWeightEntryRequest,
    ) -> Result<WeightEntry> {
        let entry = WeightEntry {
            id: Uuid::new_v4(),
            user_id,
            weight: request.weight,
            date: Utc::now(),
        };

        let mut inner = self.inner.write().await;
        let seq = inner.next_seq();
        inner
            .weight_entries
            .insert(entry.id, Stored { seq, record: entry.clone() });
        Ok(entry)
    }

    async fn get_measurements(&self, user_id: Uuid) -> Result<Vec<Measurement>> {
        let inner = self.inner.read().await;
        let mut entries: Vec<&Stored<Measurement>> = inner
            .measurements
            .values()
            .filter(|stored| stored.record.user_id == user_id)
            .collect();
        entries.sort_by(|a, b| {
            b.record
                .date
                .cmp(&a.record.date)
                .then_with(|| a.seq.cmp(&b.seq))
        });
        Ok(entries.into_iter().map(|stored| stored.record.clone()).collect())
    }

    async fn create_measurement(
        &self,
        user_id: Uuid,
        request: CreateMeasurementRequest,
    ) -> Result<Measurement> {
        let measurement = Measurement {
            id: Uuid::new_v4(),
            user_id,
            waist: request.waist,
            chest: request.chest,
            arms: request.arms,
            thighs: request.thighs,
            date: Utc::now(),
        };

        let mut inner = self.inner.write().await;
        let seq = inner.next_seq();
        inner
            .measurements
            .insert(measurement.id, Stored { seq, record: measurement.clone() });
        Ok(measurement)
    }

    async fn get_goals(&self, user_id: Uuid) -> Result<Vec<Goal>> {
        let inner = self.inner.read().await;
        let mut entries: Vec<&Stored<Goal>> = inner
            .goals
            .values()
            .filter(|stored| stored.record.user_id == user_id)
            .collect();
        entries.sort_by(|a, b| {
            a.record
                .target_date
                .cmp(&b.record.target_date)
                .then_with(|| a.seq.cmp(&b.seq))
        });
        Ok(entries.into_iter().map(|stored| stored.record.clone()).collect())
    }

    async fn create_goal(&self, user_id: Uuid, request: CreateGoalRequest) -> Result<Goal> {
        let goal = Goal {
            id: Uuid::new_v4(),
            user_id,
            title: request.title,
            description: request.description,
            target_value: request.target_value,
            current_value: request.current_value.unwrap_or(0.0),
            unit: request.unit,
            target_date: request.target_date,
            completed: request.completed.unwrap_or(false),
        };

        let mut inner = self.inner.write().await;
        let seq = inner.next_seq();
        inner.goals.insert(goal.id, Stored { seq, record: goal.clone() });
        Ok(goal)
    }

    async fn update_goal(&self, id: Uuid, update: UpdateGoalRequest) -> Result<Option<Goal>> {
        let mut inner = self.inner.write().await;
        let Some(stored) = inner.goals.get_mut(&id) else {
            return Ok(None);
        };

        let goal = &mut stored.record;
        if let Some(title) = update.title {
            goal.title = title;
        }
        if let Some(description) = update.description {
            goal.description = description;
        }
        if let Some(target_value) = update.target_value {
            goal.target_value = target_value;
        }
        if let Some(current_value) = update.current_value {
            goal.current_value = current_value;
        }
        if let Some(unit) = update.unit {
            goal.unit = unit;
        }
        if let Some(target_date) = update.target_date {
            goal.target_date = target_date;
        }
        if let Some(completed) = update.completed {
            goal.completed = completed;
        }

        Ok(Some(goal.clone()))
    }
}
