// ABOUTME: Dashboard statistics aggregation over storage queries
// ABOUTME: Computes today's calories, weekly workout count, current weight and streak

//! Dashboard statistics
//!
//! A read-only view over current storage state: no caching, no state of its
//! own, so the service can run concurrently with writers and always reports
//! a consistent snapshot per storage call.

use crate::errors::AppResult;
use crate::storage::StorageProvider;
use chrono::{Duration, NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashSet;
use uuid::Uuid;

/// Dashboard snapshot for a single user
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Calories logged on the current UTC calendar day
    pub today_calories: i64,
    /// Workouts within the last rolling 7 days
    pub weekly_workouts: u32,
    /// Most recent body weight, absent when never logged
    pub current_weight: Option<f64>,
    /// Consecutive calendar days (ending today) with at least one workout
    pub streak: u32,
}

/// Read-model builder composing storage queries into a dashboard snapshot
pub struct StatsService<S> {
    storage: S,
}

impl<S: StorageProvider> StatsService<S> {
    /// Create a stats service over the given storage
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Compute the dashboard snapshot for a user
    ///
    /// # Errors
    ///
    /// Returns an error when a storage query fails
    pub async fn dashboard_stats(&self, user_id: Uuid) -> AppResult<DashboardStats> {
        let now = Utc::now();
        let today = now.date_naive();

        let todays_meals = self.storage.get_meals(user_id, Some(today)).await?;
        let today_calories: i64 = todays_meals.iter().map(|meal| i64::from(meal.calories)).sum();

        // Rolling 7-day window, not calendar-week aligned
        let week_start = now - Duration::days(7);
        let workouts = self.storage.get_workouts(user_id).await?;
        let weekly_workouts = workouts
            .iter()
            .filter(|workout| workout.date >= week_start)
            .count() as u32;

        let weight_entries = self.storage.get_weight_entries(user_id).await?;
        let current_weight = weight_entries.last().map(|entry| entry.weight);

        let workout_dates: HashSet<NaiveDate> = workouts
            .iter()
            .map(|workout| workout.date.date_naive())
            .collect();
        let streak = streak_from_dates(&workout_dates, today);

        Ok(DashboardStats {
            today_calories,
            weekly_workouts,
            current_weight,
            streak,
        })
    }
}

/// Count consecutive days with a workout, walking backward from `today`
///
/// A gap on `today` itself means the streak is 0 even when yesterday had a
/// workout.
fn streak_from_dates(dates: &HashSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut current = today;
    while dates.contains(&current) {
        streak += 1;
        let Some(previous) = current.pred_opt() else {
            break;
        };
        current = previous;
    }
    streak
}
