// ABOUTME: Demo data seeder for dashboard and UI development
// ABOUTME: Generates a realistic backdated history for the demo account

//! Demo data seeding
//!
//! Populates the demo account with a few weeks of backdated workouts,
//! meals, weight entries, measurements and goals so the dashboard has
//! something to show on a fresh start. Seeding runs inside the server
//! process (`fittrack-server --seed-demo-data`) because in-memory storage
//! dies with the process.
//!
//! Backdating goes through the in-memory backend's seeding helpers; the
//! public storage trait stamps dates server-side and cannot create
//! history.

use crate::models::{
    CreateGoalRequest, Exercise, Meal, MealType, Measurement, WeightEntry, Workout,
};
use crate::storage::{Storage, StorageProvider};
use anyhow::{anyhow, Result};
use chrono::{Duration, Utc};
use tracing::info;
use uuid::Uuid;

/// Counts of the records a seeding run created
#[derive(Debug, Default)]
pub struct SeedSummary {
    pub workouts: u32,
    pub exercises: u32,
    pub meals: u32,
    pub weight_entries: u32,
    pub measurements: u32,
    pub goals: u32,
}

/// Rotating session plan; one entry per training day
const WORKOUT_PLAN: [(&str, i32, &[(&str, i32, i32, Option<f64>)]); 4] = [
    (
        "Push Day",
        55,
        &[
            ("Bench Press", 4, 8, Some(185.0)),
            ("Overhead Press", 3, 10, Some(95.0)),
            ("Tricep Pushdown", 3, 12, Some(50.0)),
        ],
    ),
    (
        "Pull Day",
        50,
        &[
            ("Deadlift", 3, 5, Some(275.0)),
            ("Barbell Row", 4, 8, Some(135.0)),
            ("Bicep Curl", 3, 12, Some(30.0)),
        ],
    ),
    (
        "Leg Day",
        60,
        &[
            ("Back Squat", 4, 6, Some(225.0)),
            ("Romanian Deadlift", 3, 10, Some(155.0)),
            ("Calf Raise", 4, 15, Some(90.0)),
        ],
    ),
    (
        "Conditioning",
        35,
        &[("Rowing Intervals", 6, 1, None), ("Plank", 3, 1, None)],
    ),
];

/// Today's sample meal log
const MEAL_PLAN: [(&str, MealType, i32, f64, f64, f64); 4] = [
    ("Oatmeal with Berries", MealType::Breakfast, 420, 14.0, 68.0, 9.0),
    ("Grilled Chicken Salad", MealType::Lunch, 520, 42.0, 28.0, 22.0),
    ("Salmon with Rice", MealType::Dinner, 640, 38.0, 55.0, 24.0),
    ("Protein Shake", MealType::Snack, 220, 30.0, 12.0, 4.0),
];

/// Populate the demo account with `days` of backdated history
///
/// # Errors
///
/// Returns an error if the configured backend does not support seeding or
/// a storage operation fails
pub async fn seed_demo_data(storage: &Storage, user_id: Uuid, days: u32) -> Result<SeedSummary> {
    let memory = storage
        .as_memory()
        .ok_or_else(|| anyhow!("Demo seeding requires the in-memory storage backend"))?;

    let now = Utc::now();
    let mut summary = SeedSummary::default();

    // Training history: every fourth day is a rest day, so today and
    // yesterday both carry a workout and the dashboard streak is non-zero
    for offset in 0..i64::from(days) {
        if offset % 4 == 3 {
            continue;
        }

        let (name, duration, exercises) = WORKOUT_PLAN[(offset % 4) as usize];
        let workout = Workout {
            id: Uuid::new_v4(),
            user_id,
            name: name.to_owned(),
            duration: Some(duration),
            date: now - Duration::days(offset),
            notes: None,
        };
        let workout_id = workout.id;
        memory.seed_workout(workout).await;
        summary.workouts += 1;

        for (exercise_name, sets, reps, weight) in exercises {
            memory
                .seed_exercise(Exercise {
                    id: Uuid::new_v4(),
                    workout_id,
                    name: (*exercise_name).to_owned(),
                    sets: *sets,
                    reps: *reps,
                    weight: *weight,
                    notes: None,
                })
                .await;
            summary.exercises += 1;
        }
    }

    // Today's nutrition log
    for (name, meal_type, calories, protein, carbs, fats) in MEAL_PLAN {
        memory
            .seed_meal(Meal {
                id: Uuid::new_v4(),
                user_id,
                name: name.to_owned(),
                meal_type,
                date: now,
                calories,
                protein: Some(protein),
                carbs: Some(carbs),
                fats: Some(fats),
            })
            .await;
        summary.meals += 1;
    }

    // Weekly weigh-ins trending down toward today
    let mut weight = 186.0;
    for week in (0..=i64::from(days) / 7).rev() {
        memory
            .seed_weight_entry(WeightEntry {
                id: Uuid::new_v4(),
                user_id,
                weight,
                date: now - Duration::weeks(week),
            })
            .await;
        weight -= 0.8;
        summary.weight_entries += 1;
    }

    // A tape session every other week
    for (index, week) in (0..=i64::from(days) / 7).rev().step_by(2).enumerate() {
        memory
            .seed_measurement(Measurement {
                id: Uuid::new_v4(),
                user_id,
                waist: Some(34.5 - index as f64 * 0.25),
                chest: Some(41.0),
                arms: Some(14.5),
                thighs: None,
                date: now - Duration::weeks(week),
            })
            .await;
        summary.measurements += 1;
    }

    // Goals go through the trait; target dates are client-supplied anyway
    let goals = [
        CreateGoalRequest {
            title: "Bench 225".to_owned(),
            description: Some("Two plates by summer".to_owned()),
            target_value: 225.0,
            current_value: Some(185.0),
            unit: "lbs".to_owned(),
            target_date: now + Duration::days(90),
            completed: None,
        },
        CreateGoalRequest {
            title: "Reach 178 lbs".to_owned(),
            description: None,
            target_value: 178.0,
            current_value: Some(weight + 0.8),
            unit: "lbs".to_owned(),
            target_date: now + Duration::days(60),
            completed: None,
        },
    ];
    for goal in goals {
        storage.create_goal(user_id, goal).await?;
        summary.goals += 1;
    }

    info!(
        seed.workouts = summary.workouts,
        seed.exercises = summary.exercises,
        seed.meals = summary.meals,
        seed.weight_entries = summary.weight_entries,
        seed.measurements = summary.measurements,
        seed.goals = summary.goals,
        "Demo data seeded"
    );

    Ok(summary)
}
