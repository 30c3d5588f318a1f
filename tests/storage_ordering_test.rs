// ABOUTME: Tests for list ordering conventions and the meal day filter
// ABOUTME: Uses seeded backdated records to pin sort directions and boundaries
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use fittrack::models::{CreateGoalRequest, Measurement};
use fittrack::storage::StorageProvider;
use uuid::Uuid;

#[tokio::test]
async fn test_workouts_list_most_recent_first() -> Result<()> {
    let storage = common::create_test_storage();
    let user = common::create_test_user(&storage).await?;
    let base = Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap();

    // Seed out of chronological order on purpose
    common::seed_workout_at(&storage, user.id, "middle", base + Duration::days(1)).await;
    common::seed_workout_at(&storage, user.id, "oldest", base).await;
    common::seed_workout_at(&storage, user.id, "newest", base + Duration::days(2)).await;

    let names: Vec<String> = storage
        .get_workouts(user.id)
        .await?
        .into_iter()
        .map(|w| w.name)
        .collect();
    assert_eq!(names, ["newest", "middle", "oldest"]);
    Ok(())
}

#[tokio::test]
async fn test_meals_list_most_recent_first() -> Result<()> {
    let storage = common::create_test_storage();
    let user = common::create_test_user(&storage).await?;
    let base = Utc.with_ymd_and_hms(2024, 4, 1, 8, 0, 0).unwrap();

    common::seed_meal_at(&storage, user.id, "breakfast", 400, base).await;
    common::seed_meal_at(&storage, user.id, "dinner", 700, base + Duration::hours(11)).await;
    common::seed_meal_at(&storage, user.id, "lunch", 600, base + Duration::hours(4)).await;

    let names: Vec<String> = storage
        .get_meals(user.id, None)
        .await?
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, ["dinner", "lunch", "breakfast"]);
    Ok(())
}

#[tokio::test]
async fn test_weight_entries_list_oldest_first() -> Result<()> {
    let storage = common::create_test_storage();
    let user = common::create_test_user(&storage).await?;
    let base = Utc.with_ymd_and_hms(2024, 4, 1, 7, 0, 0).unwrap();

    common::seed_weight_at(&storage, user.id, 181.0, base + Duration::days(7)).await;
    common::seed_weight_at(&storage, user.id, 183.0, base).await;
    common::seed_weight_at(&storage, user.id, 180.0, base + Duration::days(14)).await;

    let weights: Vec<f64> = storage
        .get_weight_entries(user.id)
        .await?
        .into_iter()
        .map(|e| e.weight)
        .collect();
    // Ascending by date, deliberately opposite to workouts and meals
    assert_eq!(weights, [183.0, 181.0, 180.0]);
    Ok(())
}

#[tokio::test]
async fn test_measurements_list_most_recent_first() -> Result<()> {
    let storage = common::create_test_storage();
    let user = common::create_test_user(&storage).await?;
    let base = Utc.with_ymd_and_hms(2024, 4, 1, 7, 0, 0).unwrap();
    let memory = storage.as_memory().unwrap();

    for (offset, waist) in [(0_i64, 35.0), (14, 34.5), (7, 34.75)] {
        memory
            .seed_measurement(Measurement {
                id: Uuid::new_v4(),
                user_id: user.id,
                waist: Some(waist),
                chest: None,
                arms: None,
                thighs: None,
                date: base + Duration::days(offset),
            })
            .await;
    }

    let waists: Vec<Option<f64>> = storage
        .get_measurements(user.id)
        .await?
        .into_iter()
        .map(|m| m.waist)
        .collect();
    assert_eq!(waists, [Some(34.5), Some(34.75), Some(35.0)]);
    Ok(())
}

#[tokio::test]
async fn test_goals_list_by_target_date_ascending() -> Result<()> {
    let storage = common::create_test_storage();
    let user = common::create_test_user(&storage).await?;
    let base = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

    // No seeding needed: target dates are client-supplied and preserved
    for (title, offset) in [("late", 90_i64), ("soon", 30), ("middle", 60)] {
        let created = storage
            .create_goal(
                user.id,
                CreateGoalRequest {
                    title: title.to_owned(),
                    description: None,
                    target_value: 100.0,
                    current_value: None,
                    unit: "lbs".to_owned(),
                    target_date: base + Duration::days(offset),
                    completed: None,
                },
            )
            .await?;
        assert_eq!(created.target_date, base + Duration::days(offset));
    }

    let titles: Vec<String> = storage
        .get_goals(user.id)
        .await?
        .into_iter()
        .map(|g| g.title)
        .collect();
    assert_eq!(titles, ["soon", "middle", "late"]);
    Ok(())
}

#[tokio::test]
async fn test_exercises_list_in_insertion_order() -> Result<()> {
    let storage = common::create_test_storage();
    let user = common::create_test_user(&storage).await?;
    let workout = common::seed_workout_at(&storage, user.id, "Push Day", Utc::now()).await;

    for name in ["Bench Press", "Incline Press", "Flyes", "Pushups"] {
        common::seed_exercise(&storage, workout, name).await;
    }

    let names: Vec<String> = storage
        .get_exercises_by_workout(workout)
        .await?
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, ["Bench Press", "Incline Press", "Flyes", "Pushups"]);
    Ok(())
}

#[tokio::test]
async fn test_meal_day_filter_boundaries() -> Result<()> {
    let storage = common::create_test_storage();
    let user = common::create_test_user(&storage).await?;
    let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

    common::seed_meal_at(
        &storage,
        user.id,
        "first-minute",
        300,
        Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap(),
    )
    .await;
    common::seed_meal_at(
        &storage,
        user.id,
        "last-minute",
        400,
        Utc.with_ymd_and_hms(2024, 3, 15, 23, 59, 59).unwrap(),
    )
    .await;
    common::seed_meal_at(
        &storage,
        user.id,
        "previous-day",
        500,
        Utc.with_ymd_and_hms(2024, 3, 14, 23, 59, 0).unwrap(),
    )
    .await;
    common::seed_meal_at(
        &storage,
        user.id,
        "next-day",
        600,
        Utc.with_ymd_and_hms(2024, 3, 16, 0, 0, 0).unwrap(),
    )
    .await;

    let filtered = storage.get_meals(user.id, Some(day)).await?;
    let names: Vec<String> = filtered.into_iter().map(|m| m.name).collect();
    assert_eq!(names, ["last-minute", "first-minute"]);
    Ok(())
}
