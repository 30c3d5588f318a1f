// ABOUTME: Integration tests for the dashboard stats endpoint and health checks
// ABOUTME: Exercises the aggregated snapshot over seeded storage state
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use axum::http::StatusCode;
use chrono::{Duration, Utc};

#[tokio::test]
async fn test_stats_on_fresh_store() -> Result<()> {
    let (_resources, router) = common::create_test_app().await?;

    let (status, body) = common::get(&router, "/api/dashboard/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["todayCalories"], 0);
    assert_eq!(body["weeklyWorkouts"], 0);
    assert_eq!(body["streak"], 0);
    // Serialized as an explicit null so dashboard cards can show a dash
    assert!(body["currentWeight"].is_null());
    Ok(())
}

#[tokio::test]
async fn test_stats_reflect_seeded_history() -> Result<()> {
    let (resources, router) = common::create_test_app().await?;
    let user_id = resources.demo_user_id;
    let now = Utc::now();

    common::seed_workout_at(&resources.storage, user_id, "today", now).await;
    common::seed_workout_at(
        &resources.storage,
        user_id,
        "yesterday",
        now - Duration::days(1),
    )
    .await;
    common::seed_meal_at(&resources.storage, user_id, "breakfast", 420, now).await;
    common::seed_meal_at(&resources.storage, user_id, "lunch", 520, now).await;
    common::seed_weight_at(&resources.storage, user_id, 181.4, now - Duration::hours(2)).await;

    let (status, body) = common::get(&router, "/api/dashboard/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["todayCalories"], 940);
    assert_eq!(body["weeklyWorkouts"], 2);
    assert_eq!(body["streak"], 2);
    assert_eq!(body["currentWeight"], 181.4);
    Ok(())
}

#[tokio::test]
async fn test_health_and_ready_endpoints() -> Result<()> {
    let (_resources, router) = common::create_test_app().await?;

    let (status, body) = common::get(&router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = common::get(&router, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    Ok(())
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() -> Result<()> {
    let (_resources, router) = common::create_test_app().await?;

    let (status, body) = common::get(&router, "/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
    Ok(())
}
