// ABOUTME: Integration tests for the goal REST endpoints
// ABOUTME: Exercises creation defaults, partial PATCH merging and 404 behavior
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_create_goal_applies_defaults() -> Result<()> {
    let (_resources, router) = common::create_test_app().await?;

    let (status, body) = common::post(
        &router,
        "/api/goals",
        json!({
            "title": "Bench 225",
            "targetValue": 225.0,
            "unit": "lbs",
            "targetDate": "2026-12-01T00:00:00Z"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentValue"], 0.0);
    assert_eq!(body["completed"], false);
    assert!(body.get("description").is_none());
    Ok(())
}

#[tokio::test]
async fn test_patch_merges_partial_update() -> Result<()> {
    let (_resources, router) = common::create_test_app().await?;

    let (_, created) = common::post(
        &router,
        "/api/goals",
        json!({
            "title": "Run 5k",
            "description": "Under 25 minutes",
            "targetValue": 25.0,
            "currentValue": 29.0,
            "unit": "minutes",
            "targetDate": "2026-09-01T00:00:00Z"
        }),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = common::send_request(
        &router,
        Method::PATCH,
        &format!("/api/goals/{id}"),
        Some(json!({"currentValue": 26.5})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentValue"], 26.5);
    // Everything else untouched
    assert_eq!(body["title"], "Run 5k");
    assert_eq!(body["description"], "Under 25 minutes");
    assert_eq!(body["targetValue"], 25.0);
    assert_eq!(body["unit"], "minutes");
    assert_eq!(body["completed"], false);
    Ok(())
}

#[tokio::test]
async fn test_patch_can_complete_a_goal() -> Result<()> {
    let (_resources, router) = common::create_test_app().await?;

    let (_, created) = common::post(
        &router,
        "/api/goals",
        json!({
            "title": "Reach 178 lbs",
            "targetValue": 178.0,
            "unit": "lbs",
            "targetDate": "2026-06-01T00:00:00Z"
        }),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = common::send_request(
        &router,
        Method::PATCH,
        &format!("/api/goals/{id}"),
        Some(json!({"currentValue": 178.0, "completed": true})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completed"], true);
    assert_eq!(body["currentValue"], 178.0);
    Ok(())
}

#[tokio::test]
async fn test_patch_unknown_goal_is_not_found() -> Result<()> {
    let (_resources, router) = common::create_test_app().await?;

    let (status, body) = common::send_request(
        &router,
        Method::PATCH,
        &format!("/api/goals/{}", Uuid::new_v4()),
        Some(json!({"currentValue": 5.0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");

    // A malformed id is an equally unknown goal
    let (status, _) = common::send_request(
        &router,
        Method::PATCH,
        "/api/goals/not-a-uuid",
        Some(json!({"currentValue": 5.0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_goals_list_sorted_by_target_date() -> Result<()> {
    let (_resources, router) = common::create_test_app().await?;

    for (title, date) in [
        ("later", "2027-01-01T00:00:00Z"),
        ("soonest", "2026-03-01T00:00:00Z"),
        ("middle", "2026-08-01T00:00:00Z"),
    ] {
        common::post(
            &router,
            "/api/goals",
            json!({"title": title, "targetValue": 1.0, "unit": "x", "targetDate": date}),
        )
        .await;
    }

    let (status, body) = common::get(&router, "/api/goals").await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["soonest", "middle", "later"]);
    Ok(())
}
