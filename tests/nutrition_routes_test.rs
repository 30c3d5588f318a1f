// ABOUTME: Integration tests for the meal REST endpoints
// ABOUTME: Exercises creation, day filtering, validation failures and deletion
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use chrono::{Duration, Utc};
use serde_json::json;

#[tokio::test]
async fn test_create_and_list_meals() -> Result<()> {
    let (_resources, router) = common::create_test_app().await?;

    let (status, body) = common::post(
        &router,
        "/api/meals",
        json!({
            "name": "Grilled Chicken Salad",
            "type": "lunch",
            "calories": 520,
            "protein": 42.0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "lunch");
    assert_eq!(body["protein"], 42.0);
    // Unsupplied macros stay absent rather than zero
    assert!(body.get("carbs").is_none());
    assert!(body.get("fats").is_none());

    let (status, body) = common::get(&router, "/api/meals").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_unknown_meal_type_is_bad_request() -> Result<()> {
    let (_resources, router) = common::create_test_app().await?;

    let (status, _body) = common::post(
        &router,
        "/api/meals",
        json!({"name": "Brunch Special", "type": "brunch", "calories": 700}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_day_filter_returns_only_that_day() -> Result<()> {
    let (resources, router) = common::create_test_app().await?;
    let user_id = resources.demo_user_id;
    let now = Utc::now();

    common::seed_meal_at(&resources.storage, user_id, "today-breakfast", 400, now).await;
    common::seed_meal_at(
        &resources.storage,
        user_id,
        "yesterday-dinner",
        800,
        now - Duration::days(1),
    )
    .await;

    let today = now.date_naive().format("%Y-%m-%d");
    let (status, body) = common::get(&router, &format!("/api/meals?date={today}")).await;
    assert_eq!(status, StatusCode::OK);
    let meals = body.as_array().unwrap();
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0]["name"], "today-breakfast");

    // Without the filter both show up
    let (_, body) = common::get(&router, "/api/meals").await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_malformed_date_filter_is_bad_request() -> Result<()> {
    let (_resources, router) = common::create_test_app().await?;

    let (status, body) = common::get(&router, "/api/meals?date=yesterday").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    Ok(())
}

#[tokio::test]
async fn test_delete_meal_is_idempotent() -> Result<()> {
    let (_resources, router) = common::create_test_app().await?;

    let (_, created) = common::post(
        &router,
        "/api/meals",
        json!({"name": "Protein Shake", "type": "snack", "calories": 220}),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_owned();

    for _ in 0..2 {
        let (status, body) =
            common::send_request(&router, Method::DELETE, &format!("/api/meals/{id}"), None)
                .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Meal deleted successfully");
    }

    let (_, body) = common::get(&router, "/api/meals").await;
    assert!(body.as_array().unwrap().is_empty());
    Ok(())
}
