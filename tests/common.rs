// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides storage, resource and request helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fittrack`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use fittrack::{
    config::{ServerConfig, StorageBackend},
    models::{Exercise, Meal, MealType, User, WeightEntry, Workout},
    server::{HttpServer, ServerResources},
    storage::{Storage, StorageProvider},
};
use std::sync::{Arc, Once};
use tower::ServiceExt;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test storage setup
pub fn create_test_storage() -> Storage {
    init_test_logging();
    Storage::new(StorageBackend::Memory)
}

/// Create a standard test user
pub async fn create_test_user(storage: &Storage) -> Result<User> {
    let user = storage
        .create_user(fittrack::models::CreateUserRequest {
            username: format!("test-{}", Uuid::new_v4()),
            password: "test-password".to_owned(),
        })
        .await?;
    Ok(user)
}

/// Complete test environment: resources with a bootstrapped demo user
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    let storage = create_test_storage();
    let config = Arc::new(ServerConfig::default());
    let resources = Arc::new(ServerResources::bootstrap(storage, config).await?);
    Ok(resources)
}

/// Test environment plus the assembled application router
pub async fn create_test_app() -> Result<(Arc<ServerResources>, Router)> {
    let resources = create_test_resources().await?;
    let router = HttpServer::router(&resources);
    Ok((resources, router))
}

/// Insert a backdated workout directly into the in-memory backend
pub async fn seed_workout_at(
    storage: &Storage,
    user_id: Uuid,
    name: &str,
    date: DateTime<Utc>,
) -> Uuid {
    let workout = Workout {
        id: Uuid::new_v4(),
        user_id,
        name: name.to_owned(),
        duration: Some(45),
        date,
        notes: None,
    };
    let id = workout.id;
    storage
        .as_memory()
        .expect("tests run on the in-memory backend")
        .seed_workout(workout)
        .await;
    id
}

/// Insert an exercise under a workout directly into the in-memory backend
pub async fn seed_exercise(storage: &Storage, workout_id: Uuid, name: &str) -> Uuid {
    let exercise = Exercise {
        id: Uuid::new_v4(),
        workout_id,
        name: name.to_owned(),
        sets: 3,
        reps: 10,
        weight: None,
        notes: None,
    };
    let id = exercise.id;
    storage
        .as_memory()
        .expect("tests run on the in-memory backend")
        .seed_exercise(exercise)
        .await;
    id
}

/// Insert a backdated meal directly into the in-memory backend
pub async fn seed_meal_at(
    storage: &Storage,
    user_id: Uuid,
    name: &str,
    calories: i32,
    date: DateTime<Utc>,
) -> Uuid {
    let meal = Meal {
        id: Uuid::new_v4(),
        user_id,
        name: name.to_owned(),
        meal_type: MealType::Lunch,
        date,
        calories,
        protein: None,
        carbs: None,
        fats: None,
    };
    let id = meal.id;
    storage
        .as_memory()
        .expect("tests run on the in-memory backend")
        .seed_meal(meal)
        .await;
    id
}

/// Insert a backdated weight entry directly into the in-memory backend
pub async fn seed_weight_at(storage: &Storage, user_id: Uuid, weight: f64, date: DateTime<Utc>) {
    storage
        .as_memory()
        .expect("tests run on the in-memory backend")
        .seed_weight_entry(WeightEntry {
            id: Uuid::new_v4(),
            user_id,
            weight,
            date,
        })
        .await;
}

/// Send a request through the router and decode the JSON response
pub async fn send_request(
    router: &Router,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}

/// Shorthand for GET requests
pub async fn get(router: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    send_request(router, Method::GET, path, None).await
}

/// Shorthand for POST requests with a JSON body
pub async fn post(
    router: &Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send_request(router, Method::POST, path, Some(body)).await
}
