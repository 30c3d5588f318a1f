// ABOUTME: Server resource container and HTTP server assembly
// ABOUTME: Bootstraps the demo user, merges domain routers, and serves with graceful shutdown
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! # Server Resources and HTTP Server
//!
//! [`ServerResources`] is the dependency-injection container shared by all
//! route handlers. [`HttpServer`] assembles the domain routers over it and
//! runs the axum server.

use crate::config::ServerConfig;
use crate::errors::AppError;
use crate::models::CreateUserRequest;
use crate::routes::{
    DashboardRoutes, GoalRoutes, HealthRoutes, MealRoutes, MeasurementRoutes, WeightRoutes,
    WorkoutRoutes,
};
use crate::storage::{Storage, StorageProvider};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use uuid::Uuid;

/// Placeholder credential for the bootstrapped demo account. There is no
/// login flow; the account only anchors data ownership.
const DEMO_USER_PASSWORD: &str = "demo-password";

/// Centralized resource container for dependency injection
///
/// Holds the shared server resources so handlers never recreate storage or
/// configuration.
#[derive(Clone)]
pub struct ServerResources {
    /// Storage backend
    pub storage: Storage,
    /// The account all API requests operate on
    pub demo_user_id: Uuid,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create resources from already-initialized parts
    #[must_use]
    pub const fn new(storage: Storage, demo_user_id: Uuid, config: Arc<ServerConfig>) -> Self {
        Self {
            storage,
            demo_user_id,
            config,
        }
    }

    /// Create resources, creating the demo user if it does not exist yet
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails during bootstrap
    pub async fn bootstrap(storage: Storage, config: Arc<ServerConfig>) -> Result<Self> {
        let demo_user = match storage.get_user_by_username(&config.demo_username).await? {
            Some(user) => user,
            None => {
                let user = storage
                    .create_user(CreateUserRequest {
                        username: config.demo_username.clone(),
                        password: DEMO_USER_PASSWORD.to_owned(),
                    })
                    .await?;
                info!(user.id = %user.id, user.name = %user.username, "Demo user created");
                user
            }
        };

        Ok(Self::new(storage, demo_user.id, config))
    }
}

/// HTTP server over the assembled routers
pub struct HttpServer {
    resources: Arc<ServerResources>,
}

impl HttpServer {
    /// Create a server over the given resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Assemble the full application router with middleware layers
    #[must_use]
    pub fn router(resources: &Arc<ServerResources>) -> Router {
        let timeout = Duration::from_secs(resources.config.request_timeout_secs);

        Router::new()
            .merge(HealthRoutes::routes(resources.clone()))
            .merge(WorkoutRoutes::routes(resources.clone()))
            .merge(MealRoutes::routes(resources.clone()))
            .merge(WeightRoutes::routes(resources.clone()))
            .merge(MeasurementRoutes::routes(resources.clone()))
            .merge(GoalRoutes::routes(resources.clone()))
            .merge(DashboardRoutes::routes(resources.clone()))
            .fallback(fallback_handler)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(TimeoutLayer::new(timeout))
    }

    /// Bind and serve until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if binding or serving fails
    pub async fn run(self) -> Result<()> {
        let addr = format!(
            "{}:{}",
            self.resources.config.host, self.resources.config.http_port
        );
        let listener = TcpListener::bind(&addr).await?;
        info!(
            server.addr = %addr,
            storage.backend = %self.resources.storage.backend_info(),
            "HTTP server listening"
        );

        let router = Self::router(&self.resources);
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("HTTP server stopped");
        Ok(())
    }
}

/// Uniform 404 for unknown paths, matching the JSON error envelope
async fn fallback_handler() -> AppError {
    AppError::not_found("Route")
}

/// Resolve when the process receives a shutdown signal
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
