// ABOUTME: Production server binary for the FitTrack API
// ABOUTME: Loads configuration, bootstraps storage and the demo user, then serves
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! # FitTrack Server Binary
//!
//! Starts the FitTrack REST API: configuration from the environment,
//! storage per the configured backend, a bootstrapped demo account, and
//! optionally a seeded demo history.

use anyhow::Result;
use clap::Parser;
use fittrack::{
    config::ServerConfig,
    logging, seed,
    server::{HttpServer, ServerResources},
    storage::Storage,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "fittrack-server")]
#[command(about = "FitTrack - Personal fitness and nutrition tracking REST API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Populate the demo account with backdated sample data at startup
    #[arg(long)]
    seed_demo_data: bool,

    /// Days of history to generate when seeding
    #[arg(long, default_value = "28")]
    seed_days: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting FitTrack API");
    info!("{}", config.summary());

    // Initialize storage for the configured backend
    let storage = Storage::new(config.storage_backend);
    info!("Storage initialized: {}", storage.backend_info());

    // Bootstrap shared resources, creating the demo user on first start
    let config = Arc::new(config);
    let resources = Arc::new(ServerResources::bootstrap(storage, config.clone()).await?);

    if args.seed_demo_data {
        let summary =
            seed::seed_demo_data(&resources.storage, resources.demo_user_id, args.seed_days)
                .await?;
        info!(
            "Seeded demo history: {} workouts, {} meals, {} weight entries",
            summary.workouts, summary.meals, summary.weight_entries
        );
    }

    display_available_endpoints(&config);

    info!("Ready to serve fitness data!");

    let server = HttpServer::new(resources);
    if let Err(e) = server.run().await {
        error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("Workouts:");
    info!("   List Workouts:     GET    http://{host}:{port}/api/workouts");
    info!("   Create Workout:    POST   http://{host}:{port}/api/workouts");
    info!("   Delete Workout:    DELETE http://{host}:{port}/api/workouts/{{id}}");
    info!("Nutrition:");
    info!("   List Meals:        GET    http://{host}:{port}/api/meals?date=YYYY-MM-DD");
    info!("   Create Meal:       POST   http://{host}:{port}/api/meals");
    info!("   Delete Meal:       DELETE http://{host}:{port}/api/meals/{{id}}");
    info!("Progress:");
    info!("   Weight Entries:    GET    http://{host}:{port}/api/weight");
    info!("   Log Weight:        POST   http://{host}:{port}/api/weight");
    info!("   Measurements:      GET    http://{host}:{port}/api/measurements");
    info!("   Log Measurement:   POST   http://{host}:{port}/api/measurements");
    info!("Goals:");
    info!("   List Goals:        GET    http://{host}:{port}/api/goals");
    info!("   Create Goal:       POST   http://{host}:{port}/api/goals");
    info!("   Update Goal:       PATCH  http://{host}:{port}/api/goals/{{id}}");
    info!("Dashboard & Monitoring:");
    info!("   Dashboard Stats:   GET    http://{host}:{port}/api/dashboard/stats");
    info!("   Health Check:      GET    http://{host}:{port}/health");
    info!("=== End of Endpoint List ===");
}
