// ABOUTME: Main library entry point for the FitTrack API
// ABOUTME: Provides a REST API for personal fitness and nutrition tracking
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

#![deny(unsafe_code)]

//! # FitTrack
//!
//! A personal fitness and nutrition tracking service: a REST API for
//! logging workouts, meals, body-weight, measurements and goals, backed by
//! a pluggable storage layer and a dashboard statistics aggregator.
//!
//! ## Architecture
//!
//! The server follows a modular architecture:
//! - **Models**: typed records for the six entity kinds
//! - **Storage**: the `StorageProvider` contract and its in-memory backend
//! - **Stats**: read-only dashboard aggregation over storage queries
//! - **Routes**: axum routers per domain with boundary validation
//! - **Server**: resource container, router assembly and serving
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fittrack::config::ServerConfig;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ServerConfig::from_env()?;
//! println!("FitTrack configured for port {}", config.http_port);
//! # Ok(())
//! # }
//! ```

/// Configuration management and environment parsing
pub mod config;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// Common data models for fitness and nutrition records
pub mod models;

/// `HTTP` routes for the REST API surface
pub mod routes;

/// Demo data seeding for fresh in-memory deployments
pub mod seed;

/// Server resource container and HTTP server assembly
pub mod server;

/// Dashboard statistics aggregation
pub mod stats;

/// Storage abstraction layer with pluggable backends
pub mod storage;
