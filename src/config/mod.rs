// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Handles environment-driven configuration and runtime options
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Configuration module for FitTrack
//!
//! This module provides centralized configuration management:
//!
//! - **Environment**: Server configuration from environment variables

/// Environment and server configuration
pub mod environment;

// Re-export main configuration types from environment
pub use environment::{Environment, LogLevel, ServerConfig, StorageBackend};
