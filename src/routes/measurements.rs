// ABOUTME: Body measurement route handlers
// ABOUTME: Lists measurements newest-first and logs new measurement sets
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! Body measurement routes

use crate::errors::AppError;
use crate::models::CreateMeasurementRequest;
use crate::server::ServerResources;
use crate::storage::StorageProvider;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Measurement routes implementation
pub struct MeasurementRoutes;

impl MeasurementRoutes {
    /// Create all measurement routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/measurements",
                get(Self::list_measurements).post(Self::create_measurement),
            )
            .with_state(resources)
    }

    /// List the demo user's measurements, most recent first
    async fn list_measurements(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let measurements = resources
            .storage
            .get_measurements(resources.demo_user_id)
            .await?;

        Ok((StatusCode::OK, Json(measurements)).into_response())
    }

    /// Log a measurement set
    async fn create_measurement(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateMeasurementRequest>,
    ) -> Result<Response, AppError> {
        validate_measurement(&request)?;

        let measurement = resources
            .storage
            .create_measurement(resources.demo_user_id, request)
            .await?;

        Ok((StatusCode::OK, Json(measurement)).into_response())
    }
}

/// Validate a measurement payload
fn validate_measurement(request: &CreateMeasurementRequest) -> Result<(), AppError> {
    let sites = [
        ("waist", request.waist),
        ("chest", request.chest),
        ("arms", request.arms),
        ("thighs", request.thighs),
    ];

    if sites.iter().all(|(_, value)| value.is_none()) {
        return Err(AppError::invalid_input(
            "At least one measurement site is required",
        ));
    }

    for (field, value) in sites {
        if let Some(value) = value {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::out_of_range(format!(
                    "{field} must be non-negative"
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_measurement_set() {
        let empty = CreateMeasurementRequest {
            waist: None,
            chest: None,
            arms: None,
            thighs: None,
        };
        assert!(validate_measurement(&empty).is_err());

        let one_site = CreateMeasurementRequest {
            waist: Some(34.0),
            ..empty
        };
        assert!(validate_measurement(&one_site).is_ok());
    }
}
