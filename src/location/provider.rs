// ABOUTME: Location provider that takes a single position fix once access is granted
// ABOUTME: Classifies missing or invalid fixes as LocationUnavailable with no retry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::capability::LocationCapability;
use crate::errors::PipelineError;
use crate::models::{GeoPoint, PermissionState, Position};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Obtains one current position from the platform capability
pub struct LocationProvider {
    capability: Arc<dyn LocationCapability>,
}

impl LocationProvider {
    /// Create a provider over the given capability
    #[must_use]
    pub fn new(capability: Arc<dyn LocationCapability>) -> Self {
        Self { capability }
    }

    /// Take a single fix
    ///
    /// Any fix the capability returns is accepted as-is, as long as its
    /// coordinates are valid.
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` if `permission` is not `Granted` (the
    /// capability is not called), or `LocationUnavailable` if the capability
    /// reports no fix or a fix outside the valid coordinate range.
    #[instrument(skip(self), fields(stage = "location"))]
    pub async fn get_current_position(
        &self,
        permission: PermissionState,
    ) -> Result<Position, PipelineError> {
        if permission != PermissionState::Granted {
            return Err(PipelineError::permission_denied(Some(format!(
                "position requested with permission {permission:?}"
            ))));
        }

        let fix = self.capability.current_fix().await.map_err(|e| {
            warn!("No position fix: {e}");
            PipelineError::location_unavailable(e.to_string())
        })?;

        let point = GeoPoint::new(fix.latitude, fix.longitude).map_err(|e| {
            warn!("Discarding invalid fix: {e}");
            PipelineError::location_unavailable(e.message)
        })?;

        info!(lat = %point.latitude(), lon = %point.longitude(), "Position acquired");
        Ok(Position::new(point, fix.timestamp))
    }
}
