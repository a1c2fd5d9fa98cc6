// ABOUTME: Location capability answering from configured values instead of device hardware
// ABOUTME: Backs the command-line shell and any host without a positioning subsystem
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::capability::{AccessStatus, CapabilityError, Fix, LocationCapability};
use async_trait::async_trait;
use chrono::Utc;

/// Capability that reports a preset access status and an optional preset fix
///
/// Each fix is stamped with the time it was requested.
#[derive(Debug, Clone)]
pub struct FixedLocationCapability {
    access: AccessStatus,
    coordinates: Option<(f64, f64)>,
}

impl FixedLocationCapability {
    /// Grant access and report the given coordinates
    #[must_use]
    pub const fn granted(latitude: f64, longitude: f64) -> Self {
        Self {
            access: AccessStatus::Granted,
            coordinates: Some((latitude, longitude)),
        }
    }

    /// Grant access but never produce a fix
    #[must_use]
    pub const fn without_fix() -> Self {
        Self {
            access: AccessStatus::Granted,
            coordinates: None,
        }
    }

    /// Refuse access
    #[must_use]
    pub const fn denied() -> Self {
        Self {
            access: AccessStatus::Denied,
            coordinates: None,
        }
    }
}

#[async_trait]
impl LocationCapability for FixedLocationCapability {
    async fn request_foreground_access(&self) -> Result<AccessStatus, CapabilityError> {
        Ok(self.access)
    }

    async fn current_fix(&self) -> Result<Fix, CapabilityError> {
        self.coordinates
            .map(|(latitude, longitude)| Fix {
                latitude,
                longitude,
                timestamp: Utc::now(),
            })
            .ok_or_else(|| CapabilityError::NoFix("no coordinates configured".to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_granted_reports_configured_fix() {
        let capability = FixedLocationCapability::granted(-23.5, -46.6);
        assert_eq!(
            capability.request_foreground_access().await.unwrap(),
            AccessStatus::Granted
        );
        let fix = capability.current_fix().await.unwrap();
        assert!((fix.latitude + 23.5).abs() < f64::EPSILON);
        assert!((fix.longitude + 46.6).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_without_fix_fails_fix() {
        let capability = FixedLocationCapability::without_fix();
        assert!(matches!(
            capability.current_fix().await,
            Err(CapabilityError::NoFix(_))
        ));
    }
}
