// ABOUTME: Async trait modelling the platform permission and positioning subsystem
// ABOUTME: Raw capability results before they are classified into pipeline outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Answer to a foreground location access request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStatus {
    /// User or platform allowed access
    Granted,
    /// User or platform refused access
    Denied,
}

/// Raw fix as reported by the platform, not yet range-checked
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fix {
    /// Reported latitude
    pub latitude: f64,
    /// Reported longitude
    pub longitude: f64,
    /// Acquisition time
    pub timestamp: DateTime<Utc>,
}

/// Failures raised by the platform capability itself
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CapabilityError {
    /// Location services are switched off on the device
    #[error("location services are disabled")]
    ServiceDisabled,

    /// The capability could not be queried
    #[error("location capability unavailable: {0}")]
    Unavailable(String),

    /// The hardware produced no fix
    #[error("no position fix: {0}")]
    NoFix(String),
}

/// Platform permission/location subsystem
///
/// Implementations wrap whatever the host platform offers. Each call is a
/// suspension point; implementations are not expected to retry.
#[async_trait]
pub trait LocationCapability: Send + Sync {
    /// Trigger the platform's foreground access prompt (or return the remembered answer)
    async fn request_foreground_access(&self) -> Result<AccessStatus, CapabilityError>;

    /// Obtain one current fix
    async fn current_fix(&self) -> Result<Fix, CapabilityError>;
}
