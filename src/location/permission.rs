// ABOUTME: Permission gate that requests location access at most once per session
// ABOUTME: Maps capability failures to Denied so callers always receive a PermissionState
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::capability::{AccessStatus, LocationCapability};
use crate::models::PermissionState;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone)]
struct Decision {
    state: PermissionState,
    detail: Option<String>,
}

/// Requests location access and remembers the decision for the session
///
/// The first call to [`PermissionGate::request_access`] triggers the platform
/// prompt; every later call returns the same decided state without touching
/// the capability again.
pub struct PermissionGate {
    capability: Arc<dyn LocationCapability>,
    decision: OnceCell<Decision>,
}

impl PermissionGate {
    /// Create a gate over the given capability
    #[must_use]
    pub fn new(capability: Arc<dyn LocationCapability>) -> Self {
        Self {
            capability,
            decision: OnceCell::new(),
        }
    }

    /// Request foreground location access
    ///
    /// Never fails. A capability that cannot be queried yields `Denied`, with
    /// the reason available through [`PermissionGate::detail`].
    #[instrument(skip(self), fields(stage = "permission"))]
    pub async fn request_access(&self) -> PermissionState {
        let decision = self
            .decision
            .get_or_init(|| async {
                match self.capability.request_foreground_access().await {
                    Ok(AccessStatus::Granted) => {
                        info!("Location access granted");
                        Decision {
                            state: PermissionState::Granted,
                            detail: None,
                        }
                    }
                    Ok(AccessStatus::Denied) => {
                        info!("Location access denied by user");
                        Decision {
                            state: PermissionState::Denied,
                            detail: None,
                        }
                    }
                    Err(e) => {
                        warn!("Location access check failed: {e}");
                        Decision {
                            state: PermissionState::Denied,
                            detail: Some(e.to_string()),
                        }
                    }
                }
            })
            .await;

        debug!(state = ?decision.state, "Permission decision");
        decision.state
    }

    /// Current decision without prompting (`Unknown` before the first request)
    #[must_use]
    pub fn state(&self) -> PermissionState {
        self.decision
            .get()
            .map_or(PermissionState::Unknown, |decision| decision.state)
    }

    /// Why access was denied, when the denial came from a failed capability check
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.decision
            .get()
            .and_then(|decision| decision.detail.as_deref())
    }
}
