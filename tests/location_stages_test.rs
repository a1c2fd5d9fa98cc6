// ABOUTME: Integration tests for the permission gate and location provider stages
// ABOUTME: Verifies single prompting per session, failure classification, and fix validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{point, ScriptedCapability};
use std::sync::Arc;
use wayfinder::errors::PipelineError;
use wayfinder::location::{AccessStatus, CapabilityError, LocationProvider, PermissionGate};
use wayfinder::models::PermissionState;

#[tokio::test]
async fn test_gate_prompts_only_once_per_session() {
    let capability = Arc::new(ScriptedCapability::granted_at(0.0, 0.0));
    let gate = PermissionGate::new(capability.clone());

    assert_eq!(gate.state(), PermissionState::Unknown);
    assert_eq!(gate.request_access().await, PermissionState::Granted);
    assert_eq!(gate.request_access().await, PermissionState::Granted);
    assert_eq!(gate.state(), PermissionState::Granted);
    assert_eq!(capability.access_calls(), 1);
    assert!(gate.detail().is_none());
}

#[tokio::test]
async fn test_gate_denial_is_terminal() {
    let capability = Arc::new(ScriptedCapability::new(
        Ok(AccessStatus::Denied),
        Ok((0.0, 0.0)),
    ));
    let gate = PermissionGate::new(capability.clone());

    assert_eq!(gate.request_access().await, PermissionState::Denied);
    assert_eq!(gate.request_access().await, PermissionState::Denied);
    assert_eq!(capability.access_calls(), 1);
    assert!(gate.detail().is_none());
}

#[tokio::test]
async fn test_gate_maps_capability_failure_to_denied() {
    let capability = Arc::new(ScriptedCapability::new(
        Err(CapabilityError::Unavailable("binder died".to_owned())),
        Ok((0.0, 0.0)),
    ));
    let gate = PermissionGate::new(capability);

    assert_eq!(gate.request_access().await, PermissionState::Denied);
    assert_eq!(
        gate.detail(),
        Some("location capability unavailable: binder died")
    );
}

#[tokio::test]
async fn test_provider_returns_fix_as_position() {
    let capability = Arc::new(ScriptedCapability::granted_at(-23.5, -46.6));
    let provider = LocationProvider::new(capability.clone());

    let position = provider
        .get_current_position(PermissionState::Granted)
        .await
        .unwrap();

    assert_eq!(position.point, point(-23.5, -46.6));
    assert_eq!(capability.fix_calls(), 1);
}

#[tokio::test]
async fn test_provider_requires_granted_permission() {
    let capability = Arc::new(ScriptedCapability::granted_at(-23.5, -46.6));
    let provider = LocationProvider::new(capability.clone());

    for permission in [PermissionState::Unknown, PermissionState::Denied] {
        let result = provider.get_current_position(permission).await;
        assert!(matches!(result, Err(PipelineError::PermissionDenied { .. })));
    }
    assert_eq!(capability.fix_calls(), 0);
}

#[tokio::test]
async fn test_provider_reports_no_fix_without_retry() {
    let capability = Arc::new(ScriptedCapability::new(
        Ok(AccessStatus::Granted),
        Err(CapabilityError::NoFix("radio off".to_owned())),
    ));
    let provider = LocationProvider::new(capability.clone());

    let result = provider.get_current_position(PermissionState::Granted).await;

    assert!(matches!(
        result,
        Err(PipelineError::LocationUnavailable { .. })
    ));
    assert_eq!(capability.fix_calls(), 1);
}

#[tokio::test]
async fn test_provider_rejects_out_of_range_fix() {
    let capability = Arc::new(ScriptedCapability::granted_at(95.0, 10.0));
    let provider = LocationProvider::new(capability);

    let result = provider.get_current_position(PermissionState::Granted).await;

    assert!(matches!(
        result,
        Err(PipelineError::LocationUnavailable { .. })
    ));
}
