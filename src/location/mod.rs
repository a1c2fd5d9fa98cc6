// ABOUTME: Device location acquisition: the platform capability seam and the stages built on it
// ABOUTME: PermissionGate decides access once per session, LocationProvider takes a single fix
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Location Acquisition
//!
//! The platform's permission and positioning subsystem is consumed through
//! the [`LocationCapability`] trait. Two pipeline stages sit on top of it:
//!
//! - [`PermissionGate`] asks for foreground access and remembers the answer
//!   for the rest of the session. It never fails: a broken capability check
//!   is reported as `Denied` with a detail.
//! - [`LocationProvider`] takes exactly one fix once access is granted.

/// Platform capability trait and its raw result types
pub mod capability;
/// Capability backed by configured values
pub mod fixed;
/// Session-scoped permission decision
pub mod permission;
/// Single position fix acquisition
pub mod provider;

pub use capability::{AccessStatus, CapabilityError, Fix, LocationCapability};
pub use fixed::FixedLocationCapability;
pub use permission::PermissionGate;
pub use provider::LocationProvider;
