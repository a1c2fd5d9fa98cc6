// ABOUTME: Core types and constants for the Wayfinder routing pipeline
// ABOUTME: Foundation crate with the geographic data model, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Wayfinder Core
//!
//! Foundation crate providing shared types and constants for the Wayfinder
//! pipeline. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the stage-level `PipelineError`
//! - **models**: `GeoPoint`, `Position`, `Destination`, `Route`, `PermissionState`
//! - **constants**: Routing service defaults, default destination, and map styling

/// Unified error handling system with standard error codes and pipeline failures
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core geographic data models
pub mod models;
