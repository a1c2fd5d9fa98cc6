// ABOUTME: Configuration management module for the application shell
// ABOUTME: Environment-only configuration for routing, HTTP client, and destination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Wayfinder
//!
//! The pipeline itself reads no environment; the shell loads a
//! [`WayfinderConfig`] once at startup and wires the stages from it.

/// Environment configuration
pub mod environment;

pub use environment::{HttpClientConfig, RoutingConfig, WayfinderConfig};
