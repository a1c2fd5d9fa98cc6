// ABOUTME: Main library entry point for the Wayfinder routing pipeline
// ABOUTME: Acquires a device position, resolves a driving route, and builds the map scene
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Wayfinder
//!
//! Acquires the device's current position, asks an OSRM routing service for
//! a driving route to a fixed destination, and turns the result into a map
//! scene (markers plus route polyline) for a rendering sink.
//!
//! ## Architecture
//!
//! - **Location**: `PermissionGate` and `LocationProvider` over a platform capability
//! - **Routing**: `RouteResolver` trait and the OSRM HTTP implementation
//! - **Pipeline**: session state machine and controller
//! - **Render**: loading/error/map views and render sinks
//! - **Config**: environment configuration for the application shell
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wayfinder::location::FixedLocationCapability;
//! use wayfinder::models::Destination;
//! use wayfinder::pipeline::run_pipeline;
//! use wayfinder::render::SessionView;
//! use wayfinder::routing::OsrmRouteResolver;
//!
//! #[tokio::main]
//! async fn main() {
//!     let session = run_pipeline(
//!         Arc::new(FixedLocationCapability::granted(-23.5, -46.6)),
//!         Arc::new(OsrmRouteResolver::new()),
//!         Destination::default(),
//!     )
//!     .await;
//!
//!     println!("{:?}", SessionView::from_session(&session));
//! }
//! ```

/// Environment configuration for the application shell
pub mod config;

/// Application constants
pub mod constants;

/// Unified error types
pub mod errors;

/// Device permission and position acquisition
pub mod location;

/// Structured logging setup
pub mod logging;

/// Geographic data models
pub mod models;

/// Session state machine and pipeline controller
pub mod pipeline;

/// Map scene, session views, and render sinks
pub mod render;

/// Route resolution against the routing service
pub mod routing;

/// Shared utilities
pub mod utils;
