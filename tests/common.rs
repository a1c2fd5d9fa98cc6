// ABOUTME: Shared test utilities and doubles for integration tests
// ABOUTME: Provides quiet logging, a scripted location capability, and a recording route resolver
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `wayfinder`

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};
use wayfinder::errors::PipelineError;
use wayfinder::location::{AccessStatus, CapabilityError, Fix, LocationCapability};
use wayfinder::models::{GeoPoint, Route};
use wayfinder::routing::RouteResolver;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Valid point shorthand
pub fn point(latitude: f64, longitude: f64) -> GeoPoint {
    GeoPoint::new(latitude, longitude).unwrap()
}

/// Capability whose answers are fixed up front and whose calls are counted
pub struct ScriptedCapability {
    access: Result<AccessStatus, CapabilityError>,
    fix: Result<(f64, f64), CapabilityError>,
    pub access_calls: AtomicUsize,
    pub fix_calls: AtomicUsize,
}

impl ScriptedCapability {
    pub fn new(
        access: Result<AccessStatus, CapabilityError>,
        fix: Result<(f64, f64), CapabilityError>,
    ) -> Self {
        Self {
            access,
            fix,
            access_calls: AtomicUsize::new(0),
            fix_calls: AtomicUsize::new(0),
        }
    }

    /// Access granted, fix at the given coordinates
    pub fn granted_at(latitude: f64, longitude: f64) -> Self {
        Self::new(Ok(AccessStatus::Granted), Ok((latitude, longitude)))
    }

    pub fn access_calls(&self) -> usize {
        self.access_calls.load(Ordering::SeqCst)
    }

    pub fn fix_calls(&self) -> usize {
        self.fix_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocationCapability for ScriptedCapability {
    async fn request_foreground_access(&self) -> Result<AccessStatus, CapabilityError> {
        self.access_calls.fetch_add(1, Ordering::SeqCst);
        self.access.clone()
    }

    async fn current_fix(&self) -> Result<Fix, CapabilityError> {
        self.fix_calls.fetch_add(1, Ordering::SeqCst);
        self.fix.clone().map(|(latitude, longitude)| Fix {
            latitude,
            longitude,
            timestamp: Utc::now(),
        })
    }
}

/// Resolver returning a preset outcome and recording the arguments it saw
pub struct RecordingResolver {
    outcome: Result<Route, PipelineError>,
    pub calls: Mutex<Vec<(GeoPoint, GeoPoint)>>,
}

impl RecordingResolver {
    pub fn returning(outcome: Result<Route, PipelineError>) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl RouteResolver for RecordingResolver {
    async fn resolve_route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<Route, PipelineError> {
        self.calls.lock().unwrap().push((origin, destination));
        self.outcome.clone()
    }
}
