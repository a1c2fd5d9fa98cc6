// ABOUTME: Route resolution between the device position and the fixed destination
// ABOUTME: RouteResolver trait plus the OSRM HTTP implementation and its wire codec
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// OSRM routing service client
pub mod osrm;

pub use osrm::{coordinate_pair_path, decode_route, route_url, OsrmRouteResolver};

use crate::errors::PipelineError;
use crate::models::{GeoPoint, Route};
use async_trait::async_trait;

/// Resolves a driving route between two points
///
/// Each call is independent: one outbound request per call, no caching and
/// no retry.
#[async_trait]
pub trait RouteResolver: Send + Sync {
    /// Resolve a route from `origin` to `destination`
    ///
    /// An empty route is a valid answer when the service finds no drivable path.
    ///
    /// # Errors
    ///
    /// Returns `RouteRequestFailed` on transport failures or non-success
    /// status, and `RouteDataInvalid` when the geometry cannot be decoded.
    async fn resolve_route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<Route, PipelineError>;
}
