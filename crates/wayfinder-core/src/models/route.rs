// ABOUTME: Ordered route geometry produced by the routing stage
// ABOUTME: Replaced wholesale on each resolution, empty when no route is available
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::GeoPoint;
use serde::{Deserialize, Serialize};

/// Ordered path from origin to destination
///
/// Vertex order is traversal order. An empty route means either that no route
/// has been resolved yet or that resolution failed or found nothing drivable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Route {
    points: Vec<GeoPoint>,
    /// Total driving distance reported by the routing service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
    /// Expected travel time reported by the routing service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
}

impl Route {
    /// The "no route" value
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Route over the given vertices, without summary figures
    #[must_use]
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self {
            points,
            distance_meters: None,
            duration_seconds: None,
        }
    }

    /// Attach the distance/duration summary
    #[must_use]
    pub fn with_summary(
        mut self,
        distance_meters: Option<f64>,
        duration_seconds: Option<f64>,
    ) -> Self {
        self.distance_meters = distance_meters;
        self.duration_seconds = duration_seconds;
        self
    }

    /// Path vertices in traversal order
    #[must_use]
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Whether there is nothing to draw
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of vertices
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }
}
