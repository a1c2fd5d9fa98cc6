// ABOUTME: Validated geographic coordinate and position value types
// ABOUTME: Enforces latitude/longitude ranges at construction and deserialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::destination;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the globe in decimal degrees
///
/// Latitude is always within `[-90, 90]` and longitude within `[-180, 180]`;
/// the only way to build one is through [`GeoPoint::new`], which rejects
/// anything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawGeoPoint {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = AppError;

    fn try_from(raw: RawGeoPoint) -> AppResult<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl GeoPoint {
    /// Create a validated point
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if either coordinate is non-finite or outside its range
    pub fn new(latitude: f64, longitude: f64) -> AppResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::out_of_range(format!(
                "latitude {latitude} is outside [-90, 90]"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::out_of_range(format!(
                "longitude {longitude} is outside [-180, 180]"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Build a point from a `[longitude, latitude]` pair as routing services encode them
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the swapped coordinates are invalid
    pub fn from_lon_lat(longitude: f64, latitude: f64) -> AppResult<Self> {
        Self::new(latitude, longitude)
    }

    /// Latitude in decimal degrees
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// The fixed point every route ends at
///
/// Chosen once at process start and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Destination(GeoPoint);

impl Destination {
    /// Wrap a point as the session destination
    #[must_use]
    pub const fn new(point: GeoPoint) -> Self {
        Self(point)
    }

    /// The destination coordinates
    #[must_use]
    pub const fn point(&self) -> GeoPoint {
        self.0
    }
}

impl Default for Destination {
    fn default() -> Self {
        Self(GeoPoint {
            latitude: destination::LATITUDE,
            longitude: destination::LONGITUDE,
        })
    }
}

/// A single measured device position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Where the device was
    pub point: GeoPoint,
    /// When the fix was taken
    pub timestamp: DateTime<Utc>,
}

impl Position {
    /// Create a position from a point and acquisition time
    #[must_use]
    pub const fn new(point: GeoPoint, timestamp: DateTime<Utc>) -> Self {
        Self { point, timestamp }
    }
}
