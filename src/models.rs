// ABOUTME: Geographic data models re-exported from wayfinder-core
// ABOUTME: GeoPoint, Position, Destination, Route, and PermissionState
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use wayfinder_core::models::*;
