// ABOUTME: Geographic data models shared by every pipeline stage
// ABOUTME: GeoPoint, Position, Destination, Route, and PermissionState value types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod geo;
mod permission;
mod route;

pub use geo::{Destination, GeoPoint, Position};
pub use permission::PermissionState;
pub use route::Route;
