// ABOUTME: Application constants for routing defaults, destination, and map presentation
// ABOUTME: Centralizes wire-protocol parameters and marker styling values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Routing service (OSRM) wire-protocol constants
pub mod routing {
    /// Public OSRM demo server
    pub const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";
    /// Routing profile used for car routes
    pub const DEFAULT_PROFILE: &str = "driving";
    /// Service display name used in logs and error messages
    pub const SERVICE_NAME: &str = "OSRM";
    /// Query string requesting the full overview as `GeoJSON` coordinate lists
    pub const ROUTE_QUERY: &str = "overview=full&geometries=geojson";
}

/// Fixed destination the pipeline routes to unless overridden at startup
pub mod destination {
    /// Destination latitude
    pub const LATITUDE: f64 = -23.54;
    /// Destination longitude
    pub const LONGITUDE: f64 = -46.36;
}

/// Map scene presentation values
pub mod map {
    /// Initial region latitude span
    pub const LATITUDE_DELTA: f64 = 0.0;
    /// Initial region longitude span
    pub const LONGITUDE_DELTA: f64 = 0.0;
    /// Marker icon size in points
    pub const MARKER_ICON_SIZE: u32 = 40;
    /// Destination marker icon
    pub const DESTINATION_ICON: &str = "home";
    /// Destination marker color
    pub const DESTINATION_COLOR: &str = "blue";
    /// Origin marker icon
    pub const ORIGIN_ICON: &str = "bus";
    /// Origin marker color
    pub const ORIGIN_COLOR: &str = "yellow";
    /// Title shown on both markers
    pub const MARKER_TITLE: &str = "You are here";
    /// Description shown on both markers
    pub const MARKER_DESCRIPTION: &str = "Your name";
    /// Route polyline stroke width
    pub const ROUTE_STROKE_WIDTH: u32 = 4;
    /// Route polyline stroke color
    pub const ROUTE_STROKE_COLOR: &str = "blue";
}

/// Service names for structured logging
pub mod service_names {
    /// Wayfinder pipeline binary
    pub const WAYFINDER: &str = "wayfinder";
}

/// Project metadata constants
pub mod project {
    /// Project name
    pub const NAME: &str = "Wayfinder";
    /// Project version (synced from Cargo.toml at compile time)
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    /// Project repository URL (synced from Cargo.toml at compile time)
    pub const REPOSITORY_URL: &str = env!("CARGO_PKG_REPOSITORY");

    /// Builds the HTTP User-Agent string for external API requests
    ///
    /// Format: `Wayfinder/{version} ({repository_url})`
    #[must_use]
    pub fn user_agent() -> String {
        format!("{NAME}/{VERSION} ({REPOSITORY_URL})")
    }
}
