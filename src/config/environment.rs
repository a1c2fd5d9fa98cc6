// ABOUTME: Environment-based configuration for the routing service, HTTP client, and destination
// ABOUTME: Parses and validates WAYFINDER_* variables with defaults matching the public OSRM server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{destination, routing};
use crate::errors::{AppError, AppResult};
use crate::models::{Destination, GeoPoint};
use crate::routing::OsrmRouteResolver;
use crate::utils::http_client::{
    create_client_with_timeout, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};
use serde::Serialize;
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Routing service endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutingConfig {
    /// OSRM base URL
    pub base_url: String,
    /// OSRM profile (`driving`, `cycling`, `foot`)
    pub profile: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            base_url: routing::DEFAULT_BASE_URL.to_owned(),
            profile: routing::DEFAULT_PROFILE.to_owned(),
        }
    }
}

/// Network-layer timeouts for outbound requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Complete shell configuration
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct WayfinderConfig {
    /// Routing endpoint
    pub routing: RoutingConfig,
    /// HTTP client timeouts
    pub http: HttpClientConfig,
    /// Fixed destination for the session
    pub destination: Destination,
}

impl WayfinderConfig {
    /// Load configuration from environment variables
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `WAYFINDER_ROUTING_BASE_URL` | `https://router.project-osrm.org` |
    /// | `WAYFINDER_ROUTING_PROFILE` | `driving` |
    /// | `WAYFINDER_DESTINATION_LAT` | `-23.54` |
    /// | `WAYFINDER_DESTINATION_LON` | `-46.36` |
    /// | `WAYFINDER_HTTP_TIMEOUT_SECS` | `30` |
    /// | `WAYFINDER_HTTP_CONNECT_TIMEOUT_SECS` | `10` |
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a variable is set but cannot be parsed,
    /// or if the destination is outside the valid coordinate range
    pub fn from_env() -> AppResult<Self> {
        let routing = RoutingConfig {
            base_url: env_var_or("WAYFINDER_ROUTING_BASE_URL", routing::DEFAULT_BASE_URL),
            profile: env_var_or("WAYFINDER_ROUTING_PROFILE", routing::DEFAULT_PROFILE),
        };

        let http = HttpClientConfig {
            timeout_secs: parse_env("WAYFINDER_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            connect_timeout_secs: parse_env(
                "WAYFINDER_HTTP_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        };
        if http.timeout_secs == 0 || http.connect_timeout_secs == 0 {
            return Err(AppError::config("HTTP timeouts must be greater than zero"));
        }

        let latitude = parse_env("WAYFINDER_DESTINATION_LAT", destination::LATITUDE)?;
        let longitude = parse_env("WAYFINDER_DESTINATION_LON", destination::LONGITUDE)?;
        let destination = GeoPoint::new(latitude, longitude)
            .map(Destination::new)
            .map_err(|e| AppError::config(format!("invalid destination: {}", e.message)))?;

        Ok(Self {
            routing,
            http,
            destination,
        })
    }

    /// Build the OSRM resolver described by this configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the routing base URL or profile is invalid
    pub fn route_resolver(&self) -> AppResult<OsrmRouteResolver> {
        let client =
            create_client_with_timeout(self.http.timeout_secs, self.http.connect_timeout_secs);
        OsrmRouteResolver::with_config(client, &self.routing.base_url, &self.routing.profile)
            .map_err(|e| AppError::config(format!("WAYFINDER_ROUTING_*: {}", e.message)))
    }

    /// One-line human-readable summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "routing={}/{} destination={} timeout={}s connect_timeout={}s",
            self.routing.base_url,
            self.routing.profile,
            self.destination.point(),
            self.http.timeout_secs,
            self.http.connect_timeout_secs
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("{key}='{raw}' is invalid: {e}"))),
        Err(_) => Ok(default),
    }
}
