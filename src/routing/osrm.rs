// ABOUTME: OSRM routing client that requests a driving route as GeoJSON coordinates
// ABOUTME: Builds the lon,lat wire path and decodes the first route's geometry with the axis swap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::RouteResolver;
use crate::constants::routing::{DEFAULT_BASE_URL, DEFAULT_PROFILE, ROUTE_QUERY, SERVICE_NAME};
use crate::errors::{AppError, AppResult, PipelineError};
use crate::models::{GeoPoint, Route};
use crate::utils::http_client::shared_client;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument};
use url::Url;

#[derive(Debug, Deserialize)]
struct OsrmResponse {
    #[serde(default)]
    code: Option<String>,
    // Kept as raw values so only the first candidate is decoded
    #[serde(default)]
    routes: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: Option<OsrmGeometry>,
    distance: Option<f64>,
    duration: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Option<Vec<Vec<f64>>>,
}

/// Serialize origin and destination as the OSRM `{lon},{lat};{lon},{lat}` path segment
///
/// Longitude precedes latitude on the wire.
#[must_use]
pub fn coordinate_pair_path(origin: GeoPoint, destination: GeoPoint) -> String {
    format!(
        "{},{};{},{}",
        wire_degrees(origin.longitude()),
        wire_degrees(origin.latitude()),
        wire_degrees(destination.longitude()),
        wire_degrees(destination.latitude())
    )
}

// -0.0 + 0.0 is +0.0, so signed zero never reaches the wire as "-0"
fn wire_degrees(value: f64) -> f64 {
    value + 0.0
}

/// Full route request URL for the given service base and profile
#[must_use]
pub fn route_url(base_url: &str, profile: &str, origin: GeoPoint, destination: GeoPoint) -> String {
    format!(
        "{}/route/v1/{profile}/{}?{ROUTE_QUERY}",
        base_url.trim_end_matches('/'),
        coordinate_pair_path(origin, destination)
    )
}

/// Decode an OSRM route response body
///
/// A response without routes, or with an empty routes list, decodes to an
/// empty route. Otherwise only the first route is used and every
/// `[longitude, latitude]` pair becomes a `GeoPoint` with the axes swapped.
///
/// # Errors
///
/// Returns `RouteDataInvalid` if the body is not JSON, the first route has no
/// `geometry.coordinates`, or any coordinate is malformed or out of range.
/// Nothing is partially decoded.
pub fn decode_route(body: &str) -> Result<Route, PipelineError> {
    let response: OsrmResponse = serde_json::from_str(body)
        .map_err(|e| PipelineError::route_data_invalid(format!("unreadable response: {e}")))?;

    let Some(first) = response.routes.and_then(|routes| routes.into_iter().next()) else {
        debug!(code = ?response.code, "Routing service returned no routes");
        return Ok(Route::empty());
    };

    let route: OsrmRoute = serde_json::from_value(first)
        .map_err(|e| PipelineError::route_data_invalid(format!("malformed route: {e}")))?;

    let coordinates = route
        .geometry
        .and_then(|geometry| geometry.coordinates)
        .ok_or_else(|| PipelineError::route_data_invalid("missing geometry.coordinates"))?;

    let points = coordinates
        .iter()
        .enumerate()
        .map(|(index, pair)| decode_coordinate(index, pair))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Route::new(points).with_summary(route.distance, route.duration))
}

fn decode_coordinate(index: usize, pair: &[f64]) -> Result<GeoPoint, PipelineError> {
    match pair {
        [longitude, latitude, ..] => GeoPoint::from_lon_lat(*longitude, *latitude).map_err(|e| {
            PipelineError::route_data_invalid(format!("coordinate {index}: {}", e.message))
        }),
        _ => Err(PipelineError::route_data_invalid(format!(
            "coordinate {index} has {} values, expected [longitude, latitude]",
            pair.len()
        ))),
    }
}

/// Route resolver backed by an OSRM HTTP endpoint
pub struct OsrmRouteResolver {
    client: Client,
    base_url: String,
    profile: String,
}

impl OsrmRouteResolver {
    /// Resolver for the public OSRM server using the shared HTTP client
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: shared_client().clone(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            profile: DEFAULT_PROFILE.to_owned(),
        }
    }

    /// Resolver for a custom OSRM deployment
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if `base_url` is not an absolute http(s) URL
    /// or `profile` is empty
    pub fn with_config(client: Client, base_url: &str, profile: &str) -> AppResult<Self> {
        let parsed = Url::parse(base_url).map_err(|e| {
            AppError::invalid_input(format!("invalid routing base URL '{base_url}': {e}"))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::invalid_input(format!(
                "routing base URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }
        if profile.trim().is_empty() {
            return Err(AppError::invalid_input("routing profile must not be empty"));
        }

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            profile: profile.to_owned(),
        })
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Routing profile (e.g. `driving`)
    #[must_use]
    pub fn profile(&self) -> &str {
        &self.profile
    }

    async fn fetch(&self, url: &str) -> Result<String, PipelineError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            PipelineError::route_request_failed(format!(
                "{SERVICE_NAME}: failed to send route request: {e}"
            ))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PipelineError::route_request_failed(format!(
                "{SERVICE_NAME}: route API returned status: {status}"
            )));
        }

        response.text().await.map_err(|e| {
            PipelineError::route_request_failed(format!(
                "{SERVICE_NAME}: failed to read route response: {e}"
            ))
        })
    }
}

impl Default for OsrmRouteResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RouteResolver for OsrmRouteResolver {
    #[instrument(
        skip(self, origin, destination),
        fields(
            service = "osrm",
            api_call = "route",
            profile = %self.profile,
            origin = %origin,
            destination = %destination,
        )
    )]
    async fn resolve_route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<Route, PipelineError> {
        let url = route_url(&self.base_url, &self.profile, origin, destination);
        info!("Requesting route from {SERVICE_NAME}");

        let body = self.fetch(&url).await?;
        let route = decode_route(&body)?;

        info!(vertices = route.len(), "Route resolved");
        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint::new(latitude, longitude).unwrap()
    }

    #[test]
    fn test_pair_path_puts_longitude_first() {
        let origin = point(-23.5, -46.6);
        let destination = point(-23.54, -46.36);
        assert_eq!(
            coordinate_pair_path(origin, destination),
            "-46.6,-23.5;-46.36,-23.54"
        );
    }

    #[test]
    fn test_route_url_matches_wire_format() {
        let url = route_url(
            "https://router.project-osrm.org/",
            "driving",
            point(-23.5, -46.6),
            point(-23.54, -46.36),
        );
        assert_eq!(
            url,
            "https://router.project-osrm.org/route/v1/driving/-46.6,-23.5;-46.36,-23.54?overview=full&geometries=geojson"
        );
    }

    #[test]
    fn test_decode_swaps_coordinate_axes() {
        let body = r#"{"code":"Ok","routes":[{"geometry":{"coordinates":[[10,20],[11,21]]}}]}"#;
        let route = decode_route(body).unwrap();
        assert_eq!(route.points(), &[point(20.0, 10.0), point(21.0, 11.0)]);
    }

    #[test]
    fn test_decode_uses_only_first_route() {
        let body = r#"{"routes":[
            {"geometry":{"coordinates":[[1,2]]},"distance":1200.5,"duration":95.0},
            {"geometry":{"coordinates":[[3,4],[5,6]]}}
        ]}"#;
        let route = decode_route(body).unwrap();
        assert_eq!(route.points(), &[point(2.0, 1.0)]);
        assert_eq!(route.distance_meters, Some(1200.5));
        assert_eq!(route.duration_seconds, Some(95.0));
    }

    #[test]
    fn test_decode_empty_or_missing_routes_is_empty_route() {
        assert!(decode_route(r#"{"routes":[]}"#).unwrap().is_empty());
        assert!(decode_route(r#"{"code":"NoRoute","message":"Impossible route"}"#)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_decode_missing_coordinates_is_invalid() {
        let missing_field = decode_route(r#"{"routes":[{"geometry":{}}]}"#);
        assert!(matches!(
            missing_field,
            Err(PipelineError::RouteDataInvalid { .. })
        ));

        let missing_geometry = decode_route(r#"{"routes":[{"distance":10.0}]}"#);
        assert!(matches!(
            missing_geometry,
            Err(PipelineError::RouteDataInvalid { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_malformed_entries() {
        for body in [
            r#"{"routes":[{"geometry":{"coordinates":[[10,"20"]]}}]}"#,
            r#"{"routes":[{"geometry":{"coordinates":[[10]]}}]}"#,
            r#"{"routes":[{"geometry":{"coordinates":[[10,20],[200,0]]}}]}"#,
            "<html>bad gateway</html>",
        ] {
            assert!(
                matches!(decode_route(body), Err(PipelineError::RouteDataInvalid { .. })),
                "expected RouteDataInvalid for {body}"
            );
        }
    }

    #[test]
    fn test_pair_path_writes_signed_zero_as_zero() {
        assert_eq!(
            coordinate_pair_path(point(-0.0, -0.0), point(0.000_000_1, 0.0)),
            "0,0;0,0.0000001"
        );
    }

    #[test]
    fn test_with_config_rejects_bad_base_url() {
        for (base_url, profile) in [
            ("not a url", "driving"),
            ("ftp://osrm.local", "driving"),
            ("http://osrm.local", " "),
        ] {
            let error = OsrmRouteResolver::with_config(Client::new(), base_url, profile)
                .err()
                .unwrap();
            assert_eq!(error.code, ErrorCode::InvalidInput, "{base_url} {profile}");
        }

        let resolver =
            OsrmRouteResolver::with_config(Client::new(), "http://osrm.local:5000/", "foot").unwrap();
        assert_eq!(resolver.base_url(), "http://osrm.local:5000");
        assert_eq!(resolver.profile(), "foot");
    }
}
