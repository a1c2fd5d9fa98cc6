// ABOUTME: Map scene values (center, markers, route polyline) built from a session
// ABOUTME: SessionView selects between loading indicator, error message, and map
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::map;
use crate::models::{GeoPoint, Position};
use crate::pipeline::{PipelineState, SessionState};
use serde::Serialize;

/// Marker icon glyph and styling
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerIcon {
    /// Glyph name in the icon font
    pub name: String,
    /// Size in points
    pub size: u32,
    /// CSS color name
    pub color: String,
}

/// Labelled point on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Where the marker sits
    pub coordinate: GeoPoint,
    /// Callout title
    pub title: String,
    /// Callout description
    pub description: String,
    /// Icon drawn instead of the default pin
    pub icon: MarkerIcon,
}

impl Marker {
    fn styled(coordinate: GeoPoint, icon: &str, color: &str) -> Self {
        Self {
            coordinate,
            title: map::MARKER_TITLE.to_owned(),
            description: map::MARKER_DESCRIPTION.to_owned(),
            icon: MarkerIcon {
                name: icon.to_owned(),
                size: map::MARKER_ICON_SIZE,
                color: color.to_owned(),
            },
        }
    }
}

/// Route line drawn over the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    /// Vertices in traversal order
    pub coordinates: Vec<GeoPoint>,
    /// Stroke width in points
    pub stroke_width: u32,
    /// CSS color name
    pub stroke_color: String,
}

/// Everything a map widget needs to draw a ready session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScene {
    /// Initial region center (the device position)
    pub center: GeoPoint,
    /// Initial region latitude span
    pub latitude_delta: f64,
    /// Initial region longitude span
    pub longitude_delta: f64,
    /// Show the platform's own user-location dot
    pub show_user_location: bool,
    /// Destination marker followed by origin marker
    pub markers: Vec<Marker>,
    /// Route line, absent when there is no route
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polyline: Option<Polyline>,
}

impl MapScene {
    fn build(position: &Position, session: &SessionState) -> Self {
        let polyline = (!session.route.is_empty()).then(|| Polyline {
            coordinates: session.route.points().to_vec(),
            stroke_width: map::ROUTE_STROKE_WIDTH,
            stroke_color: map::ROUTE_STROKE_COLOR.to_owned(),
        });

        Self {
            center: position.point,
            latitude_delta: map::LATITUDE_DELTA,
            longitude_delta: map::LONGITUDE_DELTA,
            show_user_location: true,
            markers: vec![
                Marker::styled(
                    session.destination.point(),
                    map::DESTINATION_ICON,
                    map::DESTINATION_COLOR,
                ),
                Marker::styled(position.point, map::ORIGIN_ICON, map::ORIGIN_COLOR),
            ],
            polyline,
        }
    }
}

/// What the screen shows for a session
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum SessionView {
    /// Position not known yet: show a progress indicator
    Loading,
    /// Pipeline halted: show the terminal message
    Error {
        /// Message for the user
        message: String,
    },
    /// Pipeline ready: draw the map
    Map(MapScene),
}

impl SessionView {
    /// Derive the view for the session's current state
    #[must_use]
    pub fn from_session(session: &SessionState) -> Self {
        match (session.state(), session.position.as_ref()) {
            (PipelineState::Failed(reason), _) => Self::Error {
                message: reason.user_message().to_owned(),
            },
            (PipelineState::Ready { .. }, Some(position)) => {
                Self::Map(MapScene::build(position, session))
            }
            _ => Self::Loading,
        }
    }
}
