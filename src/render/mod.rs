// ABOUTME: Presentation contract between the pipeline and a map widget
// ABOUTME: Derives loading, error, or map views from a session and hands them to a sink
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Map scene and session view values
pub mod scene;
/// Render sinks consuming session views
pub mod sink;

pub use scene::{MapScene, Marker, MarkerIcon, Polyline, SessionView};
pub use sink::{JsonRenderSink, RenderSink};
