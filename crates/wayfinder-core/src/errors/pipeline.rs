// ABOUTME: Typed outcomes for each pipeline stage boundary
// ABOUTME: Classifies permission/location failures as fatal and routing failures as degraded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Failure produced at a pipeline stage boundary
///
/// Every variant carries an optional human-readable detail. Permission and
/// location failures halt the pipeline; routing failures degrade to an
/// empty route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    /// Location access was not granted (or could not be checked)
    #[error("Location permission denied{}", render_detail(.detail))]
    PermissionDenied {
        /// Why access was refused
        detail: Option<String>,
    },

    /// The device could not produce a position fix
    #[error("Location unavailable{}", render_detail(.detail))]
    LocationUnavailable {
        /// Why no fix was produced
        detail: Option<String>,
    },

    /// The routing service could not be reached or answered with a non-success status
    #[error("Route request failed{}", render_detail(.detail))]
    RouteRequestFailed {
        /// Transport or status detail
        detail: Option<String>,
    },

    /// The routing service answered with geometry that cannot be decoded
    #[error("Route data invalid{}", render_detail(.detail))]
    RouteDataInvalid {
        /// What was malformed
        detail: Option<String>,
    },
}

fn render_detail(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map_or_else(String::new, |detail| format!(": {detail}"))
}

impl PipelineError {
    /// Permission refused, with optional detail
    #[must_use]
    pub fn permission_denied(detail: Option<String>) -> Self {
        Self::PermissionDenied { detail }
    }

    /// No position fix
    pub fn location_unavailable(detail: impl Into<String>) -> Self {
        Self::LocationUnavailable {
            detail: Some(detail.into()),
        }
    }

    /// Routing transport failure
    pub fn route_request_failed(detail: impl Into<String>) -> Self {
        Self::RouteRequestFailed {
            detail: Some(detail.into()),
        }
    }

    /// Malformed routing response
    pub fn route_data_invalid(detail: impl Into<String>) -> Self {
        Self::RouteDataInvalid {
            detail: Some(detail.into()),
        }
    }

    /// Detail string, if any
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::PermissionDenied { detail }
            | Self::LocationUnavailable { detail }
            | Self::RouteRequestFailed { detail }
            | Self::RouteDataInvalid { detail } => detail.as_deref(),
        }
    }

    /// Whether this failure halts the pipeline
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::PermissionDenied { .. } | Self::LocationUnavailable { .. }
        )
    }

    /// Terminal message shown to the user for a fatal failure
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::PermissionDenied { .. } => "Permission to access location was denied.",
            Self::LocationUnavailable { .. } => "Unable to determine your current location.",
            Self::RouteRequestFailed { .. } | Self::RouteDataInvalid { .. } => {
                "Unable to calculate a route."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(PipelineError::permission_denied(None).is_fatal());
        assert!(PipelineError::location_unavailable("no signal").is_fatal());
        assert!(!PipelineError::route_request_failed("timeout").is_fatal());
        assert!(!PipelineError::route_data_invalid("missing coordinates").is_fatal());
    }

    #[test]
    fn test_display_appends_detail_only_when_present() {
        assert_eq!(
            PipelineError::permission_denied(None).to_string(),
            "Location permission denied"
        );
        assert_eq!(
            PipelineError::route_data_invalid("missing coordinates").to_string(),
            "Route data invalid: missing coordinates"
        );
    }
}
