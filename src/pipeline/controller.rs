// ABOUTME: Runs permission, location, and route stages in sequence for one session
// ABOUTME: Fatal failures halt the machine, non-fatal routing failures degrade to an empty route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::state::{PipelineState, SessionState};
use crate::errors::PipelineError;
use crate::location::{LocationCapability, LocationProvider, PermissionGate};
use crate::models::{Destination, PermissionState, Route};
use crate::routing::RouteResolver;
use std::sync::Arc;
use tracing::{error, info, info_span, warn, Instrument};

/// Composes the pipeline stages
///
/// A controller is consumed by [`PipelineController::run_pipeline`], so each
/// instance drives exactly one session.
pub struct PipelineController {
    permission_gate: PermissionGate,
    location_provider: LocationProvider,
    route_resolver: Arc<dyn RouteResolver>,
}

impl PipelineController {
    /// Build a controller over a platform capability and a route resolver
    #[must_use]
    pub fn new(
        capability: Arc<dyn LocationCapability>,
        route_resolver: Arc<dyn RouteResolver>,
    ) -> Self {
        Self {
            permission_gate: PermissionGate::new(Arc::clone(&capability)),
            location_provider: LocationProvider::new(capability),
            route_resolver,
        }
    }

    /// Run the state machine to a terminal state
    ///
    /// Always returns a session; failures are recorded in its state rather
    /// than returned as errors.
    pub async fn run_pipeline(self, destination: Destination) -> SessionState {
        let mut session = SessionState::new(destination);
        let span = info_span!("pipeline", session_id = %session.session_id);

        async {
            self.drive(&mut session).await;
            match session.state() {
                PipelineState::Ready { degraded } => info!(
                    degraded,
                    vertices = session.route.len(),
                    "Pipeline ready"
                ),
                PipelineState::Failed(reason) => error!("Pipeline failed: {reason}"),
                other => warn!(state = ?other, "Pipeline stopped in a non-terminal state"),
            }
        }
        .instrument(span)
        .await;

        session
    }

    async fn drive(&self, session: &mut SessionState) {
        session.transition(PipelineState::AwaitingPermission);
        session.permission = self.permission_gate.request_access().await;
        if session.permission != PermissionState::Granted {
            let detail = self.permission_gate.detail().map(ToOwned::to_owned);
            session.transition(PipelineState::Failed(PipelineError::permission_denied(
                detail,
            )));
            return;
        }

        session.transition(PipelineState::AwaitingLocation);
        let position = match self
            .location_provider
            .get_current_position(session.permission)
            .await
        {
            Ok(position) => position,
            Err(e) => {
                session.transition(PipelineState::Failed(e));
                return;
            }
        };
        session.position = Some(position);

        session.transition(PipelineState::AwaitingRoute);
        let (route, degraded) = match self
            .route_resolver
            .resolve_route(position.point, session.destination.point())
            .await
        {
            Ok(route) => (route, false),
            Err(e) if e.is_fatal() => {
                error!("Route resolver reported a fatal failure: {e}");
                session.transition(PipelineState::Failed(e));
                return;
            }
            Err(e) => {
                warn!("Route resolution failed, continuing without a route: {e}");
                (Route::empty(), true)
            }
        };
        session.route = route;
        session.transition(PipelineState::Ready { degraded });
    }
}

/// Run one session with the given capability, resolver, and destination
pub async fn run_pipeline(
    capability: Arc<dyn LocationCapability>,
    route_resolver: Arc<dyn RouteResolver>,
    destination: Destination,
) -> SessionState {
    PipelineController::new(capability, route_resolver)
        .run_pipeline(destination)
        .await
}
