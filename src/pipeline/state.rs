// ABOUTME: Session state machine and the context object each stage writes into
// ABOUTME: Enforces the legal transitions so no state is re-entered
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::PipelineError;
use crate::models::{Destination, PermissionState, Position, Route};
use tracing::{debug, warn};
use uuid::Uuid;

/// Pipeline progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineState {
    /// Not started
    Init,
    /// Waiting for the permission decision
    AwaitingPermission,
    /// Waiting for a position fix
    AwaitingLocation,
    /// Waiting for the routing service
    AwaitingRoute,
    /// Ready to render; `degraded` when routing failed and the route is empty
    Ready {
        /// Routing failed and was replaced by an empty route
        degraded: bool,
    },
    /// Halted on a fatal failure
    Failed(PipelineError),
}

impl PipelineState {
    /// Whether the machine has stopped
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready { .. } | Self::Failed(_))
    }

    /// Whether `next` is a legal successor of this state
    #[must_use]
    pub fn can_transition_to(&self, next: &Self) -> bool {
        match (self, next) {
            (Self::Init, Self::AwaitingPermission)
            | (Self::AwaitingPermission, Self::AwaitingLocation)
            | (Self::AwaitingLocation, Self::AwaitingRoute)
            | (Self::AwaitingRoute, Self::Ready { .. }) => true,
            (current, Self::Failed(_)) => !current.is_terminal() && *current != Self::Init,
            _ => false,
        }
    }
}

/// Everything the pipeline learned during one session
///
/// Each field is written by exactly one stage and read-only afterwards.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Correlation id for logs
    pub session_id: Uuid,
    /// Fixed destination for this session
    pub destination: Destination,
    /// Permission decision
    pub permission: PermissionState,
    /// Device position, once acquired
    pub position: Option<Position>,
    /// Resolved route (empty until resolved, or when routing degraded)
    pub route: Route,
    state: PipelineState,
    history: Vec<PipelineState>,
}

impl SessionState {
    /// Fresh session in `Init`
    #[must_use]
    pub fn new(destination: Destination) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            destination,
            permission: PermissionState::Unknown,
            position: None,
            route: Route::empty(),
            state: PipelineState::Init,
            history: vec![PipelineState::Init],
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &PipelineState {
        &self.state
    }

    /// Every state visited, in order, starting with `Init`
    #[must_use]
    pub fn history(&self) -> &[PipelineState] {
        &self.history
    }

    /// Fatal failure, if the session halted
    #[must_use]
    pub const fn failure(&self) -> Option<&PipelineError> {
        match &self.state {
            PipelineState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Whether the session reached `Ready`
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.state, PipelineState::Ready { .. })
    }

    /// Move to `next` if the edge is legal
    ///
    /// Returns `false` and leaves the state untouched otherwise.
    pub fn transition(&mut self, next: PipelineState) -> bool {
        if !self.state.can_transition_to(&next) {
            warn!(
                session_id = %self.session_id,
                from = ?self.state,
                to = ?next,
                "Rejected illegal pipeline transition"
            );
            return false;
        }

        debug!(session_id = %self.session_id, from = ?self.state, to = ?next, "Pipeline transition");
        self.history.push(next.clone());
        self.state = next;
        true
    }
}
