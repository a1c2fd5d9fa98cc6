// ABOUTME: Pipeline composition: permission, location, and route stages run once per session
// ABOUTME: Explicit session context object replaces ambient UI state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pipeline Controller
//!
//! ```text
//! Init -> AwaitingPermission -> AwaitingLocation -> AwaitingRoute -> Ready
//!                 |                    |
//!                 +--------------------+--> Failed(reason)
//! ```
//!
//! Permission and location failures are fatal. Routing failures are logged
//! and the session still reaches `Ready` with an empty route.

/// Controller running the stages in order
pub mod controller;
/// Session state machine
pub mod state;

pub use controller::{run_pipeline, PipelineController};
pub use state::{PipelineState, SessionState};
