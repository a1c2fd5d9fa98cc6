// ABOUTME: Location permission state for a single app session
// ABOUTME: Decided exactly once, terminal thereafter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Location access decision for the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionState {
    /// Not yet requested
    #[default]
    Unknown,
    /// Access granted
    Granted,
    /// Access refused, or the capability check could not run
    Denied,
}

