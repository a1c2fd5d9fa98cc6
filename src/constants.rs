// ABOUTME: Application constants re-exported from wayfinder-core
// ABOUTME: Routing defaults, default destination, map styling, and project metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use wayfinder_core::constants::*;
