// ABOUTME: Unified error types re-exported from wayfinder-core
// ABOUTME: AppError/ErrorCode for the application surface and PipelineError for stage outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use wayfinder_core::errors::*;
