// ABOUTME: Shared HTTP client with connection pooling for routing service calls
// ABOUTME: Singleton with default timeouts plus a builder for configured timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::project::user_agent;
use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::warn;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Global shared HTTP client with default timeouts
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get the shared HTTP client for routing service calls
///
/// This client uses connection pooling and the default timeouts
/// (30s request, 10s connect).
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        create_client_with_timeout(DEFAULT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS)
    })
}

/// Create a new HTTP client with custom timeout settings
///
/// Use this when a resolver needs timeouts that differ from the shared client.
/// Falls back to a default client if the builder fails.
#[must_use]
pub fn create_client_with_timeout(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    ClientBuilder::new()
        .user_agent(user_agent())
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .build()
        .unwrap_or_else(|e| {
            warn!("Failed to create HTTP client: {e}, using default");
            Client::new()
        })
}
