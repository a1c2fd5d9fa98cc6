// ABOUTME: Application shell that runs the Wayfinder pipeline once and prints the view
// ABOUTME: Simulates the device capability from command-line coordinates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Route from a simulated fix to the configured destination
//! wayfinder --lat -23.5 --lon -46.6
//!
//! # Simulate the user refusing location access
//! wayfinder --deny-permission
//!
//! # Use a self-hosted OSRM and another destination
//! WAYFINDER_ROUTING_BASE_URL=http://localhost:5000 \
//!     wayfinder --lat -23.5 --lon -46.6 --destination-lat -23.6 --destination-lon -46.7
//! ```

use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use wayfinder::{
    config::WayfinderConfig,
    location::FixedLocationCapability,
    logging,
    models::{Destination, GeoPoint},
    pipeline::PipelineController,
    render::{JsonRenderSink, RenderSink, SessionView},
};

#[derive(Parser)]
#[command(
    name = "wayfinder",
    about = "Resolve a driving route from the device position to a fixed destination"
)]
struct Args {
    /// Simulated device latitude (no fix is reported when omitted)
    #[arg(long, allow_negative_numbers = true, requires = "lon")]
    lat: Option<f64>,

    /// Simulated device longitude
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    lon: Option<f64>,

    /// Simulate the user refusing location access
    #[arg(long)]
    deny_permission: bool,

    /// Override the destination latitude
    #[arg(long, allow_negative_numbers = true, requires = "destination_lon")]
    destination_lat: Option<f64>,

    /// Override the destination longitude
    #[arg(long, allow_negative_numbers = true, requires = "destination_lat")]
    destination_lon: Option<f64>,
}

impl Args {
    fn capability(&self) -> FixedLocationCapability {
        if self.deny_permission {
            return FixedLocationCapability::denied();
        }
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => FixedLocationCapability::granted(lat, lon),
            _ => FixedLocationCapability::without_fix(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let mut config = WayfinderConfig::from_env()?;
    if let (Some(lat), Some(lon)) = (args.destination_lat, args.destination_lon) {
        config.destination = Destination::new(GeoPoint::new(lat, lon)?);
    }

    logging::init_from_env()?;
    info!("Configuration: {}", config.summary());

    let resolver = config.route_resolver()?;

    let session = PipelineController::new(Arc::new(args.capability()), Arc::new(resolver))
        .run_pipeline(config.destination)
        .await;

    let mut sink = JsonRenderSink::new(io::stdout().lock());
    sink.render(&SessionView::from_session(&session))?;

    Ok(if session.failure().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
