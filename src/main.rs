// SPDX-License-Identifier: MIT

//! Mat-Portal session bootstrapper
//!
//! Headless driver for the portal session flow: completes the
//! authorization-code exchange for a pasted callback URL, keeps the session
//! in a local file, collects the mandatory details, and follows the live
//! device stream.
//!
//! Usage:
//!   mat-portal <page-url>                      bootstrap (URL may carry ?code=...)
//!   mat-portal submit-details <height> <id>    submit the mandatory details form

use mat_portal::{
    config::Config, services::DeviceStream, store::FileStore, SessionBootstrapper, SessionView,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env().expect("Failed to load configuration");
    let store = FileStore::open(&config.session_file).expect("Failed to open session store");
    let mut bootstrapper = SessionBootstrapper::new(&config, store);

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("submit-details") => {
            let height = args.next().unwrap_or_default();
            let device_id = args.next().unwrap_or_default();
            bootstrapper.submit_details(&height, &device_id).await?;
            println!("Details saved successfully!");
        }
        Some(page_url) => {
            let outcome = bootstrapper.run(page_url).await?;
            tracing::info!(url = %outcome.url, "Bootstrap complete");

            match outcome.view {
                SessionView::Profile(profile) => {
                    println!("{}", profile.render());
                    follow_stream(&config.stream_url).await?;
                }
                SessionView::DetailsForm => {
                    println!(
                        "Details required: run `mat-portal submit-details <height> <device-id>`"
                    );
                }
                SessionView::NoSession => {
                    println!("Error: No authorization code found, and no existing session.");
                }
            }
        }
        None => {
            eprintln!("usage: mat-portal <page-url> | submit-details <height> <device-id>");
            std::process::exit(2);
        }
    }

    Ok(())
}

/// Follow the device stream until it closes, logging each frame.
async fn follow_stream(stream_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut stream = DeviceStream::connect(stream_url).await?;

    while let Some(frame) = stream.next_frame().await {
        match frame {
            Ok(frame) => {
                // Latest frame wins; earlier ones are simply superseded.
                tracing::info!(bytes = frame.payload().len(), "Frame received");
            }
            Err(e) => {
                tracing::error!(error = %e, "Stream error, stopping");
                break;
            }
        }
    }

    tracing::info!("Device stream closed");
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mat_portal=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
