//! gst-build - Gear stat table builder
//!
//! Reads the snapshot store base URL from `STORAGE_URL` and writes the
//! generated `.lua` tables into the current directory.

use anyhow::{Context, Result};
use gst_build::{run_build, HttpSource};
use gst_common::BuildConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!(
        "Starting GST build (gst-build) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let config = BuildConfig::from_env().context("Failed to resolve build configuration")?;
    info!("Snapshot store: {}", config.storage_url);
    info!("Output folder: {}", config.output_dir.display());

    let source = HttpSource::new(&config).context("Failed to create HTTP client")?;

    let report = run_build(&config, &source, &source)
        .await
        .context("Build aborted")?;

    info!("✓ Wrote {} artifacts", report.artifacts.len());
    Ok(())
}
