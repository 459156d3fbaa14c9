//! Avicure Gallery - Main Entry Point
//!
//! Native showcase of the Avicure mobile design system

use avicure_gallery::app::application::run_app;
use avicure_gallery::helpers::{get_or_create_data_dir, is_development};
use avicure_gallery::states::GalleryPreferences;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_FILE_NAME: &str = "avicure-gallery.log";

/// Stdout plus a daily rolling file in the data directory. The returned guard
/// flushes the file writer on drop.
fn init_logging() -> Option<WorkerGuard> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stdout_layer = fmt::layer().with_timer(LocalTime::rfc_3339()).with_filter(filter());

    match get_or_create_data_dir() {
        Ok(dir) => {
            let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, LOG_FILE_NAME));
            let file_layer = fmt::layer()
                .with_ansi(false)
                .with_timer(LocalTime::rfc_3339())
                .with_writer(writer)
                .with_filter(filter());
            tracing_subscriber::registry().with(stdout_layer).with(file_layer).init();
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry().with(stdout_layer).init();
            warn!(error = %e, "Data directory unavailable, logging to stdout only");
            None
        }
    }
}

fn main() {
    let _guard = init_logging();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        development = is_development(),
        "Starting Avicure Gallery..."
    );

    let prefs = GalleryPreferences::try_load().unwrap_or_else(|e| {
        error!(error = %e, "Failed to load preferences, using defaults");
        GalleryPreferences::default()
    });

    run_app(prefs);
}
