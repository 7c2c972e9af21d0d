use std::fs::{self, File};

use color_eyre::eyre::eyre;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config;

/// Log to a file under the platform data dir; stdout belongs to the TUI.
/// `TUITUBE_LOG` takes an env-filter directive, defaulting to `info`.
pub fn initialize_logging() -> color_eyre::Result<()> {
    let directory = config::data_dir().ok_or_else(|| eyre!("no home directory"))?;
    fs::create_dir_all(&directory)?;
    let log_file = File::create(directory.join("tuitube.log"))?;

    let filter = EnvFilter::try_from_env("TUITUBE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(log_file)
                .with_ansi(false)
                .with_target(false),
        )
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
