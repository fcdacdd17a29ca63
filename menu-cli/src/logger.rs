//! Logging setup

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Filter directive covering the menu crates at `level`
fn default_directive(level: &str) -> String {
    format!("menu_cli={level},menu_client={level},menu_engine={level}")
}

/// Initialize console logging, plus a daily rolling file when `log_dir` exists
///
/// `RUST_LOG` overrides the level when set.
pub fn init_logger(level: &str, log_dir: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    let file_dir = log_dir.map(Path::new).filter(|dir| dir.is_dir());
    match file_dir {
        Some(dir) => {
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, "menu-cli");
            let file_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::sync::Mutex::new(appender))
                .with_filter(EnvFilter::new(default_directive(level)));
            tracing_subscriber::registry()
                .with(console_layer)
                .with(file_layer)
                .try_init()?;
        }
        None => tracing_subscriber::registry().with(console_layer).try_init()?,
    }
    Ok(())
}
