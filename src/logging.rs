use std::{fs::File, sync::Mutex};

use tracing_subscriber::EnvFilter;

use crate::config::ServiceConfig;

/// JSON logs to `LOG_PATH` when set, otherwise stdout. `RUST_LOG` overrides
/// the default `info` filter.
pub fn init_logging(config: &ServiceConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::
    fmt()
    .with_env_filter(filter)
    .with_target(false)
    .with_ansi(false)
    .json()
    .with_file(true)
    .with_line_number(true)
    .with_current_span(true);

    match &config.log_path {
        Some(path) => builder.with_writer(Mutex::new(File::create(path)?)).init(),
        None => builder.with_writer(std::io::stdout).init(),
    }

    Ok(())
}
