use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Install the global subscriber. `RUST_LOG` wins over `-v` flags, which
/// win over `logging.level`. Output goes to stderr so that `--print-config`
/// stays clean on stdout.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init_logging(cfg: &LoggingConfig, verbose: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = match verbose {
            0 => cfg.level.as_str(),
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match cfg.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
