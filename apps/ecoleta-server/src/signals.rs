use std::fmt;

use anyhow::Result;
use tokio::signal;

/// Signals that trigger a graceful shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    CtrlC,
    #[cfg(unix)]
    Sigterm,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CtrlC => "SIGINT",
            #[cfg(unix)]
            Self::Sigterm => "SIGTERM",
        };
        f.write_str(name)
    }
}

/// Resolves with the first of Ctrl+C or SIGTERM.
///
/// # Errors
/// Returns an error if a signal handler cannot be installed.
pub async fn wait_for_shutdown() -> Result<ShutdownSignal> {
    let received = tokio::select! {
        result = wait_ctrl_c() => result?,
        result = wait_sigterm() => result?,
    };

    tracing::info!(signal = %received, "Shutdown signal received");
    Ok(received)
}

async fn wait_ctrl_c() -> Result<ShutdownSignal> {
    signal::ctrl_c()
        .await
        .inspect_err(|e| tracing::error!(%e, "Cannot listen for Ctrl+C"))?;
    Ok(ShutdownSignal::CtrlC)
}

#[cfg(unix)]
async fn wait_sigterm() -> Result<ShutdownSignal> {
    let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())
        .inspect_err(|e| tracing::error!(%e, "Cannot install SIGTERM handler"))?;
    terminate.recv().await;
    Ok(ShutdownSignal::Sigterm)
}

#[cfg(not(unix))]
async fn wait_sigterm() -> Result<ShutdownSignal> {
    std::future::pending().await
}
