//! OS signal handling for graceful shutdown

use std::fmt;
use std::future::Future;

use cdash_core::prelude::*;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;

/// Signal that ends the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => write!(f, "SIGINT"),
            ShutdownSignal::Terminate => write!(f, "SIGTERM"),
        }
    }
}

/// Spawn a task that turns SIGINT/SIGTERM (Ctrl+C off unix) into
/// [`Message::Quit`]
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    forward_shutdown(wait_for_signal(), tx)
}

/// Send [`Message::Quit`] once `signal` resolves; a listener error only logs
pub fn forward_shutdown<F>(signal: F, tx: mpsc::Sender<Message>) -> JoinHandle<()>
where
    F: Future<Output = Result<ShutdownSignal>> + Send + 'static,
{
    tokio::spawn(async move {
        match signal.await {
            Ok(signal) => {
                info!("Received {}, shutting down", signal);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Event loop already gone");
                }
            }
            Err(e) => error!("Signal handler error: {}", e),
        }
    })
}

async fn wait_for_signal() -> Result<ShutdownSignal> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())
            .map_err(|e| Error::terminal(format!("Failed to create SIGINT handler: {}", e)))?;
        let mut sigterm = signal(SignalKind::terminate())
            .map_err(|e| Error::terminal(format!("Failed to create SIGTERM handler: {}", e)))?;

        Ok(tokio::select! {
            _ = sigint.recv() => ShutdownSignal::Interrupt,
            _ = sigterm.recv() => ShutdownSignal::Terminate,
        })
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
        Ok(ShutdownSignal::Interrupt)
    }
}
