//! OS signal handling: SIGINT/SIGTERM (Ctrl+C on Windows) become `Message::Quit`

use medai_core::prelude::*;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::message::Message;

/// Spawn the signal listener; it exits on the first signal or on shutdown
pub fn spawn_signal_handler(
    tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            received = wait_for_signal() => match received {
                Ok(name) => {
                    info!("Received {}, quitting", name);
                    let _ = tx.send(Message::Quit).await;
                }
                Err(e) => error!("Signal handler error: {}", e),
            },
            _ = shutdown_rx.changed() => {
                debug!("Signal handler stopped");
            }
        }
    })
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())
        .map_err(|e| Error::terminal(format!("SIGINT handler: {}", e)))?;
    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| Error::terminal(format!("SIGTERM handler: {}", e)))?;

    let name = tokio::select! {
        _ = sigint.recv() => "SIGINT",
        _ = sigterm.recv() => "SIGTERM",
    };
    Ok(name)
}

#[cfg(windows)]
async fn wait_for_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Ctrl+C handler: {}", e)))?;
    Ok("Ctrl+C")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_signal_handler_stops_on_shutdown() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = spawn_signal_handler(tx, shutdown_rx);
        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();

        assert!(rx.try_recv().is_err());
    }
}
