//! Quit on OS termination signals
//!
//! In raw mode Ctrl+C arrives as a key event, so the signals that matter
//! here are sent from outside: SIGTERM, or SIGHUP when the terminal window
//! goes away.

use tokio::sync::mpsc;

use crate::message::Message;
use formsmith_core::prelude::*;

/// Signal that ends the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shutdown {
    Interrupt,
    Terminate,
    Hangup,
}

impl Shutdown {
    pub fn name(self) -> &'static str {
        match self {
            Shutdown::Interrupt => "SIGINT",
            Shutdown::Terminate => "SIGTERM",
            Shutdown::Hangup => "SIGHUP",
        }
    }
}

/// Send `Message::Quit` on the first termination signal
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match next_shutdown().await {
            Ok(signal) => {
                info!("Received {}, quitting", signal.name());
                let _ = tx.send(Message::Quit).await;
            }
            // The q key still quits
            Err(e) => warn!("Signal handling unavailable: {}", e),
        }
    });
}

#[cfg(unix)]
async fn next_shutdown() -> std::io::Result<Shutdown> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    let mut hangup = signal(SignalKind::hangup())?;

    Ok(tokio::select! {
        _ = tokio::signal::ctrl_c() => Shutdown::Interrupt,
        _ = terminate.recv() => Shutdown::Terminate,
        _ = hangup.recv() => Shutdown::Hangup,
    })
}

#[cfg(not(unix))]
async fn next_shutdown() -> std::io::Result<Shutdown> {
    tokio::signal::ctrl_c().await?;
    Ok(Shutdown::Interrupt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_signal_handler_stays_quiet_without_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        spawn_signal_handler(tx);
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_shutdown_names() {
        assert_eq!(Shutdown::Terminate.name(), "SIGTERM");
        assert_eq!(Shutdown::Hangup.name(), "SIGHUP");
    }
}
