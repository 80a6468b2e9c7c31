//! Engine - owns the state, the message channel and the clipboard seam
//!
//! Frontends (the TUI runner, tests) feed messages in and drain the channel;
//! the Engine routes everything through `process::process_message()`.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;

use crate::clipboard::{ClipboardService, SystemClipboard};
use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
const CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for Formsmith.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, background tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    clipboard: Arc<dyn ClipboardService>,
}

impl Engine {
    /// Create an Engine backed by the system clipboard.
    ///
    /// Spawns the OS signal handler, so a tokio runtime must be running.
    pub fn new(settings: Settings) -> Self {
        let engine = Self::with_clipboard(settings, Arc::new(SystemClipboard::new()));
        signals::spawn_signal_handler(engine.msg_tx.clone());
        engine
    }

    /// Create an Engine with a custom clipboard and no signal handler
    pub fn with_clipboard(settings: Settings, clipboard: Arc<dyn ClipboardService>) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

        Self {
            state,
            msg_tx,
            msg_rx,
            clipboard,
        }
    }

    /// Process a single message through the TEA update cycle
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.clipboard);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Log the final state before the frontend exits
    pub fn shutdown(&mut self) {
        info!(
            "Shutting down with {} fields ({} generated output)",
            self.state.fields.len(),
            if self.state.result.output.is_some() {
                "with"
            } else {
                "no"
            }
        );
        self.msg_rx.close();
    }
}
