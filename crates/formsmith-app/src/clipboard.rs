//! System clipboard access
//!
//! The result modal only ever writes text. `ClipboardService` is the seam
//! between the update loop and the platform clipboard so actions can be
//! tested with a mock.

use std::sync::Mutex;

use arboard::Clipboard;
use formsmith_core::prelude::*;

/// Writes text to a clipboard
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardService: Send + Sync {
    /// Replace the clipboard contents with `text`
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Platform clipboard backed by `arboard`.
///
/// The handle is opened on first use and kept alive afterwards; on X11 and
/// Wayland the owning process must stay around for the contents to remain
/// available.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Mutex<Option<Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard").finish_non_exhaustive()
    }
}

impl ClipboardService for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut guard = self
            .handle
            .lock()
            .map_err(|_| Error::clipboard("clipboard handle poisoned"))?;

        if guard.is_none() {
            let clipboard = Clipboard::new()
                .map_err(|e| Error::clipboard(format!("failed to open clipboard: {}", e)))?;
            *guard = Some(clipboard);
        }

        let Some(clipboard) = guard.as_mut() else {
            return Err(Error::clipboard("clipboard unavailable"));
        };

        clipboard
            .set_text(text.to_owned())
            .map_err(|e| Error::clipboard(format!("failed to write text: {}", e)))?;

        debug!("Copied {} bytes to clipboard", text.len());
        Ok(())
    }
}
