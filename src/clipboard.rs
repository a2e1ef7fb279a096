//! System clipboard backend.

use figurekit_core::ClipboardError;
use figurekit_designer::ClipboardBackend;

/// The desktop clipboard, through `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = arboard::Clipboard::new().map_err(unavailable)?;
        Ok(Self { inner })
    }
}

fn unavailable(e: arboard::Error) -> ClipboardError {
    match e {
        arboard::Error::ContentNotAvailable => ClipboardError::Empty,
        other => ClipboardError::Unavailable(other.to_string()),
    }
}

impl ClipboardBackend for SystemClipboard {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError> {
        self.inner.set_text(text).map_err(unavailable)
    }

    fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.inner.get_text().map_err(unavailable)
    }
}

/// The system clipboard if one is reachable, otherwise a process-local one.
pub fn best_available() -> Box<dyn ClipboardBackend> {
    match SystemClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(e) => {
            tracing::warn!("System clipboard unavailable, using in-memory clipboard: {}", e);
            Box::new(figurekit_designer::MemoryClipboard::new())
        }
    }
}
