//! Clipboard backends and the transient "copied" acknowledgement.
//!
//! Copy is write-only and replaces the whole clipboard content with plain
//! text. The acknowledgement is a flag that turns on when a copy happens
//! and is switched off again by a one-shot task after
//! [`ACKNOWLEDGEMENT_DURATION`]. Resets are never cancelled: copying twice
//! schedules two resets and the earlier one still fires.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::debug;

use crate::error::{Error, Result};

/// How long the "copied" acknowledgement stays visible.
pub const ACKNOWLEDGEMENT_DURATION: Duration = Duration::from_secs(2);

/// A plain-text clipboard.
pub trait Clipboard {
    /// Replace the clipboard content with `text`.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Clipboard that keeps the last written text in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text written, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

/// The platform clipboard, via `arboard`.
#[cfg(feature = "clipboard")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "clipboard")]
impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text.to_string())
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}

/// The "copied" flag with its deferred reset.
///
/// Clones share the same flag, so a UI can hold one while the form session
/// holds another.
#[derive(Debug, Clone, Default)]
pub struct Acknowledgement {
    flag: Arc<AtomicBool>,
}

impl Acknowledgement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the acknowledgement is currently shown.
    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Show the acknowledgement and schedule it to clear after
    /// [`ACKNOWLEDGEMENT_DURATION`] on the current Tokio runtime.
    ///
    /// # Errors
    ///
    /// [`Error::NoRuntime`] when called outside a runtime. The flag is left
    /// untouched in that case.
    pub fn trigger(&self) -> Result<()> {
        let handle = tokio::runtime::Handle::try_current().map_err(|_| Error::NoRuntime)?;
        self.trigger_on(&handle);
        Ok(())
    }

    /// Show the acknowledgement and schedule its reset on `handle`.
    pub fn trigger_on(&self, handle: &tokio::runtime::Handle) {
        self.flag.store(true, Ordering::SeqCst);
        let flag = Arc::clone(&self.flag);
        let deadline = tokio::time::Instant::now() + ACKNOWLEDGEMENT_DURATION;
        handle.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            flag.store(false, Ordering::SeqCst);
            debug!("copied acknowledgement cleared");
        });
    }
}
