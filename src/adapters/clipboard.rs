use crate::core::Clipboard;
use crate::utils::error::{RealtyError, Result};

/// The desktop clipboard.
///
/// On X11 and Wayland the copied text is served by this process, so it
/// disappears when the process exits unless a clipboard manager takes it.
/// Short-lived callers should enable [`hold_until_replaced`](Self::hold_until_replaced).
#[cfg(feature = "clipboard")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
    hold_until_replaced: bool,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new()
            .map_err(|e| RealtyError::clipboard(e.to_string()))?;
        Ok(Self {
            inner,
            hold_until_replaced: false,
        })
    }

    /// On Linux, make `set_text` block until another program owns the clipboard.
    /// No effect on other platforms, where the OS keeps the text.
    pub fn hold_until_replaced(mut self, hold: bool) -> Self {
        self.hold_until_replaced = hold;
        self
    }

    #[cfg(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    ))]
    fn write(&mut self, text: &str) -> std::result::Result<(), arboard::Error> {
        use arboard::SetExtLinux;

        if self.hold_until_replaced {
            tracing::info!("Holding the clipboard until another program takes it");
            self.inner.set().wait().text(text.to_owned())
        } else {
            self.inner.set_text(text.to_owned())
        }
    }

    #[cfg(not(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    )))]
    fn write(&mut self, text: &str) -> std::result::Result<(), arboard::Error> {
        self.inner.set_text(text.to_owned())
    }
}

#[cfg(feature = "clipboard")]
impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.write(text)
            .map_err(|e| RealtyError::clipboard(e.to_string()))
    }
}

// Builds without the `clipboard` feature still expose the type; every use fails.
#[cfg(not(feature = "clipboard"))]
pub struct SystemClipboard;

#[cfg(not(feature = "clipboard"))]
impl SystemClipboard {
    pub fn new() -> Result<Self> {
        Err(RealtyError::clipboard(
            "clipboard support was not compiled in (enable the `clipboard` feature)",
        ))
    }

    pub fn hold_until_replaced(self, _hold: bool) -> Self {
        self
    }
}

#[cfg(not(feature = "clipboard"))]
impl Clipboard for SystemClipboard {
    fn set_text(&mut self, _text: &str) -> Result<()> {
        Err(RealtyError::clipboard("clipboard support was not compiled in"))
    }
}

/// Holds the last copied text in memory. Useful headless and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
