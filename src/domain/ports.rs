use crate::utils::error::Result;

/// Whole-file access to the place contacts are kept.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// Plain-text clipboard sink.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}
