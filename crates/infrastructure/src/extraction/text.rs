//! TXT and Markdown

use std::path::Path;

use super::ExtractionError;

pub(super) fn extract(path: &Path) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path)?;
    Ok(decode_dropping_invalid(&bytes))
}

/// UTF-8 decode that skips invalid sequences instead of replacing them
pub(super) fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
