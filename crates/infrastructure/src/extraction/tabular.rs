//! CSV

use std::path::Path;

use super::ExtractionError;
use super::text::decode_dropping_invalid;

/// Rows joined by newlines, cells by spaces
///
/// Rows are read while their index is at most `max_rows`, so up to
/// `max_rows + 1` rows come back.
pub(super) fn extract(path: &Path, max_rows: usize) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path)?;
    let content = decode_dropping_invalid(&bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records().take(max_rows.saturating_add(1)) {
        let record = record.map_err(|e| ExtractionError::Csv(e.to_string()))?;
        rows.push(record.iter().collect::<Vec<_>>().join(" "));
    }

    Ok(rows.join("\n"))
}
