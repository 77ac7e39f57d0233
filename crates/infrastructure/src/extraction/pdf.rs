//! PDF

use std::path::Path;

use pdf_oxide::PdfDocument;
use tracing::{debug, warn};

use super::ExtractionError;

/// Page texts joined by newlines
///
/// A page whose text cannot be extracted contributes an empty line.
pub(super) fn extract(path: &Path) -> Result<String, ExtractionError> {
    let document = PdfDocument::open(path)
        .map_err(|e| ExtractionError::Pdf(format!("failed to parse PDF: {e}")))?;

    let page_count = document
        .page_count()
        .map_err(|e| ExtractionError::Pdf(format!("failed to read page count: {e}")))?;

    let mut pages = Vec::with_capacity(page_count);
    for page_index in 0..page_count {
        match document.extract_text(page_index) {
            Ok(text) => pages.push(text),
            Err(e) => {
                warn!(page = page_index + 1, error = %e, "Failed to extract page text");
                pages.push(String::new());
            },
        }
    }

    debug!(page_count, "PDF text extraction complete");
    Ok(pages.join("\n"))
}
