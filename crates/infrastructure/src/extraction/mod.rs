//! Document text extraction
//!
//! Dispatch is keyed on the file extension alone. Each reader is blocking
//! and is meant to run on the blocking pool (see
//! [`crate::adapters::ExtractionAdapter`]).

mod error;
mod html;
mod office;
mod pdf;
mod tabular;
mod text;

use std::path::Path;

use domain::DocumentFormat;
pub use domain::text::{normalize_whitespace, truncate_chars};
pub use error::ExtractionError;

/// Default number of CSV rows read after the first one
pub const DEFAULT_CSV_MAX_ROWS: usize = 5000;

/// Per-format limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionOptions {
    /// Rows with index greater than this are not read
    pub csv_max_rows: usize,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            csv_max_rows: DEFAULT_CSV_MAX_ROWS,
        }
    }
}

/// Extract the plain text of the document at `path`
///
/// The format comes from the path's extension. Unsupported extensions are
/// rejected before the file is opened.
///
/// # Errors
///
/// Returns `ExtractionError::UnsupportedFormat` for unknown extensions and a
/// format-specific error when the file cannot be read or parsed.
pub fn detect_and_extract_text(
    path: &Path,
    options: &ExtractionOptions,
) -> Result<String, ExtractionError> {
    let format = DocumentFormat::from_path(path)?;
    extract_as(path, format, options)
}

/// Extract `path` as `format`, ignoring its extension
///
/// # Errors
///
/// Returns a format-specific error when the file cannot be read or parsed.
pub fn extract_as(
    path: &Path,
    format: DocumentFormat,
    options: &ExtractionOptions,
) -> Result<String, ExtractionError> {
    match format {
        DocumentFormat::Pdf => pdf::extract(path),
        DocumentFormat::Docx => office::extract_docx(path),
        DocumentFormat::Pptx => office::extract_pptx(path),
        DocumentFormat::Txt | DocumentFormat::Md => text::extract(path),
        DocumentFormat::Html | DocumentFormat::Htm => html::extract(path),
        DocumentFormat::Csv => tabular::extract(path, options.csv_max_rows),
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;

    use super::*;

    fn write_zip(path: &Path, entries: &[(&str, &str)]) {
        let file = File::create(path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();
        for (name, content) in entries {
            zip.start_file(*name, options).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }

    /// One Helvetica text line per page, with a valid xref table
    fn minimal_pdf(pages: &[&str]) -> Vec<u8> {
        let font_id = 3 + 2 * pages.len();
        let kids: Vec<String> = (0..pages.len()).map(|i| format!("{} 0 R", 3 + 2 * i)).collect();

        let mut objects = vec![
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids.join(" "), pages.len()),
        ];
        for (i, text) in pages.iter().enumerate() {
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 {font_id} 0 R >> >> /Contents {} 0 R >>",
                4 + 2 * i
            ));
            let content = format!("BT /F1 24 Tf 72 720 Td ({text}) Tj ET");
            objects.push(format!(
                "<< /Length {} >>\nstream\n{content}\nendstream",
                content.len()
            ));
        }
        objects.push("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string());

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, object) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{object}\nendobj\n", i + 1).as_bytes());
        }
        let xref_offset = pdf.len();
        pdf.extend_from_slice(format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).as_bytes());
        for offset in offsets {
            pdf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%EOF\n",
                objects.len() + 1
            )
            .as_bytes(),
        );
        pdf
    }

    fn extract(path: &Path) -> Result<String, ExtractionError> {
        detect_and_extract_text(path, &ExtractionOptions::default())
    }

    #[test]
    fn unsupported_extension_is_rejected_without_reading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.xlsx");

        let err = extract(&path).unwrap_err();

        match err {
            ExtractionError::UnsupportedFormat {
                extension,
                supported,
            } => {
                assert_eq!(extension, "xlsx");
                assert!(supported.contains("pdf"));
                assert!(supported.contains("csv"));
            },
            other => panic!("Expected UnsupportedFormat, got {other:?}"),
        }
        assert!(!path.exists());
    }

    #[test]
    fn missing_extension_is_unsupported() {
        let err = extract(Path::new("README")).unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat { .. }));
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("NOTES.TXT");
        std::fs::write(&path, "upper case").unwrap();

        assert_eq!(extract(&path).unwrap(), "upper case");
    }

    #[test]
    fn plain_text_drops_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        std::fs::write(&path, b"# Title\n\xFF\xFEbody").unwrap();

        assert_eq!(extract(&path).unwrap(), "# Title\nbody");
    }

    #[test]
    fn html_skips_script_and_style() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.htm");
        std::fs::write(
            &path,
            "<html><head><title>T</title><style>p{color:red}</style></head>\
             <body><p>Hello</p><script>alert(1)</script><p>world</p></body></html>",
        )
        .unwrap();

        assert_eq!(extract(&path).unwrap(), "T Hello world");
    }

    #[test]
    fn csv_reads_cap_plus_one_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let body: String = (0..20).map(|i| format!("r{i},v{i}\n")).collect();
        std::fs::write(&path, body).unwrap();

        let text =
            detect_and_extract_text(&path, &ExtractionOptions { csv_max_rows: 5 }).unwrap();

        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], "r0 v0");
        assert_eq!(rows[5], "r5 v5");
    }

    #[test]
    fn csv_tolerates_ragged_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ragged.csv");
        std::fs::write(&path, "a,b,c\nd\n\"e, f\",g\n").unwrap();

        assert_eq!(extract(&path).unwrap(), "a b c\nd\ne, f g");
    }

    #[test]
    fn docx_paragraphs_runs_and_tabs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.docx");
        write_zip(
            &path,
            &[(
                "word/document.xml",
                r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>
<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>Hello</w:t></w:r><w:r><w:tab/><w:t xml:space="preserve"> big </w:t></w:r><w:r><w:t>world &amp; more</w:t></w:r></w:p>
<w:p/>
<w:p><w:r><w:t>Line one</w:t><w:br/><w:t>Line two</w:t></w:r></w:p>
</w:body></w:document>"#,
            )],
        );

        assert_eq!(
            extract(&path).unwrap(),
            "Hello\t big world & more\n\nLine one\nLine two"
        );
    }

    #[test]
    fn docx_text_box_keeps_enclosing_paragraph() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boxed.docx");
        write_zip(
            &path,
            &[(
                "word/document.xml",
                r#"<w:document xmlns:w="w"><w:body>
<w:p><w:r><w:t xml:space="preserve">Before </w:t></w:r><w:r><w:pict><w:txbxContent><w:p><w:r><w:t>Inside</w:t></w:r></w:p></w:txbxContent></w:pict></w:r><w:r><w:t>After</w:t></w:r></w:p>
<w:p><w:r><w:t>Next</w:t></w:r></w:p>
</w:body></w:document>"#,
            )],
        );

        assert_eq!(extract(&path).unwrap(), "Before After\nNext");
    }

    #[test]
    fn docx_without_body_is_an_archive_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.docx");
        write_zip(&path, &[("[Content_Types].xml", "<Types/>")]);

        assert!(matches!(
            extract(&path).unwrap_err(),
            ExtractionError::Archive(_)
        ));
    }

    #[test]
    fn pptx_slides_in_numeric_order() {
        let slide = |text: &str| {
            format!(
                r#"<p:sld xmlns:p="p" xmlns:a="a"><p:cSld><p:spTree>
<p:sp><p:txBody><a:p><a:r><a:t>{text}</a:t></a:r><a:r><a:t>tail</a:t></a:r></a:p><a:p><a:r><a:t>  </a:t></a:r></a:p></p:txBody></p:sp>
<p:sp><p:spPr/></p:sp>
</p:spTree></p:cSld></p:sld>"#
            )
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        let (first, second, tenth) = (slide("One"), slide("Two"), slide("Ten"));
        write_zip(
            &path,
            &[
                ("ppt/slides/slide10.xml", tenth.as_str()),
                ("ppt/slides/slide2.xml", second.as_str()),
                ("ppt/slides/slide1.xml", first.as_str()),
                ("ppt/slides/_rels/slide1.xml.rels", "<Relationships/>"),
            ],
        );

        assert_eq!(extract(&path).unwrap(), "One tail\nTwo tail\nTen tail");
    }

    #[test]
    fn pdf_pages_joined_by_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.pdf");
        std::fs::write(&path, minimal_pdf(&["Hello PDF world", "Second page"])).unwrap();

        let text = extract(&path).unwrap();

        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        assert_eq!(lines, vec!["Hello PDF world", "Second page"]);
    }

    #[test]
    fn malformed_pdf_is_a_pdf_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"this is not a pdf").unwrap();

        assert!(matches!(extract(&path).unwrap_err(), ExtractionError::Pdf(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract(&dir.path().join("gone.txt")).unwrap_err();
        assert!(matches!(err, ExtractionError::Io(_)));
    }
}
