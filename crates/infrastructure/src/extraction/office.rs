//! DOCX and PPTX
//!
//! Both are zip containers of XML parts. Only the main document part (DOCX)
//! and the slide parts (PPTX) are read.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;
use zip::ZipArchive;

use super::ExtractionError;

const DOCX_BODY: &str = "word/document.xml";
const SLIDE_PREFIX: &str = "ppt/slides/slide";
const SLIDE_SUFFIX: &str = ".xml";

pub(super) fn extract_docx(path: &Path) -> Result<String, ExtractionError> {
    let mut archive = open_archive(path)?;
    let xml = read_part(&mut archive, DOCX_BODY)?;
    Ok(docx_paragraphs(&xml)?.join("\n"))
}

pub(super) fn extract_pptx(path: &Path) -> Result<String, ExtractionError> {
    let mut archive = open_archive(path)?;

    let mut slides: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| slide_number(name).map(|number| (number, name.to_string())))
        .collect();
    slides.sort_unstable_by_key(|(number, _)| *number);
    debug!(slides = slides.len(), "Reading presentation");

    let mut paragraphs = Vec::new();
    for (_, name) in &slides {
        let xml = read_part(&mut archive, name)?;
        paragraphs.extend(slide_paragraphs(&xml)?);
    }
    Ok(paragraphs.join("\n"))
}

fn open_archive(path: &Path) -> Result<ZipArchive<File>, ExtractionError> {
    let file = File::open(path)?;
    ZipArchive::new(file).map_err(|e| ExtractionError::Archive(e.to_string()))
}

fn read_part(archive: &mut ZipArchive<File>, name: &str) -> Result<String, ExtractionError> {
    let mut part = archive
        .by_name(name)
        .map_err(|e| ExtractionError::Archive(format!("{name}: {e}")))?;
    let mut xml = String::new();
    part.read_to_string(&mut xml)?;
    Ok(xml)
}

/// `ppt/slides/slide12.xml` -> 12
fn slide_number(name: &str) -> Option<u32> {
    name.strip_prefix(SLIDE_PREFIX)?
        .strip_suffix(SLIDE_SUFFIX)?
        .parse()
        .ok()
}

fn xml_error(err: impl std::fmt::Display) -> ExtractionError {
    ExtractionError::Xml(err.to_string())
}

/// Text of every top-level `w:p`, empty paragraphs included
///
/// Tabs and breaks only count inside runs; `w:tab` also appears in
/// paragraph properties as a tab stop. Paragraphs nested inside another
/// paragraph (text boxes in `w:txbxContent`) are skipped.
fn docx_paragraphs(xml: &str) -> Result<Vec<String>, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"p" => {
                    depth += 1;
                    if depth == 1 {
                        current.clear();
                    }
                },
                b"r" if depth == 1 => in_run = true,
                b"t" if depth == 1 => in_text = in_run,
                _ => {},
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"p" if depth == 0 => paragraphs.push(String::new()),
                b"tab" if in_run && depth == 1 => current.push('\t'),
                b"br" | b"cr" if in_run && depth == 1 => current.push('\n'),
                _ => {},
            },
            Ok(Event::Text(e)) if in_text && depth == 1 => {
                current.push_str(&e.unescape().map_err(xml_error)?);
            },
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"p" => {
                    if depth == 1 {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                    depth = depth.saturating_sub(1);
                },
                b"r" if depth == 1 => in_run = false,
                b"t" if depth == 1 => in_text = false,
                _ => {},
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_error(e)),
            _ => {},
        }
        buf.clear();
    }

    Ok(paragraphs)
}

/// Non-blank paragraphs of the text-bearing shapes on one slide
///
/// Runs of a paragraph are joined with single spaces.
fn slide_paragraphs(xml: &str) -> Result<Vec<String>, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut paragraphs = Vec::new();
    let mut runs: Vec<String> = Vec::new();
    let mut run = String::new();
    let mut in_shape = false;
    let mut in_paragraph = false;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"sp" => in_shape = true,
                b"p" if in_shape => {
                    in_paragraph = true;
                    runs.clear();
                },
                b"t" if in_paragraph => {
                    in_text = true;
                    run.clear();
                },
                _ => {},
            },
            Ok(Event::Text(e)) if in_text => {
                run.push_str(&e.unescape().map_err(xml_error)?);
            },
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"sp" => in_shape = false,
                b"t" if in_text => {
                    in_text = false;
                    runs.push(std::mem::take(&mut run));
                },
                b"p" if in_paragraph => {
                    in_paragraph = false;
                    let paragraph = runs.join(" ");
                    if !paragraph.trim().is_empty() {
                        paragraphs.push(paragraph);
                    }
                },
                _ => {},
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_error(e)),
            _ => {},
        }
        buf.clear();
    }

    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_numbers() {
        assert_eq!(slide_number("ppt/slides/slide1.xml"), Some(1));
        assert_eq!(slide_number("ppt/slides/slide42.xml"), Some(42));
        assert_eq!(slide_number("ppt/slides/_rels/slide1.xml.rels"), None);
        assert_eq!(slide_number("ppt/slideLayouts/slideLayout1.xml"), None);
        assert_eq!(slide_number("ppt/slides/slideX.xml"), None);
    }

    #[test]
    fn text_outside_shapes_is_ignored() {
        let xml = r#"<p:sld xmlns:p="p" xmlns:a="a"><p:graphicFrame><a:tbl><a:tr><a:tc><a:txBody><a:p><a:r><a:t>cell</a:t></a:r></a:p></a:txBody></a:tc></a:tr></a:tbl></p:graphicFrame></p:sld>"#;
        assert!(slide_paragraphs(xml).unwrap().is_empty());
    }

    #[test]
    fn unbalanced_xml_is_reported() {
        let err = docx_paragraphs("<w:document><w:body></w:document>").unwrap_err();
        assert!(matches!(err, ExtractionError::Xml(_)));
    }
}
