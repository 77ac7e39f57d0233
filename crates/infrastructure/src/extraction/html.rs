//! HTML and HTM

use std::path::Path;

use scraper::{Html, Node};

use super::ExtractionError;
use super::text::decode_dropping_invalid;

const HIDDEN_ELEMENTS: [&str; 2] = ["script", "style"];

pub(super) fn extract(path: &Path) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path)?;
    Ok(visible_text(&decode_dropping_invalid(&bytes)))
}

/// Text nodes outside `script`/`style`, trimmed and joined by single spaces
fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);

    document
        .tree
        .root()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => {
                let hidden = node.ancestors().any(|ancestor| {
                    ancestor
                        .value()
                        .as_element()
                        .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
                });
                let trimmed = text.trim();
                (!hidden && !trimmed.is_empty()).then(|| trimmed.to_string())
            },
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_markup_flattens() {
        let text = visible_text("<div><h1>Title</h1><p>Some <b>bold</b> text</p></div>");
        assert_eq!(text, "Title Some bold text");
    }

    #[test]
    fn comments_are_ignored() {
        assert_eq!(visible_text("<p>a<!-- hidden -->b</p>"), "a b");
    }
}
