// SPDX-License-Identifier: MPL-2.0
//! Loading server-rendered markup into a [`Document`].
//!
//! Markup must be well-formed XML (an XHTML fragment is fine, several
//! top-level elements are accepted). Whitespace-only text is dropped,
//! comments, processing instructions and doctypes are ignored. Pages nested
//! deeper than [`MAX_DEPTH`] elements are rejected.

use super::Document;
use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::path::Path;

/// Deepest element nesting accepted by [`parse`].
pub const MAX_DEPTH: usize = 256;

/// Parses markup text into a new document.
pub fn parse(source: &str) -> Result<Document> {
    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(true);

    let mut document = Document::new();
    let mut open = vec![document.root()];

    loop {
        let parent = *open.last().unwrap_or(&document.root());
        match reader.read_event()? {
            Event::Start(ref e) => {
                // `open` holds the root plus every open element
                if open.len() > MAX_DEPTH {
                    return Err(Error::Markup(format!(
                        "elements nested deeper than {MAX_DEPTH} levels"
                    )));
                }
                let id = append_element(&mut document, parent, e)?;
                open.push(id);
            }
            Event::Empty(ref e) => {
                append_element(&mut document, parent, e)?;
            }
            Event::End(_) => {
                if open.len() <= 1 {
                    return Err(Error::Markup("unexpected closing tag".to_string()));
                }
                open.pop();
            }
            Event::Text(ref e) => {
                let text = e.unescape().map_err(|err| Error::Markup(err.to_string()))?;
                let text = text.trim();
                if !text.is_empty() {
                    document.append_text(parent, text);
                }
            }
            Event::CData(e) => {
                let raw = e.into_inner();
                let text = String::from_utf8_lossy(&raw);
                let text = text.trim();
                if !text.is_empty() {
                    document.append_text(parent, text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if open.len() > 1 {
        return Err(Error::Markup(format!(
            "{} element(s) left unclosed",
            open.len() - 1
        )));
    }

    Ok(document)
}

/// Reads and parses a markup file.
pub fn load_from_path(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

fn append_element(
    document: &mut Document,
    parent: super::NodeId,
    start: &BytesStart<'_>,
) -> Result<super::NodeId> {
    let name = String::from_utf8_lossy(start.name().as_ref()).to_string();
    let id = document.append_element(parent, &name, &[]);

    for attribute in start.attributes() {
        let attribute = attribute.map_err(|err| Error::Markup(err.to_string()))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).to_string();
        let value = attribute
            .unescape_value()
            .map_err(|err| Error::Markup(err.to_string()))?;
        document.set_attribute(id, &key, &value);
    }

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Selector;

    const FLASHES: &str = r#"
        <!DOCTYPE html>
        <div class="toast">
            <div class="msg success">Cliente creato con successo.</div>
            <div class="msg warning">Cliente eliminato.</div>
        </div>
        <table>
            <tr class="row"><td>Mario &amp; Co</td><td><button class="delete" data-confirm="Delete user?">x</button></td></tr>
        </table>
    "#;

    #[test]
    fn parses_nested_elements_and_classes() {
        let doc = parse(FLASHES).unwrap();
        let toasts = doc.query_selector_all(&Selector::parse(".toast .msg").unwrap());

        assert_eq!(toasts.len(), 2);
        assert_eq!(doc.text_content(toasts[0]), "Cliente creato con successo.");
        assert!(doc.element(toasts[1]).unwrap().has_class("warning"));
    }

    #[test]
    fn unescapes_text_and_attributes() {
        let doc = parse(FLASHES).unwrap();
        let rows = doc.query_selector_all(&Selector::parse("tr.row").unwrap());
        assert_eq!(doc.text_content(rows[0]), "Mario & Co x");

        let buttons = doc.query_selector_all(&Selector::parse(".row button.delete").unwrap());
        let button = doc.element(buttons[0]).unwrap();
        assert_eq!(button.attribute("data-confirm"), Some("Delete user?"));
    }

    #[test]
    fn empty_markup_yields_empty_document() {
        let doc = parse("").unwrap();
        assert_eq!(doc.attached_count(), 0);
    }

    #[test]
    fn mismatched_tags_are_rejected() {
        let err = parse("<div><p>text</div>").unwrap_err();
        assert!(matches!(err, Error::Markup(_)));
    }

    #[test]
    fn unclosed_tags_are_rejected() {
        let err = parse("<div class=\"toast\"><div class=\"msg\">hi</div>").unwrap_err();
        assert!(matches!(err, Error::Markup(_)));
    }

    #[test]
    fn self_closing_elements_have_no_children() {
        let doc = parse("<div class=\"toast\"><br/><div class=\"msg\">a</div></div>").unwrap();
        let container = doc.children(doc.root())[0];
        assert_eq!(doc.children(container).len(), 2);
        assert!(doc.children(doc.children(container)[0]).is_empty());
    }

    fn nested(depth: usize) -> String {
        format!(
            "{}<div class=\"toast\"><div class=\"msg\">x</div></div>{}",
            "<div>".repeat(depth),
            "</div>".repeat(depth)
        )
    }

    #[test]
    fn nesting_up_to_limit_is_accepted() {
        // the toast and its message add two levels
        let doc = parse(&nested(MAX_DEPTH - 2)).unwrap();
        let toasts = doc.query_selector_all(&Selector::parse(".toast .msg").unwrap());
        assert_eq!(toasts.len(), 1);
    }

    #[test]
    fn excessive_nesting_is_rejected() {
        let err = parse(&nested(200_000)).unwrap_err();
        assert!(matches!(err, Error::Markup(_)));

        let err = parse(&nested(MAX_DEPTH - 1)).unwrap_err();
        assert!(matches!(err, Error::Markup(_)));
    }

    #[test]
    fn load_from_path_reads_file() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("page.xhtml");
        fs::write(&path, FLASHES).expect("failed to write page");

        let doc = load_from_path(&path).expect("failed to load page");
        assert!(doc.attached_count() > 0);
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let err = load_from_path(&dir.path().join("missing.xhtml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
