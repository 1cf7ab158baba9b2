use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};
use roxmltree::{Document, Node, ParsingOptions};

use super::LayerDescriptor;
use crate::OgcError;

/// reads every `Layer` element of a WMS capabilities document into a
/// [`LayerDescriptor`].
///
/// layers lacking a non-blank `Name` or `Title` child (group layers, for
/// example) are skipped rather than failing the whole document. elements
/// are matched by local name so both namespaced 1.3.0 and bare 1.1.1
/// documents are accepted.
pub fn parse_capabilities(xml: &str) -> Result<Vec<LayerDescriptor>, OgcError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options).map_err(|e| OgcError::Parse {
        document: "WMS capabilities",
        message: e.to_string(),
    })?;

    let mut layers = vec![];
    for layer in doc.descendants().filter(|n| n.has_tag_name("Layer")) {
        let name = child_text(&layer, "Name");
        let title = child_text(&layer, "Title");
        match (name, title) {
            (Some(name), Some(title)) => {
                let abstract_text = child_text(&layer, "Abstract");
                layers.push(LayerDescriptor::new(name, title, abstract_text));
            }
            (name, _) => {
                log::debug!(
                    "skipping capabilities layer without name and title (name: {name:?})"
                );
            }
        }
    }
    Ok(layers)
}

/// decodes a capabilities body to text using the encoding named in its XML
/// declaration (MapServer commonly answers in ISO-8859-1). a byte order mark
/// takes precedence, and UTF-8 is assumed when nothing is declared.
/// undecodable bytes are replaced rather than failing the document.
pub fn decode_capabilities(body: &[u8]) -> Cow<'_, str> {
    let declared = declared_encoding(body).unwrap_or(UTF_8);
    let (text, used, had_errors) = declared.decode(body);
    if had_errors {
        log::warn!(
            "capabilities document contains bytes that are not valid {}",
            used.name()
        );
    }
    text
}

/// the `encoding` pseudo-attribute of a leading `<?xml ... ?>` declaration
fn declared_encoding(body: &[u8]) -> Option<&'static Encoding> {
    let end = body.iter().position(|b| *b == b'>')?;
    let head = std::str::from_utf8(&body[..end]).ok()?;
    let decl = head.trim_start_matches('\u{feff}').trim_start();
    if !decl.starts_with("<?xml") {
        return None;
    }
    let rest = &decl[decl.find("encoding")? + "encoding".len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &rest[1..];
    let label = &value[..value.find(quote)?];
    Encoding::for_label(label.as_bytes())
}

/// trimmed text of the first direct child element with the given local name
fn child_text(node: &Node, tag: &str) -> Option<String> {
    node.children()
        .find(|c| c.has_tag_name(tag))
        .and_then(|c| c.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
}
