//! pom.xml loader built on the quick-xml pull reader.
//!
//! Input may be a full POM or a bare fragment such as several sibling
//! `<dependency>` blocks. Every top-level node is attached to a synthetic
//! root element, which has the same effect as wrapping the input in
//! `<root>...</root>` before parsing.

use crate::dom::{Descendants, Element, Node};
use crate::error::{MavenError, Result};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::io::Read;
use std::path::Path;
use tracing::trace;

/// Name of the element every loaded document hangs off.
pub const SYNTHETIC_ROOT: &str = "root";

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// A parsed POM or POM fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomDocument {
    root: Element,
}

impl PomDocument {
    pub fn parse(content: &str) -> Result<Self> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        Self::build(Reader::from_str(content))
    }

    /// Parses raw bytes, decoding text by the encoding named in the XML
    /// declaration (UTF-8 when there is none).
    ///
    /// Bytes that are invalid in that encoding are a parse error.
    pub fn parse_bytes(content: &[u8]) -> Result<Self> {
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
        Self::build(Reader::from_reader(content))
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;
        Self::parse_bytes(&content)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read(path)?;
        Self::parse_bytes(&content)
    }

    fn build(mut reader: Reader<&[u8]>) -> Result<Self> {
        let mut root = Element::new(SYNTHETIC_ROOT);
        let mut open: Vec<Element> = Vec::new();

        loop {
            let pos = reader.buffer_position();
            let event = reader
                .read_event()
                .map_err(|e| MavenError::parse(format!("{e} (at byte {pos})")))?;

            match event {
                Event::Start(ref e) => {
                    open.push(Element::new(local_name(e.local_name().as_ref())));
                }
                Event::Empty(ref e) => {
                    let element = Element::new(local_name(e.local_name().as_ref()));
                    current(&mut root, &mut open)
                        .children
                        .push(Node::Element(element));
                }
                Event::End(ref e) => {
                    let element = open.pop().ok_or_else(|| {
                        MavenError::parse(format!(
                            "unexpected closing tag </{}> (at byte {pos})",
                            local_name(e.local_name().as_ref())
                        ))
                    })?;
                    current(&mut root, &mut open)
                        .children
                        .push(Node::Element(element));
                }
                Event::Text(ref e) => {
                    let raw = e
                        .decode()
                        .map_err(|err| MavenError::parse(err.to_string()))?;
                    let text = quick_xml::escape::unescape(&raw)
                        .map_err(|err| MavenError::parse(err.to_string()))?;
                    current(&mut root, &mut open).push_text(&text);
                }
                Event::CData(ref e) => {
                    let text = e
                        .decode()
                        .map_err(|err| MavenError::parse(err.to_string()))?;
                    current(&mut root, &mut open).push_text(&text);
                }
                Event::GeneralRef(ref e) => {
                    let name = e
                        .decode()
                        .map_err(|err| MavenError::parse(err.to_string()))?;
                    let text = resolve_reference(&name)?;
                    current(&mut root, &mut open).push_text(&text);
                }
                Event::Eof => break,
                // Declarations, comments, DOCTYPE and processing instructions
                // carry nothing a dependency list needs.
                _ => {}
            }
        }

        if let Some(unclosed) = open.last() {
            return Err(MavenError::parse(format!(
                "unclosed element <{}>",
                unclosed.name
            )));
        }

        trace!(
            top_level = root.elements().count(),
            "loaded pom document"
        );
        Ok(Self { root })
    }

    /// The synthetic root; its children are the input's top-level nodes.
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn descendants<'a>(&'a self, tag: &'a str) -> Descendants<'a> {
        self.root.descendants(tag)
    }
}

fn current<'a>(root: &'a mut Element, open: &'a mut [Element]) -> &'a mut Element {
    match open.last_mut() {
        Some(element) => element,
        None => root,
    }
}

fn local_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

/// Resolves `&name;` to its replacement text.
///
/// Only the predefined XML entities and numeric character references are
/// known; POMs do not declare custom entities.
fn resolve_reference(name: &str) -> Result<String> {
    if let Some(number) = name.strip_prefix('#') {
        let code = match number.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => number.parse::<u32>(),
        };
        return code
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .ok_or_else(|| MavenError::parse(format!("invalid character reference '&{name};'")));
    }

    quick_xml::escape::resolve_predefined_entity(name)
        .map(str::to_string)
        .ok_or_else(|| MavenError::parse(format!("unknown entity reference '&{name};'")))
}
