use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::trace;

use crate::error::{ConvertError, Result};
use crate::parser::types::*;

/// Parse an XML documentation file into an owned element tree.
///
/// Text nodes made only of whitespace are dropped from elements that hold no
/// other text, so formatting between sibling elements never shows up as a
/// node. In mixed content (`x <c>a</c> <c>b</c>`) they are kept. Comments, processing
/// instructions and the XML declaration are skipped. CDATA sections become
/// plain text nodes.
pub fn parse_document(xml: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                stack.push(start_element(e)?);
            }
            Event::Empty(ref e) => {
                let element = start_element(e)?;
                attach(element, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                let mut element = stack
                    .pop()
                    .ok_or_else(|| ConvertError::Malformed("unexpected closing tag".to_string()))?;
                drop_layout_whitespace(&mut element);
                attach(element, &mut stack, &mut root)?;
            }
            Event::Text(ref e) => {
                let text = e.unescape()?;
                push_text(&text, &mut stack);
            }
            Event::CData(e) => {
                let bytes = e.into_inner().into_owned();
                let text = String::from_utf8(bytes)
                    .map_err(|_| ConvertError::Malformed("invalid UTF-8 in CDATA".to_string()))?;
                push_text(&text, &mut stack);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(ConvertError::Malformed(format!(
            "element <{}> is never closed",
            open.name
        )));
    }

    root.ok_or_else(|| ConvertError::Malformed("document has no root element".to_string()))
}

fn start_element(e: &BytesStart) -> Result<XmlElement> {
    let name = utf8(e.local_name().as_ref())?;
    let mut element = XmlElement::new(name);

    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = utf8(attr.key.local_name().as_ref())?;
        let value = attr.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }

    trace!(element = %element.name, "parsed start tag");
    Ok(element)
}

fn attach(
    element: XmlElement,
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(XmlNode::Element(element)),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(ConvertError::Malformed(format!(
                "second root element <{}>",
                element.name
            )))
        }
    }
    Ok(())
}

fn push_text(text: &str, stack: &mut [XmlElement]) {
    // Text outside the root element carries no content
    if let Some(parent) = stack.last_mut() {
        parent.children.push(XmlNode::Text(text.to_string()));
    }
}

fn is_blank(node: &XmlNode) -> bool {
    matches!(node, XmlNode::Text(text) if text.trim().is_empty())
}

/// Remove whitespace-only text unless the element also has real text
fn drop_layout_whitespace(element: &mut XmlElement) {
    let mixed = element
        .children
        .iter()
        .any(|child| matches!(child, XmlNode::Text(_)) && !is_blank(child));
    if !mixed {
        element.children.retain(|child| !is_blank(child));
    }
}

fn utf8(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|_| ConvertError::Malformed("invalid UTF-8 in element or attribute name".to_string()))
}
