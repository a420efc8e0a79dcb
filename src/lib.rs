//! # xmldoc2md
//!
//! Converts XML API documentation (the `doc/assembly/members` format written
//! by C# compilers) into a single Markdown page.
//!
//! ```ignore
//! let markdown = xmldoc2md::xml_to_markdown(&xml, &ConvertOptions::default())?;
//! ```

pub mod config;
pub mod error;
pub mod parser;
pub mod renderer;

#[cfg(test)]
mod tests;

pub use config::ConvertOptions;
pub use error::{ConvertError, Result};
pub use parser::{parse_document, XmlElement, XmlNode};
pub use renderer::{collapse_blank_lines, MarkdownRenderer, Render, RenderContext};

/// Render a documentation tree rooted at `root` with default options.
///
/// The result is not post-processed; see [`collapse_blank_lines`].
pub fn convert(root: &XmlElement) -> Result<String> {
    convert_with(root, &ConvertOptions::default())
}

pub fn convert_with(root: &XmlElement, options: &ConvertOptions) -> Result<String> {
    root.render(RenderContext::new(options))
}

/// Render a sequence of sibling nodes, such as the children of one member
pub fn convert_nodes(nodes: &[XmlNode]) -> Result<String> {
    convert_nodes_with(nodes, &ConvertOptions::default())
}

pub fn convert_nodes_with(nodes: &[XmlNode], options: &ConvertOptions) -> Result<String> {
    nodes.render(RenderContext::new(options))
}

/// Parse `xml`, convert it and normalize blank lines
pub fn xml_to_markdown(xml: &str, options: &ConvertOptions) -> Result<String> {
    let root = parse_document(xml)?;
    let markdown = convert_with(&root, options)?;
    Ok(collapse_blank_lines(&markdown))
}
