use tracing::trace;

use crate::error::Result;
use crate::parser::{XmlElement, XmlNode};
use crate::renderer::components::collapse_whitespace;
use crate::renderer::kind::{classify, ends_table};
use crate::renderer::renders::{fill_template, template};
use crate::renderer::traits::*;

/// Recursive Markdown renderer for documentation trees
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn render_node<'a>(
        &self,
        node: &'a XmlNode,
        previous: Option<&'a XmlNode>,
        context: RenderContext<'a>,
    ) -> Result<String> {
        match node {
            XmlNode::Element(element) => self.render_element(element, previous, context),
            XmlNode::Text(text) => Ok(collapse_whitespace(text)),
        }
    }

    pub fn render_element<'a>(
        &self,
        element: &'a XmlElement,
        previous: Option<&'a XmlNode>,
        context: RenderContext<'a>,
    ) -> Result<String> {
        let kind = classify(element, previous, &context)?;
        trace!(element = %element.name, ?kind, "classified");
        let parts = self.parts(kind, element, context)?;
        Ok(fill_template(template(kind), parts.as_slice()))
    }

    /// Render sibling nodes in order, each one seeing its predecessor
    pub fn render_all<'a>(&self, nodes: &'a [XmlNode], context: RenderContext<'a>) -> Result<String> {
        let mut output = String::new();
        let mut previous = None;
        for node in nodes {
            if ends_table(previous, node) {
                output.push('\n');
            }
            output.push_str(&self.render_node(node, previous, context)?);
            previous = Some(node);
        }
        Ok(output)
    }

    pub fn render_children<'a>(
        &self,
        element: &'a XmlElement,
        context: RenderContext<'a>,
    ) -> Result<String> {
        self.render_all(&element.children, context)
    }
}

impl Render for XmlElement {
    fn render<'a>(&'a self, context: RenderContext<'a>) -> Result<String> {
        MarkdownRenderer.render_element(self, None, context)
    }
}

impl Render for XmlNode {
    fn render<'a>(&'a self, context: RenderContext<'a>) -> Result<String> {
        MarkdownRenderer.render_node(self, None, context)
    }
}

impl Render for [XmlNode] {
    fn render<'a>(&'a self, context: RenderContext<'a>) -> Result<String> {
        MarkdownRenderer.render_all(self, context)
    }
}
