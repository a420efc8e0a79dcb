use tracing::debug;

use crate::error::Result;
use crate::parser::XmlElement;
use crate::renderer::components::*;
use crate::renderer::kind::ElementKind;
use crate::renderer::renderer::MarkdownRenderer;
use crate::renderer::traits::{ListStyle, RenderContext};

const PARAMETER_TABLE: &str = "\n|Parameter|Description|\n|:--|:--|\n|{0}|{1}|\n";
const TYPE_PARAMETER_TABLE: &str = "\n|Type Parameter|Description|\n|:--|:--|\n|{0}|{1}|\n";
const EXCEPTION_TABLE: &str = "\n|Exception|Description|\n|:--|:--|\n|{0}|{1}|\n";
const LIST_TABLE_HEADER: &str = "|{0}|{1}|\n|:--|:--|\n";
const TABLE_ROW: &str = "|{0}|{1}|\n";
const MEMBER_HEADING: &str = "### {0}\n\n{1}\n\n---\n\n";
const INLINE_CODE: &str = "`{0}`";
const LINK: &str = "[{0}](#{1})";

/// Format string for each kind; `{n}` is replaced by part `n`
pub fn template(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Doc => "# {0}\n\n{1}\n\n{2}\n\n",
        ElementKind::Type => "## {0}\n\n{1}\n\n---\n\n",
        ElementKind::Field
        | ElementKind::Property
        | ElementKind::Method
        | ElementKind::Event => MEMBER_HEADING,
        ElementKind::Summary => "{0}\n\n",
        ElementKind::Remarks | ElementKind::Para => "\n\n{0}\n\n",
        ElementKind::Example => "\n**{0}**\n```{1}\n{2}\n```\n\n",
        ElementKind::Code => "\n```{0}\n{1}\n```\n\n",
        ElementKind::SeePage
        | ElementKind::ParamRef
        | ElementKind::TypeParamRef
        | ElementKind::C => INLINE_CODE,
        ElementKind::SeeAnchor | ElementKind::SeeHeader => LINK,
        ElementKind::Param => PARAMETER_TABLE,
        ElementKind::TypeParam => TYPE_PARAMETER_TABLE,
        ElementKind::Exception => EXCEPTION_TABLE,
        ElementKind::Param2 | ElementKind::Exception2 | ElementKind::TableItem => TABLE_ROW,
        ElementKind::Returns => "\n**Returns:** {0}\n\n",
        ElementKind::Value => "\n**Value:** {0}\n\n",
        ElementKind::List => "\n\n{0}\n\n",
        ElementKind::ListHeader => LIST_TABLE_HEADER,
        ElementKind::Item => "{0}{1}\n",
        ElementKind::Term => "{0}: ",
        ElementKind::Description => "{0}",
        ElementKind::None => "",
    }
}

/// Substitute positional `{n}` placeholders. Missing parts become empty.
pub fn fill_template<S: AsRef<str>>(template: &str, parts: &[S]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();

        if digits > 0 && after[digits..].starts_with('}') {
            let index: usize = after[..digits].parse().unwrap_or(usize::MAX);
            if let Some(part) = parts.get(index) {
                output.push_str(part.as_ref());
            }
            rest = &after[digits + 1..];
        } else {
            output.push('{');
            rest = after;
        }
    }

    output.push_str(rest);
    output
}

impl MarkdownRenderer {
    /// Produce the ordered parts consumed by `template(kind)`
    pub fn parts<'a>(
        &self,
        kind: ElementKind,
        element: &'a XmlElement,
        context: RenderContext<'a>,
    ) -> Result<Vec<String>> {
        let parts = match kind {
            ElementKind::Doc => self.document_parts(element, context)?,
            ElementKind::Type
            | ElementKind::Field
            | ElementKind::Property
            | ElementKind::Method
            | ElementKind::Event => {
                let name = strip_member_prefix(element.required_attribute("name")?);
                debug!(member = name, ?kind, "rendering member");
                vec![name.to_string(), self.render_children(element, context)?]
            }
            ElementKind::Summary
            | ElementKind::Remarks
            | ElementKind::Returns
            | ElementKind::Para => {
                vec![self.render_children(element, context)?.trim().to_string()]
            }
            ElementKind::Value
            | ElementKind::C
            | ElementKind::Term
            | ElementKind::Description => vec![self.render_children(element, context)?],
            ElementKind::List => vec![self.list_body(element, context)?],
            ElementKind::Example => {
                let options = context.options;
                vec![
                    options.example_label.clone(),
                    options.example_language.clone(),
                    to_code_block(&element.text_content(), options.example_indent_offset),
                ]
            }
            ElementKind::Code => {
                let options = context.options;
                vec![
                    options.example_language.clone(),
                    to_code_block(&element.text_content(), options.example_indent_offset),
                ]
            }
            ElementKind::SeePage => match element.attribute("cref") {
                Some(cref) => vec![strip_member_prefix(cref).to_string()],
                None => vec![element.required_attribute("langword")?.to_string()],
            },
            ElementKind::SeeAnchor => {
                let target = strip_member_prefix(element.required_attribute("cref")?);
                let anchor = target.strip_prefix(ANCHOR_PREFIX).unwrap_or(target);
                vec![self.link_label(element, anchor, context)?, anchor_slug(anchor)]
            }
            ElementKind::SeeHeader => {
                let target = strip_member_prefix(element.required_attribute("cref")?);
                vec![self.link_label(element, target, context)?, anchor_slug(target)]
            }
            ElementKind::Param | ElementKind::TypeParam | ElementKind::Param2 => {
                self.table_row(element, "name", context)?
            }
            ElementKind::Exception | ElementKind::Exception2 => {
                self.table_row(element, "cref", context)?
            }
            ElementKind::ParamRef | ElementKind::TypeParamRef => {
                let name = strip_member_prefix(element.required_attribute("name")?);
                vec![name.to_string(), self.render_children(element, context)?]
            }
            ElementKind::ListHeader | ElementKind::TableItem => {
                self.table_item_cells(element, context)?
            }
            ElementKind::Item => {
                let prefix = match context.list.prefix() {
                    "" => String::new(),
                    prefix => format!("{prefix} "),
                };
                let content = self.render_children(element, context)?;
                let content = indent_continuation(content.trim(), prefix.len());
                vec![prefix, content]
            }
            ElementKind::None => Vec::new(),
        };
        Ok(parts)
    }

    fn document_parts<'a>(
        &self,
        doc: &'a XmlElement,
        context: RenderContext<'a>,
    ) -> Result<Vec<String>> {
        let root_name = doc.required_child("assembly")?.required_child("name")?.text().trim();
        let members = doc.required_child("members")?;
        let namespace_doc = members.child_elements().find(|m| is_namespace_doc(m));

        let context = context.with_document(root_name, namespace_doc);
        debug!(
            assembly = root_name,
            has_namespace_doc = namespace_doc.is_some(),
            "rendering document"
        );

        let summary = match namespace_doc {
            Some(namespace) => self.render_children(namespace, context)?,
            None => String::new(),
        };

        let mut body = String::new();
        for member in members.child_elements().filter(|e| e.name == "member") {
            body.push_str(&self.render_element(member, None, context)?);
        }

        Ok(vec![root_name.to_string(), summary, body])
    }

    fn list_body<'a>(&self, list: &'a XmlElement, context: RenderContext<'a>) -> Result<String> {
        let style = ListStyle::from_type(list.attribute("type"));
        let mut body = String::new();
        if style.is_table() && list.child("listheader").is_none() {
            body.push_str(&fill_template(LIST_TABLE_HEADER, &["Term", "Description"]));
        }
        body.push_str(&self.render_all(&list.children, context.with_list(style))?);
        Ok(body)
    }

    fn table_row<'a>(
        &self,
        element: &'a XmlElement,
        attribute: &str,
        context: RenderContext<'a>,
    ) -> Result<Vec<String>> {
        let name = strip_member_prefix(element.required_attribute(attribute)?);
        Ok(vec![
            table_cell(name),
            table_cell(&self.render_children(element, context)?),
        ])
    }

    /// Cells of a table list row. A row without `term` and `description`
    /// children puts its own content in the first cell.
    fn table_item_cells<'a>(
        &self,
        item: &'a XmlElement,
        context: RenderContext<'a>,
    ) -> Result<Vec<String>> {
        let term = item.child("term");
        let description = item.child("description");
        if term.is_none() && description.is_none() {
            return Ok(vec![table_cell(&self.render_children(item, context)?), String::new()]);
        }
        Ok(vec![self.cell(term, context)?, self.cell(description, context)?])
    }

    fn cell<'a>(&self, element: Option<&'a XmlElement>, context: RenderContext<'a>) -> Result<String> {
        match element {
            Some(element) => Ok(table_cell(&self.render_children(element, context)?)),
            None => Ok(String::new()),
        }
    }

    fn link_label<'a>(
        &self,
        element: &'a XmlElement,
        fallback: &str,
        context: RenderContext<'a>,
    ) -> Result<String> {
        let rendered = self.render_children(element, context)?;
        let label = match rendered.trim() {
            "" => fallback,
            label => label,
        };
        Ok(label.to_string())
    }
}
