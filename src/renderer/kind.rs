use crate::error::{ConvertError, Result};
use crate::parser::{XmlElement, XmlNode};
use crate::renderer::components::{is_namespace_doc, strip_member_prefix, ANCHOR_PREFIX};
use crate::renderer::traits::RenderContext;

/// What an element renders as.
///
/// Resolved on every visit from the tag name, the attributes, the preceding
/// sibling and the render context. It is never stored on the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Doc,
    Type,
    Field,
    Property,
    Method,
    Event,
    Summary,
    Remarks,
    Example,
    Code,
    /// Reference outside this document, shown as inline code
    SeePage,
    /// `!:#anchor` reference to a heading in this document
    SeeAnchor,
    /// Reference to a member of this assembly, linked to its heading
    SeeHeader,
    Param,
    TypeParam,
    /// A `param` or `typeparam` continuing the table opened by its sibling
    Param2,
    ParamRef,
    TypeParamRef,
    Exception,
    /// An `exception` continuing the table opened by its sibling
    Exception2,
    Returns,
    Para,
    Value,
    C,
    List,
    ListHeader,
    Item,
    TableItem,
    Term,
    Description,
    None,
}

/// Resolve the kind of `element`, given the sibling node right before it.
pub fn classify(
    element: &XmlElement,
    previous: Option<&XmlNode>,
    context: &RenderContext,
) -> Result<ElementKind> {
    let previous_tag = previous.and_then(XmlNode::tag);
    let previous_was_parameter = matches!(previous_tag, Some("param" | "typeparam"));

    let kind = match element.name.as_str() {
        "doc" => ElementKind::Doc,
        "member" => classify_member(element)?,
        "param" | "typeparam" if previous_was_parameter => ElementKind::Param2,
        "param" => ElementKind::Param,
        "typeparam" => ElementKind::TypeParam,
        "exception" if previous_tag == Some("exception") => ElementKind::Exception2,
        "exception" => ElementKind::Exception,
        "see" | "seealso" => classify_reference(element, context)?,
        "item" if context.list.is_table() => ElementKind::TableItem,
        "item" => ElementKind::Item,
        "list" => ElementKind::List,
        "listheader" => ElementKind::ListHeader,
        "term" => ElementKind::Term,
        "description" => ElementKind::Description,
        "summary" => ElementKind::Summary,
        "remarks" => ElementKind::Remarks,
        "example" => ElementKind::Example,
        "code" => ElementKind::Code,
        "paramref" => ElementKind::ParamRef,
        "typeparamref" => ElementKind::TypeParamRef,
        "returns" => ElementKind::Returns,
        "para" => ElementKind::Para,
        "value" => ElementKind::Value,
        "c" => ElementKind::C,
        other => return Err(ConvertError::UnknownElement(other.to_string())),
    };

    Ok(kind)
}

/// True when `node` follows a parameter or exception row without continuing
/// that table, so a blank line must separate it from the table.
pub fn ends_table(previous: Option<&XmlNode>, node: &XmlNode) -> bool {
    let continues = match (previous.and_then(XmlNode::tag), node.tag()) {
        (Some("param" | "typeparam"), Some(tag)) => matches!(tag, "param" | "typeparam"),
        (Some("exception"), Some(tag)) => tag == "exception",
        (Some("param" | "typeparam" | "exception"), None) => false,
        _ => return false,
    };
    !continues
}

fn classify_member(member: &XmlElement) -> Result<ElementKind> {
    let name = member.required_attribute("name")?;
    let kind = match name.chars().next() {
        Some('F') => ElementKind::Field,
        Some('P') => ElementKind::Property,
        Some('T') if is_namespace_doc(member) => ElementKind::None,
        Some('T') => ElementKind::Type,
        Some('E') => ElementKind::Event,
        Some('M') => ElementKind::Method,
        _ => ElementKind::None,
    };
    Ok(kind)
}

fn classify_reference(see: &XmlElement, context: &RenderContext) -> Result<ElementKind> {
    if see.attribute("cref").is_none() && see.attribute("langword").is_some() {
        return Ok(ElementKind::SeePage);
    }

    let target = strip_member_prefix(see.required_attribute("cref")?);
    let kind = if target.starts_with(ANCHOR_PREFIX) {
        ElementKind::SeeAnchor
    } else if context.root_name.is_some_and(|root| target.starts_with(root)) {
        ElementKind::SeeHeader
    } else {
        ElementKind::SeePage
    };
    Ok(kind)
}
