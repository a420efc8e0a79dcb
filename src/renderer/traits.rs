use once_cell::sync::Lazy;

use crate::config::ConvertOptions;
use crate::error::Result;
use crate::parser::XmlElement;

static DEFAULT_OPTIONS: Lazy<ConvertOptions> = Lazy::new(ConvertOptions::default);

/// Traversal state for one conversion.
///
/// The context is passed down by value. Elements that change it (`doc`,
/// `list`) hand a modified copy to their children, so nothing set while
/// rendering one subtree is visible to its siblings.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Assembly name, known once the `doc` root has been entered
    pub root_name: Option<&'a str>,
    /// The `T:*.NamespaceDoc` member hoisted into the document summary
    pub namespace_doc: Option<&'a XmlElement>,
    pub list: ListStyle,
    pub options: &'a ConvertOptions,
}

impl<'a> RenderContext<'a> {
    pub fn new(options: &'a ConvertOptions) -> Self {
        Self {
            root_name: None,
            namespace_doc: None,
            list: ListStyle::Plain,
            options,
        }
    }

    pub fn with_document(&self, root_name: &'a str, namespace_doc: Option<&'a XmlElement>) -> Self {
        Self {
            root_name: Some(root_name),
            namespace_doc,
            ..*self
        }
    }

    pub fn with_list(&self, list: ListStyle) -> Self {
        Self { list, ..*self }
    }
}

impl Default for RenderContext<'static> {
    fn default() -> Self {
        Self::new(&DEFAULT_OPTIONS)
    }
}

/// Rendering mode of the innermost enclosing `<list>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListStyle {
    Number,
    Bullet,
    Table,
    #[default]
    Plain,
}

impl ListStyle {
    /// Map the `type` attribute of a `<list>` element
    pub fn from_type(list_type: Option<&str>) -> Self {
        match list_type {
            Some("number") => ListStyle::Number,
            Some("bullet") => ListStyle::Bullet,
            Some("table") => ListStyle::Table,
            _ => ListStyle::Plain,
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            ListStyle::Number => "1.",
            ListStyle::Bullet => "*",
            ListStyle::Table => "|",
            ListStyle::Plain => "",
        }
    }

    pub fn is_table(self) -> bool {
        self == ListStyle::Table
    }
}

/// Core rendering trait for documentation trees
pub trait Render {
    fn render<'a>(&'a self, context: RenderContext<'a>) -> Result<String>;
}
