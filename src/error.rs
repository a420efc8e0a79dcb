use thiserror::Error;

/// Errors raised while parsing or converting a documentation file
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed document: {0}")]
    Malformed(String),

    #[error("element <{element}> is missing required attribute '{attribute}'")]
    MissingAttribute { element: String, attribute: String },

    #[error("element <{parent}> is missing required child <{child}>")]
    MissingElement { parent: String, child: String },

    #[error("no renderer for element <{0}>")]
    UnknownElement(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
