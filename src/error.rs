use thiserror::Error;

/// Failures raised while turning Markdown text into inline nodes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unbalanced `{delimiter}` delimiter in: {text}")]
    UnbalancedDelimiter { delimiter: String, text: String },
    #[error("invalid markdown, {kind} section not closed: {markup}")]
    MalformedMarkup { kind: &'static str, markup: String },
    #[error("unknown text type: {0}")]
    UnknownKind(String),
}

/// Failures raised while rendering an [`HtmlNode`](crate::HtmlNode).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("leaf node <{}> has no value", .tag.as_deref().unwrap_or("text"))]
    MissingValue { tag: Option<String> },
    #[error("parent node has no tag")]
    MissingTag,
    #[error("parent node <{tag}> has no children")]
    MissingChildren { tag: String },
}

/// Any failure of the document pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
