mod blocks;
mod html;
mod inlines;
mod ser;

pub(crate) use blocks::ordered_marker_len;
pub use blocks::{BlockType, block_to_block_type, heading_level};
pub use html::{Attributes, HtmlNode};
pub use inlines::{
    extract_markdown_images, extract_markdown_links, split_nodes_delimiter, split_nodes_image, split_nodes_link,
    text_to_textnodes,
};

use crate::ParseError;

/// Formatting applied to a run of inline text.
///
/// `Text` is plain, unformatted text. Only `Link` and `Image` carry a URL on
/// their [`TextNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextType {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl TextType {
    pub fn as_str(self) -> &'static str {
        match self {
            TextType::Text => "text",
            TextType::Bold => "bold",
            TextType::Italic => "italic",
            TextType::Code => "code",
            TextType::Link => "link",
            TextType::Image => "image",
        }
    }
}

impl std::fmt::Display for TextType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TextType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(TextType::Text),
            "bold" => Ok(TextType::Bold),
            "italic" => Ok(TextType::Italic),
            "code" => Ok(TextType::Code),
            "link" => Ok(TextType::Link),
            "image" => Ok(TextType::Image),
            other => Err(ParseError::UnknownKind(other.to_string())),
        }
    }
}

/// A run of inline text produced by [`text_to_textnodes`].
///
/// Equality is structural over text, type and URL. A URL is present exactly when the
/// type is [`TextType::Link`] or [`TextType::Image`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTextNode"))]
pub struct TextNode {
    text: String,
    text_type: TextType,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    url: Option<String>,
}

impl TextNode {
    /// Create a node of any type. Links and images get an empty URL; use
    /// [`TextNode::link`] or [`TextNode::image`] to set one.
    pub fn new(text: impl Into<String>, text_type: TextType) -> Self {
        let url = matches!(text_type, TextType::Link | TextType::Image).then(String::new);
        Self { text: text.into(), text_type, url }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self { text: text.into(), text_type: TextType::Link, url: Some(url.into()) }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self { text: alt.into(), text_type: TextType::Image, url: Some(url.into()) }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_type(&self) -> TextType {
        self.text_type
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.text_type == TextType::Text
    }
}

/// Unchecked wire shape of [`TextNode`]; converted with the URL invariant enforced.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTextNode {
    text: String,
    text_type: TextType,
    #[serde(default)]
    url: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTextNode> for TextNode {
    type Error = String;

    fn try_from(raw: RawTextNode) -> Result<Self, Self::Error> {
        let wants_url = matches!(raw.text_type, TextType::Link | TextType::Image);
        match (wants_url, raw.url) {
            (true, Some(url)) => Ok(Self { text: raw.text, text_type: raw.text_type, url: Some(url) }),
            (false, None) => Ok(Self::new(raw.text, raw.text_type)),
            (true, None) => Err(format!("{} node requires a url", raw.text_type)),
            (false, Some(_)) => Err(format!("{} node cannot carry a url", raw.text_type)),
        }
    }
}

impl std::fmt::Display for TextNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.url {
            Some(url) => write!(f, "TextNode({}, {}, {url})", self.text, self.text_type),
            None => write!(f, "TextNode({}, {}, None)", self.text, self.text_type),
        }
    }
}

/// Map an inline node onto the leaf [`HtmlNode`] that renders it.
///
/// | type   | tag    | value  | attributes         |
/// |--------|--------|--------|--------------------|
/// | text   | none   | text   |                    |
/// | bold   | `b`    | text   |                    |
/// | italic | `i`    | text   |                    |
/// | code   | `code` | text   |                    |
/// | link   | `a`    | text   | `href`             |
/// | image  | `img`  | `""`   | `src`, `alt`       |
pub fn text_node_to_html_node(node: &TextNode) -> HtmlNode {
    let url = node.url.clone().unwrap_or_default();
    match node.text_type {
        TextType::Text => HtmlNode::text(node.text.clone()),
        TextType::Bold => HtmlNode::leaf("b", node.text.clone()),
        TextType::Italic => HtmlNode::leaf("i", node.text.clone()),
        TextType::Code => HtmlNode::leaf("code", node.text.clone()),
        TextType::Link => HtmlNode::leaf("a", node.text.clone()).with_attribute("href", url),
        TextType::Image => HtmlNode::leaf("img", "")
            .with_attribute("src", url)
            .with_attribute("alt", node.text.clone()),
    }
}
